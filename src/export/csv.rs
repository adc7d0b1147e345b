//! CSV export of a billing statement

use std::io::Write;

use crate::error::CardCycleResult;
use crate::services::Statement;

/// Write a statement's charges as CSV, followed by a total row
///
/// Amounts are plain decimals without a currency symbol so spreadsheets can
/// sum them.
pub fn export_statement_csv<W: Write>(statement: &Statement, writer: W) -> CardCycleResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "Period",
        "ID",
        "Date",
        "Description",
        "Category",
        "Amount",
    ])?;

    let period = statement.period.to_string();
    for expense in &statement.expenses {
        csv_writer.write_record([
            period.clone(),
            expense.id.as_uuid().to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            expense.description.clone(),
            expense.category.clone().unwrap_or_default(),
            expense.amount.format_with_symbol(""),
        ])?;
    }

    csv_writer.write_record([
        period,
        String::new(),
        String::new(),
        "TOTAL".to_string(),
        String::new(),
        statement.total.format_with_symbol(""),
    ])?;

    csv_writer.flush()?;
    Ok(())
}
