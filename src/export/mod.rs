//! Export functionality for cardcycle

pub mod csv;

pub use self::csv::export_statement_csv;
