use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardcycle::cli::{
    handle_card_command, handle_expense_command, handle_prefs_command, handle_statement_command,
    CardCommands, ExpenseCommands, PrefsCommands, StatementCommands,
};
use cardcycle::config::{paths::DATA_DIR_ENV, CardCyclePaths, Settings};
use cardcycle::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cardcycle",
    version,
    about = "Track expenses and group credit-card charges by statement",
    long_about = "cardcycle records expenses and buckets the ones paid by credit card \
                  into monthly billing periods, using your card's opening and closing days."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Credit-card cycle configuration
    #[command(subcommand)]
    Card(CardCommands),

    /// Billing statements
    #[command(subcommand, alias = "stmt")]
    Statement(StatementCommands),

    /// Display preferences
    #[command(subcommand)]
    Prefs(PrefsCommands),
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => CardCyclePaths::with_base_dir(dir),
        None => CardCyclePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialized cardcycle at: {}", paths.base_dir().display());
            println!();
            println!("Next, tell cardcycle when your card statement closes:");
            println!("  cardcycle card set --closing 15");
        }
        Some(Commands::Config) => {
            println!("cardcycle Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Date format:            {}", settings.date_format);
            println!("  Default payment method: {}", settings.default_payment_method);
            println!("  Log level:              {}", settings.log_level);
            println!("  Expenses:               {}", storage.expenses.count()?);
            match storage.card.get()? {
                Some(cycle) => println!("  Card cycle:             {}", cycle),
                None => println!("  Card cycle:             (not configured)"),
            }
        }
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Card(cmd)) => handle_card_command(&storage, cmd)?,
        Some(Commands::Statement(cmd)) => handle_statement_command(&storage, &settings, cmd)?,
        Some(Commands::Prefs(cmd)) => handle_prefs_command(&paths, &mut settings, cmd)?,
        None => {
            println!("cardcycle - credit-card statement tracker");
            println!();
            println!("Run 'cardcycle --help' for usage information.");
        }
    }

    Ok(())
}
