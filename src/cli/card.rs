//! Card cycle CLI commands

use clap::Subcommand;

use crate::error::{CardCycleError, CardCycleResult};
use crate::models::CardCycleConfig;
use crate::storage::Storage;

/// Card subcommands
#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// Set the statement closing day (and optionally the opening day)
    Set {
        /// Day of the month the statement closes (1-31)
        #[arg(short, long)]
        closing: u32,
        /// Day of the month the next statement opens (1-31).
        /// Defaults to the day after closing.
        #[arg(short, long)]
        opening: Option<u32>,
    },

    /// Show the configured cycle
    Show,

    /// Remove the cycle configuration
    Clear,
}

pub fn handle_card_command(storage: &Storage, cmd: CardCommands) -> CardCycleResult<()> {
    match cmd {
        CardCommands::Set { closing, opening } => {
            let config = match opening {
                Some(opening) => CardCycleConfig::new(opening, closing),
                None => CardCycleConfig::from_closing_day(closing),
            }
            .map_err(|e| CardCycleError::Validation(e.to_string()))?;

            storage.card.set(config)?;
            storage.card.save()?;
            println!("Card cycle set: {}", config);
        }

        CardCommands::Show => match storage.card.get()? {
            Some(config) => {
                println!("Opening day: {}", config.opening_day);
                println!("Closing day: {}", config.closing_day);
                println!("Cycle:       {}", config);
            }
            None => {
                println!("No card cycle configured.");
                println!("Use 'cardcycle card set --closing <day>' to configure one.");
            }
        },

        CardCommands::Clear => {
            if storage.card.clear()?.is_some() {
                storage.card.save()?;
                println!("Card cycle removed.");
            } else {
                println!("No card cycle was configured.");
            }
        }
    }

    Ok(())
}
