//! Preference CLI commands

use clap::{Subcommand, ValueEnum};

use crate::config::{CardCyclePaths, Settings};
use crate::error::CardCycleResult;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// Preference subcommands
#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Show current preferences
    Show,

    /// Show or mask amounts in listings
    #[command(alias = "amounts")]
    SetAmounts {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Mark a guided tour as completed
    CompleteTour { name: String },
}

pub fn handle_prefs_command(
    paths: &CardCyclePaths,
    settings: &mut Settings,
    cmd: PrefsCommands,
) -> CardCycleResult<()> {
    match cmd {
        PrefsCommands::Show => {
            let prefs = &settings.preferences;
            println!(
                "Show amounts:    {}",
                if prefs.show_amounts { "on" } else { "off" }
            );
            if prefs.completed_tours.is_empty() {
                println!("Completed tours: (none)");
            } else {
                let tours: Vec<&str> = prefs.completed_tours.iter().map(String::as_str).collect();
                println!("Completed tours: {}", tours.join(", "));
            }
        }

        PrefsCommands::SetAmounts { state } => {
            settings.preferences.show_amounts = matches!(state, Toggle::On);
            settings.save(paths)?;
            println!(
                "Amounts will be {}.",
                if settings.preferences.show_amounts {
                    "shown"
                } else {
                    "masked"
                }
            );
        }

        PrefsCommands::CompleteTour { name } => {
            if settings.preferences.has_completed_tour(&name) {
                println!("Tour '{}' was already completed.", name);
            } else {
                settings.preferences.complete_tour(name.as_str());
                settings.save(paths)?;
                println!("Tour '{}' marked as completed.", name);
            }
        }
    }

    Ok(())
}
