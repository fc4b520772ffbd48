pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "greeter-utils")]
#[command(about = "Greets people, adds numbers and describes people")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Print a greeting for NAME
    Greet { name: String },

    /// Print the sum of two integers
    Add {
        #[arg(allow_hyphen_values = true)]
        a: i64,
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },

    /// Introduce a person and print their details
    Person {
        name: String,
        #[arg(allow_hyphen_values = true)]
        age: i64,

        #[arg(long, help = "Print details as JSON")]
        json: bool,
    },

    /// Greet everyone listed in a TOML roster
    Roster {
        /// Path to TOML roster file
        #[arg(short, long, default_value = "roster.toml")]
        config: String,
    },
}
