//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hamster", version, about = "Raise, feed, breed and sell hamsters")]
pub struct Cli {
    /// Account email
    #[arg(long, env = "HAMSTER_EMAIL", global = true)]
    pub email: Option<String>,

    /// Account password
    #[arg(long, env = "HAMSTER_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Directory of the game database
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Also write logs to this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create an account with the credentials
    Register,
    /// Show the account and its hamsters
    Profile,
    /// List owned hamsters
    Hamsters,
    /// Show one hamster
    Hamster { id: u64 },
    /// Refill a hamster's hunger for gold
    Feed { id: u64 },
    /// Sell a hamster
    Sell { id: u64 },
    /// Breed a male and a female
    Reproduce { first: u64, second: u64 },
    /// Skip days for the whole household
    Sleep {
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Rename a hamster
    Rename { id: u64, name: String },
    /// Delete an account and its hamsters (admin only)
    DeleteAccount { id: u64 },
    /// Create fixture accounts that do not exist yet
    Seed {
        /// JSON scenario file; defaults to the test player
        #[arg(long)]
        file: Option<PathBuf>,
        /// Also create an admin with this email (needs an admin login)
        #[arg(long, requires = "admin_password")]
        admin_email: Option<String>,
        #[arg(long)]
        admin_password: Option<String>,
    },
}
