use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, PropertyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Accounts and the signed-in session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Property listings.
    Property {
        #[command(subcommand)]
        action: PropertyCommands,
    },
    /// Interactive numbered menu (default).
    Menu,
    /// Print the JSON schema of a stored property record.
    Schema,
}
