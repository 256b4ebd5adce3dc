use clap::{Args, Subcommand};

/// Account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account.
    Register(CredentialArgs),
    /// Sign in; replaces any previous session.
    Login(CredentialArgs),
    /// Sign out.
    Logout,
    /// Show who is signed in.
    Status,
}

/// Missing values are prompted for; the password is read hidden on a terminal.
#[derive(Clone, Debug, Args)]
pub struct CredentialArgs {
    #[arg(short, long)]
    pub username: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}
