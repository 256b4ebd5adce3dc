mod auth;
mod property;

pub use auth::{AuthCommands, CredentialArgs};
pub use property::{AddArgs, FilterArgs, PropertyCommands};
