use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags),
        Commands::Property { action } => commands::property::handle(&action, ctx, flags),
        Commands::Menu => commands::menu::handle(ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
