mod add;
mod filter;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PropertyCommands;
use crate::context::AppContext;

/// Handle `immo property <subcommand>`.
pub fn handle(
    action: &PropertyCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PropertyCommands::List => list::handle(ctx, flags),
        PropertyCommands::Filter(args) => filter::handle(args, ctx, flags),
        PropertyCommands::Add(args) => add::handle(args, ctx, flags),
    }
}
