use immo_core::responses::AuthResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session()?;
    let message = session.current_user().map_or_else(
        || "Aucun utilisateur connecté.".to_string(),
        |user| format!("Connecté en tant que {user}."),
    );

    output(
        &AuthResponse {
            authenticated: session.is_authenticated(),
            user: session.current_user().map(str::to_string),
            message,
        },
        flags.format,
    )
}
