use immo_core::responses::AuthResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let was_signed_in = immo_auth::logout(&mut ctx.sessions)?;
    let message = if was_signed_in {
        "Déconnexion réussie."
    } else {
        "Aucun utilisateur connecté."
    };

    output(
        &AuthResponse {
            authenticated: false,
            user: None,
            message: message.to_string(),
        },
        flags.format,
    )
}
