use anyhow::Context;
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;

use crate::cli::subcommands::CredentialArgs;
use crate::prompt::Prompter;
use crate::ui;

/// Fill in whatever `--username` / `--password` left out.
///
/// Prompts go to stderr so stdout carries only the command's response.
/// On a terminal the password is read without echo.
pub fn resolve(args: &CredentialArgs) -> anyhow::Result<(String, String)> {
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stderr());

    let username = match &args.username {
        Some(username) => username.clone(),
        None => prompter.ask("Nom d'utilisateur: ")?,
    };

    let password = match &args.password {
        Some(password) => password.clone(),
        None if ui::prefs().interactive => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Mot de passe")
            .interact()
            .context("failed to read password")?,
        None => prompter.ask("Mot de passe: ")?,
    };

    Ok((username, password))
}
