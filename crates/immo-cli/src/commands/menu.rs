//! The interactive numbered menu.
//!
//! Options depend on whether someone is signed in, and the session is
//! re-read before every prompt so it always reflects the session file.

use std::io::{BufRead, Write};

use immo_auth::{AuthError, current_session};
use immo_core::gate::{allowed_actions, authorize, is_authenticated};
use immo_core::validation::{Optionality, parse_city, parse_positive_int, parse_property_type};
use immo_core::{
    Action, City, FilterCriteria, NO_PROPERTIES_MESSAGE, PropertyRecord, PropertyType, Session,
};
use immo_store::{CredentialStore, PropertyStore, SessionStore};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::value_parsers;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::listing::gated_listing;
use crate::context::AppContext;
use crate::output::{self, render_listing, table::TableOptions};
use crate::prompt::Prompter;

const INVALID_OPTION: &str = "Option invalide.";
const FAREWELL: &str = "Solo Immo: Trouvez votre chez-vous, sans les agents embêtants !";
const BEDROOMS: &str = "Nombre de chambres: ";
const BATHROOMS: &str = "Nombre de salles de bains: ";

const FILTER_OPTIONS: [&str; 6] = [
    "Filtrer par prix",
    "Filtrer par ville",
    "Filtrer par type de propriété",
    "Filtrer par nombre de chambres",
    "Filtrer par nombre de salles de bains",
    "Filtrer par une combinaison des options",
];

pub struct MenuSettings {
    pub banner: String,
    pub limit: Option<usize>,
    pub table: TableOptions,
}

/// Handle `immo menu` (and a bare `immo`).
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = MenuSettings {
        banner: ctx.config.general.banner.clone(),
        limit: effective_limit(flags.limit, ctx.config.general.default_limit),
        table: output::table_options(),
    };
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    run(&mut prompter, &mut ctx.store, &mut ctx.sessions, &settings)
}

/// Drive the menu until the user quits.
///
/// # Errors
///
/// Storage failures and end of input abort the loop. Rejected input and
/// refused actions are reported to the user and the loop carries on.
pub fn run<R, W, St, Se>(
    prompter: &mut Prompter<R, W>,
    store: &mut St,
    sessions: &mut Se,
    settings: &MenuSettings,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    St: PropertyStore + CredentialStore,
    Se: SessionStore,
{
    prompter.say(&settings.banner)?;

    loop {
        let session = current_session(&*sessions)?;
        let actions = allowed_actions(&session);

        prompter.say("\nOptions:")?;
        for (index, action) in actions.iter().enumerate() {
            prompter.say(format_args!("{}. {}", index + 1, action.label()))?;
        }

        let choice = prompter.ask("Choisissez une option: ")?;
        let Some(action) = pick(&actions, &choice) else {
            prompter.say(INVALID_OPTION)?;
            continue;
        };
        tracing::debug!(%action, "menu choice");

        match action {
            Action::ListProperties => {
                show_listing(prompter, &*store, &session, FilterCriteria::any(), settings)?;
            }
            Action::FilterProperties => filter_properties(prompter, &*store, &session, settings)?,
            Action::AddProperty => add_property(prompter, store, &session)?,
            Action::Register => register_account(prompter, store)?,
            Action::Login => sign_in(prompter, &*store, sessions)?,
            Action::Logout => {
                immo_auth::logout(sessions)?;
                prompter.say("Déconnexion réussie.")?;
            }
            Action::Quit => {
                prompter.say(FAREWELL)?;
                return Ok(());
            }
        }
    }
}

/// Map a 1-based menu choice onto the displayed actions.
fn pick(actions: &[Action], choice: &str) -> Option<Action> {
    let index = choice.trim().parse::<usize>().ok()?;
    index.checked_sub(1).and_then(|i| actions.get(i)).copied()
}

fn show_listing<R: BufRead, W: Write, St: PropertyStore>(
    prompter: &mut Prompter<R, W>,
    store: &St,
    session: &Session,
    criteria: FilterCriteria,
    settings: &MenuSettings,
) -> anyhow::Result<()> {
    let response = gated_listing(session, store, criteria, settings.limit)?;
    prompter.say(render_listing(&response, OutputFormat::Table, settings.table)?)
}

fn filter_properties<R: BufRead, W: Write, St: PropertyStore>(
    prompter: &mut Prompter<R, W>,
    store: &St,
    session: &Session,
    settings: &MenuSettings,
) -> anyhow::Result<()> {
    if !is_authenticated(session) || store.load_properties()?.is_empty() {
        return prompter.say(NO_PROPERTIES_MESSAGE);
    }

    prompter.say("\nOptions de filtrage:")?;
    for (index, label) in FILTER_OPTIONS.iter().enumerate() {
        prompter.say(format_args!("{}. {label}", index + 1))?;
    }
    let choice = prompter.ask("Choisissez une option de filtrage: ")?;

    let Some(criteria) = ask_criteria(prompter, &choice)? else {
        return prompter.say(INVALID_OPTION);
    };
    show_listing(prompter, store, session, criteria, settings)
}

/// Prompt for the fields that filter option `choice` covers. A single-field
/// option makes its field required; the price range and the combination
/// accept empty answers.
fn ask_criteria<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    choice: &str,
) -> anyhow::Result<Option<FilterCriteria>> {
    use immo_core::validation::Optionality::{Optional, Required};

    let criteria = FilterCriteria::any();
    let criteria = match choice.trim() {
        "1" => criteria.with_price(prompter.ask_price_range(Optional)?),
        "2" => criteria.with_city(ask_city(prompter, Required)?),
        "3" => criteria.with_property_type(ask_property_type(prompter, Required)?),
        "4" => criteria.with_bedrooms(ask_count(prompter, BEDROOMS, Required)?),
        "5" => criteria.with_bathrooms(ask_count(prompter, BATHROOMS, Required)?),
        "6" => criteria
            .with_price(prompter.ask_price_range(Optional)?)
            .with_city(ask_city(prompter, Optional)?)
            .with_property_type(ask_property_type(prompter, Optional)?)
            .with_bedrooms(ask_count(prompter, BEDROOMS, Optional)?)
            .with_bathrooms(ask_count(prompter, BATHROOMS, Optional)?),
        _ => return Ok(None),
    };
    Ok(Some(criteria))
}

fn ask_city<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    optionality: Optionality,
) -> anyhow::Result<Option<City>> {
    prompter.say(format_args!(
        "Choisissez une ville parmi les suivantes: {}",
        City::choices()
    ))?;
    prompter.ask_until_valid("Ville: ", |raw| parse_city(raw, optionality))
}

fn ask_property_type<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    optionality: Optionality,
) -> anyhow::Result<Option<PropertyType>> {
    prompter.say(format_args!(
        "Choisissez un type de propriété parmi les suivants: {}",
        PropertyType::choices()
    ))?;
    prompter.ask_until_valid("Type de propriété: ", |raw| {
        parse_property_type(raw, optionality)
    })
}

fn ask_count<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    label: &str,
    optionality: Optionality,
) -> anyhow::Result<Option<u32>> {
    prompter.ask_until_valid(label, |raw| parse_positive_int(raw, optionality))
}

fn add_property<R: BufRead, W: Write, St: PropertyStore>(
    prompter: &mut Prompter<R, W>,
    store: &mut St,
    session: &Session,
) -> anyhow::Result<()> {
    if let Err(denied) = authorize(session, Action::AddProperty) {
        tracing::info!(%denied, "add refused");
        return prompter.say("Connectez-vous pour ajouter une propriété.");
    }

    let price = prompter.ask_until_valid("Prix: ", value_parsers::price)?;
    prompter.say(format_args!(
        "Choisissez une ville parmi les suivantes: {}",
        City::choices()
    ))?;
    let city = prompter.ask_until_valid("Ville: ", value_parsers::city)?;
    prompter.say(format_args!(
        "Choisissez un type de propriété parmi les suivants: {}",
        PropertyType::choices()
    ))?;
    let property_type = prompter.ask_until_valid("Type de propriété: ", value_parsers::property_type)?;
    let bedrooms = prompter.ask_until_valid(BEDROOMS, value_parsers::room_count)?;
    let bathrooms = prompter.ask_until_valid(BATHROOMS, value_parsers::room_count)?;

    let record = PropertyRecord::new(price, city, property_type, bedrooms, bathrooms);
    let count = store.append_property(record)?;
    tracing::info!(price, %city, count, "property added");
    prompter.say("Propriété ajoutée avec succès.")
}

fn register_account<R: BufRead, W: Write, St: CredentialStore>(
    prompter: &mut Prompter<R, W>,
    store: &mut St,
) -> anyhow::Result<()> {
    let username = prompter.ask("Nom d'utilisateur: ")?;
    if store.load_credentials()?.contains(username.trim()) {
        return prompter.say("Nom d'utilisateur déjà pris.");
    }
    let password = prompter.ask("Mot de passe: ")?;

    if report(prompter, immo_auth::register(store, &username, &password))?.is_some() {
        prompter.say("Compte créé avec succès.")?;
    }
    Ok(())
}

fn sign_in<R: BufRead, W: Write, St: CredentialStore, Se: SessionStore>(
    prompter: &mut Prompter<R, W>,
    store: &St,
    sessions: &mut Se,
) -> anyhow::Result<()> {
    let username = prompter.ask("Nom d'utilisateur: ")?;
    let password = prompter.ask("Mot de passe: ")?;

    if report(prompter, immo_auth::login(store, sessions, &username, &password))?.is_some() {
        prompter.say("Connexion réussie.")?;
    }
    Ok(())
}

/// Show user-facing account errors and keep going; storage errors abort.
fn report<R: BufRead, W: Write, T>(
    prompter: &mut Prompter<R, W>,
    result: Result<T, AuthError>,
) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AuthError::Store(error)) => Err(error.into()),
        Err(error) => {
            prompter.say(error)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use immo_core::{City, PropertyRecord, PropertyType};
    use immo_store::{CredentialStore, MemorySessionStore, MemoryStore, PropertyStore, SessionStore};
    use pretty_assertions::assert_eq;

    use super::{MenuSettings, run};
    use crate::output::table::TableOptions;
    use crate::prompt::Prompter;

    fn settings() -> MenuSettings {
        MenuSettings {
            banner: "Bienvenue sur Solo Immo !".to_string(),
            limit: None,
            table: TableOptions {
                max_width: None,
                color: false,
            },
        }
    }

    fn seeded_store() -> MemoryStore {
        MemoryStore::with_properties(vec![
            PropertyRecord::new(200_000, City::Quebec, PropertyType::Condo, 2, 1),
            PropertyRecord::new(450_000, City::Montreal, PropertyType::Maison, 4, 2),
            PropertyRecord::new(320_000, City::Quebec, PropertyType::Loft, 1, 1),
        ])
    }

    /// Run the menu over `input` and return everything it printed.
    fn drive(
        input: &str,
        store: &mut MemoryStore,
        sessions: &mut MemorySessionStore,
    ) -> anyhow::Result<String> {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run(&mut prompter, store, sessions, &settings());
        let out = String::from_utf8(prompter.into_output()).expect("utf-8 output");
        result.map(|()| out)
    }

    #[test]
    fn anonymous_listing_prints_fixed_message() {
        let mut store = seeded_store();
        let mut sessions = MemorySessionStore::new();

        let out = drive("1\n5\n", &mut store, &mut sessions).expect("menu");

        assert!(out.starts_with("Bienvenue sur Solo Immo !"));
        assert!(out.contains("3. Créer un compte"));
        assert!(out.contains("Aucune propriété disponible."));
        assert!(!out.contains("200 000 $"));
        assert!(out.contains("Trouvez votre chez-vous"));
    }

    #[test]
    fn register_login_then_list() {
        let mut store = seeded_store();
        let mut sessions = MemorySessionStore::new();

        let out = drive(
            "3\nalice\npw\n4\nalice\npw\n1\n5\n",
            &mut store,
            &mut sessions,
        )
        .expect("menu");

        assert!(out.contains("Compte créé avec succès."));
        assert!(out.contains("Connexion réussie."));
        assert!(out.contains("3. Ajouter une propriété"));
        assert!(out.contains("200 000 $"));
        assert!(out.contains("450 000 $"));
        assert_eq!(sessions.current_user().expect("read").as_deref(), Some("alice"));
    }

    #[test]
    fn duplicate_registration_is_refused_before_password() {
        let mut store = MemoryStore::new();
        let mut sessions = MemorySessionStore::new();
        immo_auth::register(&mut store, "alice", "pw").expect("seed account");

        let out = drive("3\nalice\n5\n", &mut store, &mut sessions).expect("menu");

        assert!(out.contains("Nom d'utilisateur déjà pris."));
        assert!(!out.contains("Mot de passe: "));
        assert_eq!(store.load_credentials().expect("load").len(), 1);
    }

    #[test]
    fn wrong_password_keeps_anonymous_menu() {
        let mut store = MemoryStore::new();
        let mut sessions = MemorySessionStore::new();
        immo_auth::register(&mut store, "alice", "pw").expect("seed account");

        let out = drive("4\nalice\nnope\n5\n", &mut store, &mut sessions).expect("menu");

        assert!(out.contains("Nom d'utilisateur ou mot de passe incorrect."));
        assert_eq!(sessions.current_user().expect("read"), None);
    }

    #[test]
    fn filter_by_city_then_combination() {
        let mut store = seeded_store();
        let mut sessions = MemorySessionStore::signed_in("alice");

        let out = drive(
            // city filter, with one rejected city first
            "2\n2\nParis\nquébec\n\
             2\n6\n250000\n\n\nloft\n\n\n\
             5\n",
            &mut store,
            &mut sessions,
        )
        .expect("menu");

        assert!(out.contains("Ville invalide."));
        assert_eq!(out.matches("200 000 $").count(), 1);
        assert_eq!(out.matches("320 000 $").count(), 2);
        assert!(!out.contains("450 000 $"));
    }

    #[test]
    fn filter_with_no_match_prints_fixed_message() {
        let mut store = seeded_store();
        let mut sessions = MemorySessionStore::signed_in("alice");

        let out = drive("2\n4\n7\n5\n", &mut store, &mut sessions).expect("menu");

        assert!(out.contains("Choisissez une option de filtrage: "));
        assert!(out.contains("Aucune propriété disponible."));
    }

    #[test]
    fn bad_choices_print_invalid_option() {
        let mut store = seeded_store();
        let mut sessions = MemorySessionStore::signed_in("alice");

        let out = drive("9\nabc\n2\n8\n5\n", &mut store, &mut sessions).expect("menu");

        assert_eq!(out.matches("Option invalide.").count(), 3);
    }

    #[test]
    fn add_property_reprompts_then_saves() {
        let mut store = MemoryStore::new();
        let mut sessions = MemorySessionStore::signed_in("alice");

        let out = drive(
            "3\n-10\n275000\nottawa\nCONDO\n0\n2\n1\n5\n",
            &mut store,
            &mut sessions,
        )
        .expect("menu");

        assert!(out.contains("Veuillez saisir un nombre positif."));
        assert!(out.contains("Propriété ajoutée avec succès."));
        assert_eq!(
            store.load_properties().expect("load"),
            vec![PropertyRecord::new(275_000, City::Ottawa, PropertyType::Condo, 2, 1)]
        );
    }

    #[test]
    fn logout_returns_to_anonymous_menu() {
        let mut store = seeded_store();
        let mut sessions = MemorySessionStore::signed_in("alice");

        let out = drive("4\n1\n5\n", &mut store, &mut sessions).expect("menu");

        assert!(out.contains("Déconnexion réussie."));
        assert!(out.contains("Aucune propriété disponible."));
        assert_eq!(sessions.current_user().expect("read"), None);
    }

    #[test]
    fn end_of_input_aborts() {
        let mut store = seeded_store();
        let mut sessions = MemorySessionStore::new();
        assert!(drive("1\n", &mut store, &mut sessions).is_err());
    }
}
