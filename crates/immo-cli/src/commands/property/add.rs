use anyhow::Context;
use immo_core::gate::authorize;
use immo_core::responses::PropertyAddResponse;
use immo_core::{Action, PropertyRecord, Session};
use immo_store::PropertyStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AddArgs;
use crate::context::AppContext;
use crate::output::output;

const ADD_REFUSED_MESSAGE: &str = "Connectez-vous pour ajouter une propriété.";

pub fn handle(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session()?;
    let record = PropertyRecord::new(
        args.price,
        args.city,
        args.property_type,
        args.bedrooms,
        args.bathrooms,
    );
    let response = add_property(&session, &mut ctx.store, record)?;
    output(&response, flags.format)
}

/// Append `record` for a signed-in session.
///
/// An anonymous session gets `added: false` and the store is left untouched.
pub fn add_property<S>(
    session: &Session,
    store: &mut S,
    record: PropertyRecord,
) -> anyhow::Result<PropertyAddResponse>
where
    S: PropertyStore + ?Sized,
{
    if let Err(denied) = authorize(session, Action::AddProperty) {
        tracing::info!(%denied, "add refused");
        return Ok(PropertyAddResponse {
            added: false,
            property: None,
            message: ADD_REFUSED_MESSAGE.to_string(),
        });
    }

    let count = store
        .append_property(record)
        .context("failed to save property")?;
    tracing::info!(price = record.price, city = %record.city, count, "property added");

    Ok(PropertyAddResponse {
        added: true,
        property: Some(record),
        message: "Propriété ajoutée avec succès.".to_string(),
    })
}
