use anyhow::Context;
use immo_core::gate::{guarded_query, is_authenticated};
use immo_core::responses::ListingResponse;
use immo_core::{FilterCriteria, ListingOutcome, NO_PROPERTIES_MESSAGE, Session};
use immo_store::PropertyStore;

/// Run a listing through the authorization gate and shape the response.
///
/// Records are only read for a signed-in session. `total` counts every
/// match; `properties` is cut to `limit`.
pub fn gated_listing<S>(
    session: &Session,
    store: &S,
    criteria: FilterCriteria,
    limit: Option<usize>,
) -> anyhow::Result<ListingResponse>
where
    S: PropertyStore + ?Sized,
{
    let records = if is_authenticated(session) {
        store
            .load_properties()
            .context("failed to load properties")?
    } else {
        Vec::new()
    };

    let response = match guarded_query(session, &records, &criteria) {
        ListingOutcome::Refused => {
            tracing::info!("listing refused: nobody is signed in");
            ListingResponse {
                authorized: false,
                criteria,
                total: 0,
                properties: Vec::new(),
                message: Some(NO_PROPERTIES_MESSAGE.to_string()),
            }
        }
        ListingOutcome::Matches(mut matches) => {
            let total = matches.len();
            if let Some(limit) = limit {
                matches.truncate(limit);
            }
            tracing::debug!(total, shown = matches.len(), "listing served");
            ListingResponse {
                authorized: true,
                criteria,
                total,
                message: matches.is_empty().then(|| NO_PROPERTIES_MESSAGE.to_string()),
                properties: matches,
            }
        }
    };
    Ok(response)
}
