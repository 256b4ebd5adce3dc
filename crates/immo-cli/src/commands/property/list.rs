use immo_core::FilterCriteria;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::listing::gated_listing;
use crate::context::AppContext;
use crate::output::output_listing;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session()?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let response = gated_listing(&session, &ctx.store, FilterCriteria::any(), limit)?;
    output_listing(&response, flags.format)
}
