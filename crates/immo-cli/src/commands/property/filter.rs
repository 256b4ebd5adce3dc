use immo_core::FilterCriteria;
use immo_core::validation::{Optionality, validate_range};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::listing::gated_listing;
use crate::context::AppContext;
use crate::output::output_listing;

pub fn handle(args: &FilterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let criteria = criteria_from_args(args)?;
    tracing::debug!(?criteria, "filtering properties");

    let session = ctx.session()?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let response = gated_listing(&session, &ctx.store, criteria, limit)?;
    output_listing(&response, flags.format)
}

fn criteria_from_args(args: &FilterArgs) -> anyhow::Result<FilterCriteria> {
    let price = validate_range(args.min_price, args.max_price, Optionality::Optional)?;
    Ok(FilterCriteria::any()
        .with_price(price)
        .with_city(args.city)
        .with_property_type(args.property_type)
        .with_bedrooms(args.bedrooms)
        .with_bathrooms(args.bathrooms))
}

#[cfg(test)]
mod tests {
    use immo_core::{City, ValidationError};

    use super::criteria_from_args;
    use crate::cli::subcommands::FilterArgs;

    fn args() -> FilterArgs {
        FilterArgs {
            min_price: None,
            max_price: None,
            city: None,
            property_type: None,
            bedrooms: None,
            bathrooms: None,
        }
    }

    #[test]
    fn no_flags_means_match_everything() {
        assert!(criteria_from_args(&args()).expect("criteria").is_empty());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = criteria_from_args(&FilterArgs {
            min_price: Some(500_000),
            max_price: Some(100_000),
            ..args()
        })
        .expect_err("inverted range");
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::InvertedRange {
                min: 500_000,
                max: 100_000
            })
        );
    }

    #[test]
    fn flags_map_onto_criteria_fields() {
        let criteria = criteria_from_args(&FilterArgs {
            max_price: Some(300_000),
            city: Some(City::Toronto),
            bathrooms: Some(2),
            ..args()
        })
        .expect("criteria");
        assert_eq!(criteria.price.max(), Some(300_000));
        assert_eq!(criteria.city, Some(City::Toronto));
        assert_eq!(criteria.bathrooms, Some(2));
        assert_eq!(criteria.bedrooms, None);
    }
}
