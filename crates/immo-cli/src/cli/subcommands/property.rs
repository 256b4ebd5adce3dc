use clap::{Args, Subcommand};
use immo_core::{City, PropertyType};

use crate::cli::value_parsers;

/// Property commands. All of them need a signed-in user.
#[derive(Clone, Debug, Subcommand)]
pub enum PropertyCommands {
    /// List every property.
    List,
    /// List properties matching all given criteria.
    Filter(FilterArgs),
    /// Add a property.
    Add(AddArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    /// Lowest price, inclusive.
    #[arg(long, value_parser = value_parsers::price_bound)]
    pub min_price: Option<u64>,
    /// Highest price, inclusive.
    #[arg(long, value_parser = value_parsers::price_bound)]
    pub max_price: Option<u64>,
    #[arg(long, value_parser = value_parsers::city)]
    pub city: Option<City>,
    #[arg(long = "type", value_parser = value_parsers::property_type)]
    pub property_type: Option<PropertyType>,
    /// Exact bedroom count.
    #[arg(long, value_parser = value_parsers::room_count)]
    pub bedrooms: Option<u32>,
    /// Exact bathroom count.
    #[arg(long, value_parser = value_parsers::room_count)]
    pub bathrooms: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long, value_parser = value_parsers::price)]
    pub price: u64,
    #[arg(long, value_parser = value_parsers::city)]
    pub city: City,
    #[arg(long = "type", value_parser = value_parsers::property_type)]
    pub property_type: PropertyType,
    #[arg(long, value_parser = value_parsers::room_count)]
    pub bedrooms: u32,
    #[arg(long, value_parser = value_parsers::room_count)]
    pub bathrooms: u32,
}
