pub mod credentials;
pub mod limit;
pub mod listing;
