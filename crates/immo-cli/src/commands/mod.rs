pub mod auth;
pub mod dispatch;
pub mod menu;
pub mod property;
pub mod schema;
pub mod shared;
