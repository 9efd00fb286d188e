pub mod api;
pub mod config;
pub mod models;
pub mod page;
pub mod schema;
pub mod steam_api;
pub mod store;

mod error;
pub use error::Error;

pub use config::Config;
