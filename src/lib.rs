pub mod airtable;
pub mod config;
pub mod error;
pub mod metrics;
pub mod render;
pub mod server;

pub use config::{AssetUrls, Config};
pub use error::DashboardError;
