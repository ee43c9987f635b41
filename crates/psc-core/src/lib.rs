pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod medications;
pub mod postcode;
pub mod types;

pub use aggregate::{aggregate, Aggregation};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use medications::Medication;
pub use postcode::normalize_postcode;
pub use types::{GeoCoordinate, StockLevel, StockRecord, StoreRecord, StoreStockResult};
