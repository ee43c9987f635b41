pub mod client;
pub mod error;
pub mod geocode;
pub mod rate_limit;
pub mod stock;
pub mod stores;
pub mod types;

pub use client::{ClientOptions, StockCheckClient};
pub use error::ClientError;
pub use rate_limit::RequestPacer;
pub use stock::StockSweep;
