//! Client for the downstream price-tracking API.

pub mod client;
pub mod error;
pub mod types;

pub use client::IngestClient;
pub use error::IngestError;
pub use types::PriceUpdate;
