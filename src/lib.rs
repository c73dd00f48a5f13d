pub mod api;
pub mod channel;
pub mod config;
pub mod distribution;
pub mod element_id;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod source;

pub use error::{DistributionError, Result};
