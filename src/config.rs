use std::env;
use std::time::Duration;

use crate::{DistributionError, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PERCENT_DECIMALS: usize = 2;

/// Service settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub reporting_url: String,
    pub reporting_timeout: Duration,
    pub port: u16,
    pub percent_decimals: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let reporting_url = lookup("REPORTING_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| DistributionError::Config("REPORTING_URL must be set".to_string()))?;

        let timeout_secs = parse_or("REPORTING_TIMEOUT_SECS", &lookup, DEFAULT_TIMEOUT_SECS)?;
        let port = parse_or("PORT", &lookup, DEFAULT_PORT)?;
        let percent_decimals = parse_or("PERCENT_DECIMALS", &lookup, DEFAULT_PERCENT_DECIMALS)?;

        Ok(Self {
            reporting_url,
            reporting_timeout: Duration::from_secs(timeout_secs),
            port,
            percent_decimals,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| DistributionError::Config(format!("{} is invalid ({}): {}", key, raw, e))),
        None => Ok(default),
    }
}
