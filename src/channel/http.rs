use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, trace};

use crate::channel::ReportingChannel;
use crate::config::Config;
use crate::models::{ChannelResponse, StateDataRequest};
use crate::{DistributionError, Result};

const STATE_DATA_PATH: &str = "/reports/state-data";

/// Reporting channel over HTTP: one JSON `POST` per request.
#[derive(Debug, Clone)]
pub struct HttpReportingChannel {
    http: reqwest::Client,
    base_url: String,
}

impl HttpReportingChannel {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.reporting_url.clone(), config.reporting_timeout)
    }

    /// Uses a pre-built client, e.g. one shared with other services.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn state_data_url(&self) -> String {
        format!("{}{}", self.base_url, STATE_DATA_PATH)
    }
}

#[async_trait]
impl ReportingChannel for HttpReportingChannel {
    async fn send(&self, request: &StateDataRequest) -> Result<Option<ChannelResponse>> {
        let url = self.state_data_url();
        debug!("POST {} timespan={}", url, request.timespan);

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(DistributionError::Channel(format!(
                "reporting service answered {} for {}",
                status, url
            )));
        }

        let body = response.bytes().await?;
        trace!("reporting response: {} bytes", body.len());
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let message: Option<ChannelResponse> = serde_json::from_slice(&body)?;
        Ok(message)
    }
}
