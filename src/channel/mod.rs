use async_trait::async_trait;

use crate::models::{ChannelResponse, StateDataRequest};
use crate::Result;

pub mod http;

pub use self::http::HttpReportingChannel;

/// Request/response link to the reporting service.
///
/// `Ok(None)` means the service answered without a message. Any transport
/// that can carry a [`StateDataRequest`] and hand back a [`ChannelResponse`]
/// can stand in here.
#[async_trait]
pub trait ReportingChannel: Send + Sync {
    async fn send(&self, request: &StateDataRequest) -> Result<Option<ChannelResponse>>;
}
