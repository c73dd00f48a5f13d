use std::sync::Arc;
use tracing::{debug, warn};

use crate::channel::ReportingChannel;
use crate::metrics::{self, FallbackReason, RequestTimer};
use crate::models::{ChannelResponse, StateDataRequest, StateDistribution};

/// Fetches the distribution, answering with all zeros whenever the
/// reporting service has nothing usable. Never fails.
#[derive(Clone)]
pub struct StateDistributionFetcher {
    channel: Arc<dyn ReportingChannel>,
}

impl StateDistributionFetcher {
    pub fn new(channel: Arc<dyn ReportingChannel>) -> Self {
        Self { channel }
    }

    pub async fn fetch(&self, request: Option<&StateDataRequest>) -> StateDistribution {
        let Some(request) = request else {
            debug!("No element to query, using default distribution");
            return fallback(FallbackReason::NoRequest);
        };

        let response = {
            let _timer = RequestTimer::new();
            self.channel.send(request).await
        };

        match response {
            Ok(Some(ChannelResponse::StateData(states))) => states,
            Ok(Some(ChannelResponse::Other)) => {
                debug!("Unexpected response kind for {:?}", request.filter);
                fallback(FallbackReason::UnexpectedResponse)
            }
            Ok(None) => {
                debug!("No state data for {:?}", request.filter);
                fallback(FallbackReason::NoResponse)
            }
            Err(e) => {
                warn!("State data request for {:?} failed: {}", request.filter, e);
                fallback(FallbackReason::ChannelError)
            }
        }
    }
}

fn fallback(reason: FallbackReason) -> StateDistribution {
    metrics::record_fallback(reason);
    StateDistribution::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_id::ElementId;
    use crate::models::{ReportFilter, UNBOUNDED_RESULT_SIZE};
    use crate::{DistributionError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedChannel {
        calls: AtomicUsize,
        reply: fn() -> Result<Option<ChannelResponse>>,
    }

    impl ScriptedChannel {
        fn new(reply: fn() -> Result<Option<ChannelResponse>>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply,
            })
        }
    }

    #[async_trait]
    impl ReportingChannel for ScriptedChannel {
        async fn send(&self, _request: &StateDataRequest) -> Result<Option<ChannelResponse>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.reply)()
        }
    }

    fn request() -> StateDataRequest {
        StateDataRequest {
            filter: ReportFilter::Element(ElementId::new(1, 2)),
            max_amount: UNBOUNDED_RESULT_SIZE,
            timespan: "2024-01-01 00:00:00|2024-01-02 00:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_no_request_skips_channel() {
        let channel = ScriptedChannel::new(|| Ok(None));
        let fetcher = StateDistributionFetcher::new(channel.clone());

        assert_eq!(fetcher.fetch(None).await, StateDistribution::default());
        assert_eq!(channel.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_state_data_passes_through() {
        let channel = ScriptedChannel::new(|| {
            Ok(Some(ChannelResponse::StateData(StateDistribution {
                critical: 101.0,
                normal: 20.0,
                ..Default::default()
            })))
        });
        let fetcher = StateDistributionFetcher::new(channel.clone());

        let states = fetcher.fetch(Some(&request())).await;
        assert_eq!(states.critical, 101.0);
        assert_eq!(states.normal, 20.0);
        assert_eq!(channel.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_absorbs_every_failure() {
        let replies: [fn() -> Result<Option<ChannelResponse>>; 3] = [
            || Ok(None),
            || Ok(Some(ChannelResponse::Other)),
            || Err(DistributionError::Channel("connection refused".into())),
        ];
        for reply in replies {
            let channel = ScriptedChannel::new(reply);
            let fetcher = StateDistributionFetcher::new(channel.clone());
            assert_eq!(fetcher.fetch(Some(&request())).await, StateDistribution::default());
            assert_eq!(channel.calls.load(Ordering::SeqCst), 1);
        }
    }
}
