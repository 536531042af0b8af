// relay.rs - submits votes through an HTTP signing relay
use super::types::{RelayVoteRequest, RelayVoteResponse};
use super::voter::{GaugeVoter, SubmissionHandle, SubmitError};
use crate::vote::VOTE_BATCH_SIZE;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(60);

pub struct RelayClient {
    http: Client,
    endpoint: String,
    timeout: Duration,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_RELAY_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_transport(&self, err: reqwest::Error) -> SubmitError {
        if err.is_timeout() {
            SubmitError::Timeout(self.timeout)
        } else {
            SubmitError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl GaugeVoter for RelayClient {
    async fn vote_for_gauge_weights(
        &self,
        gauge_addresses: &[String; VOTE_BATCH_SIZE],
        weights: &[u128; VOTE_BATCH_SIZE],
    ) -> Result<SubmissionHandle, SubmitError> {
        let req = RelayVoteRequest {
            gauge_addresses: gauge_addresses.to_vec(),
            weights: weights.iter().map(|w| w.to_string()).collect(),
        };

        let url = format!("{}/vote-for-gauge-weights", self.endpoint);
        debug!(%url, "posting gauge votes to relay");

        let response = self
            .http
            .post(url)
            .timeout(self.timeout)
            .json(&req)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let res: RelayVoteResponse = response
            .json()
            .await
            .map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;

        Ok(SubmissionHandle::new(res.tx_hash))
    }
}
