// voter.rs - the contract call every batch ends up in
use crate::vote::VOTE_BATCH_SIZE;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Reference to a submitted (not necessarily final) transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionHandle {
    pub tx_hash: String,
}

impl SubmissionHandle {
    pub fn new(tx_hash: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Submission rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("User rejected the transaction")]
    UserRejected,

    #[error("Transaction reverted: {0}")]
    Reverted(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Submits one `vote_for_gauge_weights` call.
///
/// Implementations receive exactly `VOTE_BATCH_SIZE` gauges and weights
/// (already padded, weights in 18-decimal fixed point) and return once the
/// transaction is submitted. Waiting for finality is left to the caller.
#[async_trait]
pub trait GaugeVoter: Send + Sync {
    async fn vote_for_gauge_weights(
        &self,
        gauge_addresses: &[String; VOTE_BATCH_SIZE],
        weights: &[u128; VOTE_BATCH_SIZE],
    ) -> Result<SubmissionHandle, SubmitError>;
}
