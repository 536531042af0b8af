// the relay contract
use serde::{Deserialize, Serialize};

/// Body of `POST {endpoint}/vote-for-gauge-weights`.
///
/// Weights are sent as decimal strings since JSON numbers cannot hold u128.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayVoteRequest {
    pub gauge_addresses: Vec<String>,
    pub weights: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayVoteResponse {
    pub tx_hash: String,
}
