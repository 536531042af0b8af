// confirmation dialog and history text for a vote set
use crate::vote::VoteEntry;
use serde::{Deserialize, Serialize};


/// Flat record of a vote set for confirmation dialogs and transaction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub gauge_addresses: Vec<String>,
    pub votes: Vec<String>,
}

/// Counts votes, not batches
pub fn transaction_summary_msg(votes: &[VoteEntry]) -> String {
    format!("Voting on {} pools", votes.len())
}

pub fn transaction_details(votes: &[VoteEntry]) -> TransactionDetails {
    let (gauge_addresses, votes) = votes
        .iter()
        .map(|v| (v.gauge_address.clone(), v.weight.clone()))
        .unzip();

    TransactionDetails {
        gauge_addresses,
        votes,
    }
}
