use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One allocation of voting weight to one gauge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteEntry {
    #[serde(alias = "targetAddress")]
    pub gauge_address: String,
    /// Decimal string, only parsed when the vote is submitted
    pub weight: String,
}

impl VoteEntry {
    pub fn new(gauge_address: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            gauge_address: gauge_address.into(),
            weight: weight.into(),
        }
    }
}

/// Gauges that can no longer keep weight.
///
/// Only affects label wording: votes on expired gauges are still submitted.
/// Addresses are compared case-insensitively since hex casing only carries
/// the checksum.
#[derive(Debug, Clone, Default)]
pub struct ExpiredGauges {
    addresses: HashSet<String>,
}

impl ExpiredGauges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: impl AsRef<str>) -> bool {
        self.addresses.insert(address.as_ref().to_ascii_lowercase())
    }

    pub fn is_expired(&self, address: &str) -> bool {
        self.addresses.contains(&address.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExpiredGauges {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut expired = Self::new();
        for address in iter {
            expired.insert(address);
        }
        expired
    }
}

/// Input of the batching entry point
#[derive(Debug, Clone, Default)]
pub struct VotingRequest {
    pub votes: Vec<VoteEntry>,
    pub expired_gauges: ExpiredGauges,
}

impl VotingRequest {
    pub fn new(votes: Vec<VoteEntry>, expired_gauges: ExpiredGauges) -> Self {
        Self {
            votes,
            expired_gauges,
        }
    }
}
