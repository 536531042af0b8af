use crate::vote::{VoteEntry, VOTE_BATCH_SIZE, ZERO_ADDRESS, ZERO_WEIGHT};
use crate::weight::{to_fixed_point, WeightError};
use serde::Serialize;

/// A batch filled up to exactly `VOTE_BATCH_SIZE` entries.
///
/// The first `real_len` slots hold the caller's votes in order, the rest are
/// zero-address / zero-weight placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddedBatch {
    gauge_addresses: [String; VOTE_BATCH_SIZE],
    weights: [String; VOTE_BATCH_SIZE],
    real_len: usize,
}

impl PaddedBatch {
    /// Pad a batch of at most `VOTE_BATCH_SIZE` votes.
    ///
    /// Callers split with `Batcher::default()` first; slots past capacity
    /// would not fit the fixed-size call.
    pub(crate) fn from_votes(votes: &[VoteEntry]) -> Self {
        debug_assert!(
            votes.len() <= VOTE_BATCH_SIZE,
            "batch of {} exceeds capacity {}",
            votes.len(),
            VOTE_BATCH_SIZE
        );

        let gauge_addresses = std::array::from_fn(|i| {
            votes
                .get(i)
                .map_or_else(|| ZERO_ADDRESS.to_string(), |v| v.gauge_address.clone())
        });
        let weights = std::array::from_fn(|i| {
            votes
                .get(i)
                .map_or_else(|| ZERO_WEIGHT.to_string(), |v| v.weight.clone())
        });

        Self {
            gauge_addresses,
            weights,
            real_len: votes.len().min(VOTE_BATCH_SIZE),
        }
    }

    pub fn gauge_addresses(&self) -> &[String; VOTE_BATCH_SIZE] {
        &self.gauge_addresses
    }

    pub fn weights(&self) -> &[String; VOTE_BATCH_SIZE] {
        &self.weights
    }

    /// Number of caller-supplied votes (the rest is padding)
    pub fn real_len(&self) -> usize {
        self.real_len
    }

    pub fn is_placeholder(&self, slot: usize) -> bool {
        slot >= self.real_len
    }

    /// The caller's votes, without padding
    pub fn real_entries(&self) -> impl Iterator<Item = VoteEntry> + '_ {
        self.gauge_addresses
            .iter()
            .zip(self.weights.iter())
            .take(self.real_len)
            .map(|(gauge, weight)| VoteEntry::new(gauge.clone(), weight.clone()))
    }

    /// Weights in the contract's fixed-point form, placeholders included
    pub fn fixed_point_weights(&self) -> Result<[u128; VOTE_BATCH_SIZE], WeightError> {
        let mut units = [0u128; VOTE_BATCH_SIZE];
        for (slot, weight) in units.iter_mut().zip(self.weights.iter()) {
            *slot = to_fixed_point(weight)?;
        }
        Ok(units)
    }
}
