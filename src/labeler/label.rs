use super::ordinal::ordinal_word;
use crate::vote::{ExpiredGauges, VoteEntry};
use std::fmt;

/// Button label of a voting step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteLabel {
    RemoveVote,
    RemoveVotes,
    ConfirmVote,
    ConfirmVotes,
}

impl VoteLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteLabel::RemoveVote => "Remove vote",
            VoteLabel::RemoveVotes => "Remove votes",
            VoteLabel::ConfirmVote => "Confirm vote",
            VoteLabel::ConfirmVotes => "Confirm votes",
        }
    }
}

impl fmt::Display for VoteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when every vote in the batch targets an expired gauge
pub fn is_fully_expired(batch: &[VoteEntry], expired: &ExpiredGauges) -> bool {
    batch
        .iter()
        .all(|vote| expired.is_expired(&vote.gauge_address))
}

/// A batch only reads as a removal when all of its gauges are expired;
/// any live gauge in the batch makes it a confirmation.
pub fn action_label(batch: &[VoteEntry], expired: &ExpiredGauges) -> VoteLabel {
    let plural = batch.len() > 1;
    match (is_fully_expired(batch, expired), plural) {
        (true, false) => VoteLabel::RemoveVote,
        (true, true) => VoteLabel::RemoveVotes,
        (false, false) => VoteLabel::ConfirmVote,
        (false, true) => VoteLabel::ConfirmVotes,
    }
}

/// Tooltip for step `index` (0-based) of `total`; absent for single-step flows
pub fn step_tooltip(index: usize, total: usize) -> Option<String> {
    if total <= 1 {
        return None;
    }
    Some(format!(
        "Confirm {} batch of votes",
        ordinal_word(index as u64 + 1)
    ))
}
