use super::voter::{GaugeVoter, SubmissionHandle, SubmitError};
use crate::vote::VOTE_BATCH_SIZE;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// Arguments of one `vote_for_gauge_weights` call seen by `MockVoter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub gauge_addresses: [String; VOTE_BATCH_SIZE],
    pub weights: [u128; VOTE_BATCH_SIZE],
}

// a poisoned lock still guards valid data
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// In-memory voter that records every call.
///
/// Queued results are returned FIFO; once the queue is empty each call
/// succeeds with a hash derived from its call number.
#[derive(Debug, Default)]
pub struct MockVoter {
    calls: Mutex<Vec<RecordedCall>>,
    results: Mutex<VecDeque<Result<SubmissionHandle, SubmitError>>>,
}

impl MockVoter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next unanswered call
    pub fn push_result(&self, result: Result<SubmissionHandle, SubmitError>) {
        lock(&self.results).push_back(result);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

#[async_trait]
impl GaugeVoter for MockVoter {
    async fn vote_for_gauge_weights(
        &self,
        gauge_addresses: &[String; VOTE_BATCH_SIZE],
        weights: &[u128; VOTE_BATCH_SIZE],
    ) -> Result<SubmissionHandle, SubmitError> {
        let call_number = {
            let mut calls = lock(&self.calls);
            calls.push(RecordedCall {
                gauge_addresses: gauge_addresses.clone(),
                weights: *weights,
            });
            calls.len()
        };

        let queued = lock(&self.results).pop_front();

        queued.unwrap_or_else(|| Ok(SubmissionHandle::new(format!("0x{:064x}", call_number))))
    }
}
