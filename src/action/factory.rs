use crate::batching::{Batcher, PaddedBatch};
use crate::labeler::{action_label, step_tooltip};
use crate::submission::{GaugeVoter, SubmissionHandle, SubmitError};
use crate::vote::VotingRequest;
use crate::weight::WeightError;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error(transparent)]
    InvalidWeight(#[from] WeightError),

    #[error(transparent)]
    Submission(#[from] SubmitError),
}

/// Labels and padded votes of one step, before any voter is attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPlan {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_tooltip: Option<String>,
    pub batch: PaddedBatch,
}

/// Partition, pad and label the request's votes.
///
/// Pure and synchronous: weights are not parsed here, so a malformed weight
/// only surfaces when its action executes.
pub fn plan_batches(request: &VotingRequest) -> Vec<BatchPlan> {
    let batches = Batcher::default().split(&request.votes);
    let total = batches.len();

    batches
        .into_iter()
        .enumerate()
        .map(|(index, batch)| BatchPlan {
            label: action_label(batch, &request.expired_gauges).to_string(),
            step_tooltip: step_tooltip(index, total),
            batch: PaddedBatch::from_votes(batch),
        })
        .collect()
}

/// One confirmation step: a padded batch bound to the voter that submits it
pub struct VotingAction {
    pub label: String,
    pub step_tooltip: Option<String>,
    index: usize,
    batch: PaddedBatch,
    voter: Arc<dyn GaugeVoter>,
}

impl VotingAction {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn batch(&self) -> &PaddedBatch {
        &self.batch
    }

    /// Submit this batch with a single `vote_for_gauge_weights` call.
    ///
    /// Returns as soon as the voter hands back a submission handle. Voter
    /// errors are returned unchanged and nothing is retried.
    pub async fn execute(&self) -> Result<SubmissionHandle, VoteError> {
        let weights = self.batch.fixed_point_weights()?;
        debug!(
            batch = self.index,
            votes = self.batch.real_len(),
            "submitting gauge vote batch"
        );

        let handle = self
            .voter
            .vote_for_gauge_weights(self.batch.gauge_addresses(), &weights)
            .await?;
        Ok(handle)
    }
}

impl fmt::Debug for VotingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VotingAction")
            .field("label", &self.label)
            .field("step_tooltip", &self.step_tooltip)
            .field("index", &self.index)
            .field("batch", &self.batch)
            .finish_non_exhaustive()
    }
}

/// Output of the batching entry point, one action per batch in vote order
#[derive(Debug, Default)]
pub struct VotingActions {
    pub voting_actions: Vec<VotingAction>,
}

impl VotingActions {
    pub fn len(&self) -> usize {
        self.voting_actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voting_actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VotingAction> {
        self.voting_actions.iter()
    }
}

impl IntoIterator for VotingActions {
    type Item = VotingAction;
    type IntoIter = std::vec::IntoIter<VotingAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.voting_actions.into_iter()
    }
}

/// Build fresh voting actions for the request; nothing is cached between calls
pub fn build_voting_actions(request: &VotingRequest, voter: Arc<dyn GaugeVoter>) -> VotingActions {
    let voting_actions: Vec<VotingAction> = plan_batches(request)
        .into_iter()
        .enumerate()
        .map(|(index, plan)| VotingAction {
            label: plan.label,
            step_tooltip: plan.step_tooltip,
            index,
            batch: plan.batch,
            voter: Arc::clone(&voter),
        })
        .collect();

    debug!(
        votes = request.votes.len(),
        actions = voting_actions.len(),
        "built gauge voting actions"
    );

    VotingActions { voting_actions }
}
