// Public API exports
pub mod action;
pub mod batching;
pub mod labeler;
pub mod submission;
pub mod summary;
pub mod vote;
pub mod weight;

// Re-export main types for convenience
pub use vote::{ExpiredGauges, VoteEntry, VotingRequest, VOTE_BATCH_SIZE, ZERO_ADDRESS};

pub use batching::{Batcher, PaddedBatch};

pub use labeler::{action_label, ordinal_word, step_tooltip, VoteLabel};

pub use action::{build_voting_actions, plan_batches, BatchPlan, VoteError, VotingAction, VotingActions};

pub use submission::{GaugeVoter, MockVoter, RelayClient, SubmissionHandle, SubmitError};

pub use summary::{transaction_details, transaction_summary_msg, TransactionDetails};

pub use weight::{from_fixed_point, to_fixed_point, WeightError, WEIGHT_DECIMALS};
