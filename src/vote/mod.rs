mod types;


pub use types::{ExpiredGauges, VoteEntry, VotingRequest};

/// Maximum number of votes a single `vote_for_gauge_weights` call accepts
pub const VOTE_BATCH_SIZE: usize = 8;

/// Placeholder gauge used to pad under-full batches
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Weight paired with `ZERO_ADDRESS` in padded slots
pub const ZERO_WEIGHT: &str = "0";
