mod factory;


pub use factory::{build_voting_actions, plan_batches, BatchPlan, VoteError, VotingAction, VotingActions};
