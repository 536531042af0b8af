pub mod mock;
pub mod relay;
pub mod types;
pub mod voter;


pub use mock::{MockVoter, RecordedCall};
pub use relay::RelayClient;
pub use types::{RelayVoteRequest, RelayVoteResponse};
pub use voter::{GaugeVoter, SubmissionHandle, SubmitError};
