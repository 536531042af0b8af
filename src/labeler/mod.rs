mod label;
mod ordinal;

#[cfg(test)]
mod tests;

pub use label::{action_label, is_fully_expired, step_tooltip, VoteLabel};
pub use ordinal::{cardinal_words, ordinal_word};
