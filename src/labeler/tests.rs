use super::*;
use crate::vote::{ExpiredGauges, VoteEntry};

const ALIVE_A: &str = "0x1111111111111111111111111111111111111111";
const ALIVE_B: &str = "0x2222222222222222222222222222222222222222";
const EXPIRED_A: &str = "0x3333333333333333333333333333333333333333";
const EXPIRED_B: &str = "0x4444444444444444444444444444444444444444";

fn expired() -> ExpiredGauges {
    [EXPIRED_A, EXPIRED_B].into_iter().collect()
}

fn votes(gauges: &[&str]) -> Vec<VoteEntry> {
    gauges.iter().map(|g| VoteEntry::new(*g, "1")).collect()
}

#[test]
fn test_single_expired_vote_is_removal() {
    let label = action_label(&votes(&[EXPIRED_A]), &expired());
    assert_eq!(label, VoteLabel::RemoveVote);
    assert_eq!(label.to_string(), "Remove vote");
}

#[test]
fn test_all_expired_votes_are_removals() {
    let label = action_label(&votes(&[EXPIRED_A, EXPIRED_B]), &expired());
    assert_eq!(label.as_str(), "Remove votes");
}

#[test]
fn test_single_alive_vote_is_confirmation() {
    let label = action_label(&votes(&[ALIVE_A]), &expired());
    assert_eq!(label.as_str(), "Confirm vote");
}

#[test]
fn test_alive_votes_are_confirmations() {
    let label = action_label(&votes(&[ALIVE_A, ALIVE_B]), &expired());
    assert_eq!(label.as_str(), "Confirm votes");
}

#[test]
fn test_mixed_batch_is_confirmation() {
    let batch = votes(&[EXPIRED_A, ALIVE_A, EXPIRED_B]);
    assert!(!is_fully_expired(&batch, &expired()));
    assert_eq!(action_label(&batch, &expired()), VoteLabel::ConfirmVotes);
}

#[test]
fn test_expired_check_ignores_address_case() {
    let expired: ExpiredGauges = ["0xabcdefabcdefabcdefabcdefabcdefabcdefabcd"]
        .into_iter()
        .collect();
    let batch = votes(&["0xABCDEFabcdefABCDEFabcdefABCDEFabcdefABCD"]);
    assert!(is_fully_expired(&batch, &expired));
}

#[test]
fn test_no_tooltip_for_single_batch() {
    assert_eq!(step_tooltip(0, 1), None);
    assert_eq!(step_tooltip(0, 0), None);
}

#[test]
fn test_tooltips_for_multiple_batches() {
    assert_eq!(
        step_tooltip(0, 2).as_deref(),
        Some("Confirm first batch of votes")
    );
    assert_eq!(
        step_tooltip(1, 2).as_deref(),
        Some("Confirm second batch of votes")
    );
    assert_eq!(
        step_tooltip(2, 5).as_deref(),
        Some("Confirm third batch of votes")
    );
}

#[test]
fn test_ordinals_small() {
    let expected = [
        "first",
        "second",
        "third",
        "fourth",
        "fifth",
        "sixth",
        "seventh",
        "eighth",
        "ninth",
        "tenth",
        "eleventh",
        "twelfth",
        "thirteenth",
    ];
    for (i, word) in expected.iter().enumerate() {
        assert_eq!(ordinal_word(i as u64 + 1), *word);
    }
}

#[test]
fn test_ordinals_compound() {
    assert_eq!(ordinal_word(20), "twentieth");
    assert_eq!(ordinal_word(21), "twenty-first");
    assert_eq!(ordinal_word(42), "forty-second");
    assert_eq!(ordinal_word(99), "ninety-ninth");
    assert_eq!(ordinal_word(100), "one hundredth");
    assert_eq!(ordinal_word(101), "one hundred first");
    assert_eq!(ordinal_word(112), "one hundred twelfth");
    assert_eq!(ordinal_word(1000), "one thousandth");
    assert_eq!(ordinal_word(1023), "one thousand twenty-third");
    assert_eq!(ordinal_word(2_000_000), "two millionth");
}

#[test]
fn test_cardinals() {
    assert_eq!(cardinal_words(0), "zero");
    assert_eq!(cardinal_words(15), "fifteen");
    assert_eq!(cardinal_words(70), "seventy");
    assert_eq!(cardinal_words(305), "three hundred five");
    assert_eq!(cardinal_words(1_000_001), "one million one");
    assert!(cardinal_words(u64::MAX).starts_with("eighteen quintillion"));
}
