use super::*;
use crate::vote::{VoteEntry, VOTE_BATCH_SIZE, ZERO_ADDRESS};

fn make_votes(n: usize) -> Vec<VoteEntry> {
    (0..n)
        .map(|i| VoteEntry::new(format!("0x{:040x}", i + 1), format!("{}", i + 1)))
        .collect()
}

#[test]
fn test_batching_small() {
    let batcher = Batcher::new(3);
    let items = make_votes(5);

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 3);
    assert_eq!(batches[1].len(), 2);
}

#[test]
fn test_batching_exact_size() {
    let batcher = Batcher::default();
    let items = make_votes(16);

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), VOTE_BATCH_SIZE);
    assert_eq!(batches[1].len(), VOTE_BATCH_SIZE);
}

#[test]
fn test_batching_empty() {
    let batcher = Batcher::default();
    let items: Vec<VoteEntry> = vec![];

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 0);
    assert_eq!(batcher.batch_count(0), 0);
}

#[test]
fn test_batch_count_matches_split() {
    let batcher = Batcher::default();
    for n in 0..40 {
        let items = make_votes(n);
        let batches = batcher.split(&items);
        assert_eq!(batches.len(), batcher.batch_count(n), "n = {}", n);
        assert_eq!(batches.len(), n.div_ceil(VOTE_BATCH_SIZE));
    }
}

#[test]
fn test_only_last_batch_is_short() {
    let items = make_votes(19);
    let batches = Batcher::default().split(&items);

    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 8);
    assert_eq!(batches[1].len(), 8);
    assert_eq!(batches[2].len(), 19 % VOTE_BATCH_SIZE);
}

#[test]
fn test_zero_batch_size_clamped() {
    let batcher = Batcher::new(0);
    assert_eq!(batcher.batch_size, 1);
}

#[test]
fn test_pad_single_vote() {
    let votes = vec![VoteEntry::new("0xaaaa", "10")];
    let padded = PaddedBatch::from_votes(&votes);

    assert_eq!(padded.real_len(), 1);
    assert_eq!(padded.gauge_addresses()[0], "0xaaaa");
    assert_eq!(padded.weights()[0], "10");
    for slot in 1..VOTE_BATCH_SIZE {
        assert!(padded.is_placeholder(slot));
        assert_eq!(padded.gauge_addresses()[slot], ZERO_ADDRESS);
        assert_eq!(padded.weights()[slot], "0");
    }
}

#[test]
fn test_pad_full_batch_has_no_placeholders() {
    let votes = make_votes(VOTE_BATCH_SIZE);
    let padded = PaddedBatch::from_votes(&votes);

    assert_eq!(padded.real_len(), VOTE_BATCH_SIZE);
    assert!(padded.gauge_addresses().iter().all(|a| a != ZERO_ADDRESS));
}

#[test]
fn test_real_entries_concatenate_to_input() {
    let votes = make_votes(21);
    let rebuilt: Vec<VoteEntry> = Batcher::default()
        .split(&votes)
        .into_iter()
        .flat_map(|batch| PaddedBatch::from_votes(batch).real_entries().collect::<Vec<_>>())
        .collect();

    assert_eq!(rebuilt, votes);
}

#[test]
fn test_placeholders_follow_real_entries() {
    let votes = make_votes(3);
    let padded = PaddedBatch::from_votes(&votes);

    let first_placeholder = padded
        .gauge_addresses()
        .iter()
        .position(|a| a == ZERO_ADDRESS)
        .unwrap();
    assert_eq!(first_placeholder, 3);
    assert!(padded.gauge_addresses()[first_placeholder..]
        .iter()
        .all(|a| a == ZERO_ADDRESS));
}

#[test]
fn test_fixed_point_weights() {
    let votes = vec![VoteEntry::new("0x01", "10"), VoteEntry::new("0x02", "0.5")];
    let units = PaddedBatch::from_votes(&votes).fixed_point_weights().unwrap();

    assert_eq!(units[0], 10_000_000_000_000_000_000);
    assert_eq!(units[1], 500_000_000_000_000_000);
    assert!(units[2..].iter().all(|u| *u == 0));
}

#[test]
fn test_padding_does_not_validate_weights() {
    let votes = vec![VoteEntry::new("0x01", "not-a-number")];
    let padded = PaddedBatch::from_votes(&votes);

    assert_eq!(padded.weights()[0], "not-a-number");
    assert!(padded.fixed_point_weights().is_err());
}
