// batcher.rs - splits votes into call-sized groups
use crate::vote::VOTE_BATCH_SIZE;

pub struct Batcher {
    pub batch_size: usize,
}

impl Batcher {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    /// Split items into consecutive groups of `batch_size`; only the last may be shorter
    pub fn split<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        items.chunks(self.batch_size).collect()
    }

    /// Number of groups `split` produces for `len` items
    pub fn batch_count(&self, len: usize) -> usize {
        len.div_ceil(self.batch_size)
    }
}

impl Default for Batcher {
    fn default() -> Self {
        Self::new(VOTE_BATCH_SIZE)
    }
}
