pub mod batcher;
pub mod padded;

#[cfg(test)]
mod tests;

pub use batcher::Batcher;
pub use padded::PaddedBatch;
