//! Growth systems
//!
//! - growth.rs - frontier expansion and the per-tick trial step
//! - random.rs - injectable uniform sources

pub mod growth;
pub mod random;

pub use growth::{expand_frontier, grow_cluster, GrowthReport};
pub use random::{SequenceSource, UniformSource, Xorshift32};
