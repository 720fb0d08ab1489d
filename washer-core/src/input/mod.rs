//! Input sampling and event classification
//!
//! Each poll reads the raw input port, rejects unstable samples, computes
//! edges against the last stable sample and turns them into one event.

pub mod classifier;
pub mod sampler;

pub use classifier::{classify, Edges, InputMap};
pub use sampler::InputSampler;
