//! Decision-tree strategy construction and traversal
//!
//! The builder recursively partitions the vocabulary by the feedback each
//! probe elicits; the fitted tree then turns observed feedback streams
//! into final candidate guesses.

pub mod build;
pub mod node;
pub mod observer;
pub mod probe;

pub use build::{StrategyTree, TreeConfig};
pub use node::{Descent, HistoryStep, Node};
pub use observer::{BuildObserver, SilentObserver};
pub use probe::{FixedProbe, ProbeSelector, RandomProbe};
