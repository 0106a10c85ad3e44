//! Build progress observation
//!
//! The builder reports structural events through a `BuildObserver` instead
//! of printing from inside the recursion. Observers are invoked at node
//! creation time and affect no returned data.

use crate::core::Pattern;

/// Callbacks fired while the tree is being built
///
/// `on_descend`/`on_ascend` bracket the construction of each child, in the
/// order children are created; `on_internal` and `on_leaf` fire once per
/// node, before its children (if any) are built. All methods default to
/// no-ops so observers implement only what they need.
pub trait BuildObserver {
    /// A node chose `probe` and will split; `probe` is empty at the root
    fn on_internal(&mut self, _probe: &str) {}

    /// A node became a leaf holding `candidates` words
    fn on_leaf(&mut self, _candidates: usize) {}

    /// A probe produced fewer than two groups; the build continues
    fn on_degenerate(&mut self, _probe: &str) {}

    /// Entering the child keyed by `response`; `last` marks the final sibling
    fn on_descend(&mut self, _response: &Pattern, _last: bool) {}

    /// The child entered by the matching `on_descend` is fully built
    fn on_ascend(&mut self) {}
}

/// The default observer: ignores everything
pub struct SilentObserver;

impl BuildObserver for SilentObserver {}
