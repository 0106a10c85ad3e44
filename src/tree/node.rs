//! Strategy tree nodes
//!
//! A node represents one state of knowledge about the secret word: the set
//! of vocabulary indices still consistent with every feedback pattern
//! observed on the path from the root. Internal nodes hold the probe they
//! ask and one child per distinct feedback pattern; leaves hold their
//! surviving candidates verbatim.

use super::build::TreeConfig;
use super::observer::BuildObserver;
use super::probe::ProbeSelector;
use crate::core::Pattern;
use rustc_hash::FxHashMap;

/// One step on the path to a node: the probe asked (`None` for the root's
/// implicit length question) and the feedback pattern observed
pub type HistoryStep = (Option<usize>, Pattern);

/// Outcome of looking up a child by feedback pattern
///
/// Lookup never fails outright: an unknown pattern degrades to the first
/// child registered at the node, and asking a leaf for a child stays put.
/// Callers wanting strictness can treat anything but `Matched` as an
/// error; the default traversal accepts all three and keeps going.
#[derive(Debug)]
pub enum Descent<'a> {
    /// The pattern keyed a child exactly
    Matched(&'a Node),
    /// Unknown pattern; fell back to the first-registered child
    Degraded(&'a Node),
    /// The node is a leaf, there is nowhere to go
    SelfLoop,
}

/// A single node of the strategy tree
///
/// Candidate sets store indices into the shared vocabulary, never the
/// strings themselves. Children are kept in first-encountered insertion
/// order; lookup is by pattern key, not position.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    depth: usize,
    probe: Option<usize>,
    candidates: Vec<usize>,
    children: Vec<(Pattern, Node)>,
    is_leaf: bool,
    history: Vec<HistoryStep>,
}

impl Node {
    /// The root: depth 0, no probe yet, empty history
    pub(crate) fn root(candidates: Vec<usize>) -> Self {
        Self {
            depth: 0,
            probe: None,
            candidates,
            children: Vec::new(),
            is_leaf: true,
            history: Vec::new(),
        }
    }

    /// Depth below the root (root = 0)
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The probe asked at this node; `None` at the root and at leaves
    ///
    /// The root asks no explicit probe — the host volunteers the secret
    /// word's length, which reaches the tree as an all-miss pattern
    /// against the empty probe word.
    #[inline]
    #[must_use]
    pub fn probe(&self) -> Option<usize> {
        self.probe
    }

    /// Vocabulary indices still consistent with the path to this node
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    /// Whether this node is terminal
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Children in creation order, each keyed by its feedback pattern
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[(Pattern, Node)] {
        &self.children
    }

    /// Probe/feedback pairs on the path from the root to this node
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryStep] {
        &self.history
    }

    /// Select the child keyed by `response`
    ///
    /// See [`Descent`] for the degraded outcomes; this method never
    /// panics and never fails.
    #[must_use]
    pub fn get_child(&self, response: &Pattern) -> Descent<'_> {
        if self.is_leaf {
            return Descent::SelfLoop;
        }

        match self.children.iter().find(|(key, _)| key == response) {
            Some((_, child)) => Descent::Matched(child),
            None => match self.children.first() {
                Some((_, fallback)) => Descent::Degraded(fallback),
                // Unreachable for fitted trees: non-leaves always have a child
                None => Descent::SelfLoop,
            },
        }
    }

    /// Recursively fit this node and its subtree
    ///
    /// Pre-order: decide leaf vs. internal, then split and fit each child
    /// depth-first. No retries, no backtracking — once a probe and its
    /// partition are fixed they stay.
    pub(crate) fn fit<S: ProbeSelector, O: BuildObserver>(
        &mut self,
        words: &[String],
        config: &TreeConfig,
        selector: &mut S,
        observer: &mut O,
    ) {
        // Too small or too deep: stop here and keep the candidates verbatim
        if self.candidates.len() <= config.min_leaf_size || self.depth >= config.max_depth {
            self.is_leaf = true;
            observer.on_leaf(self.candidates.len());
            return;
        }

        self.is_leaf = false;
        let (probe, groups) = self.split(words, selector);
        self.probe = probe;

        let probe_word = probe.and_then(|i| words.get(i)).map_or("", String::as_str);
        observer.on_internal(probe_word);
        if groups.len() < 2 {
            // The probe discriminated nothing; the single child repeats the
            // parent's candidate set and the build carries on.
            observer.on_degenerate(probe_word);
        }

        let last = groups.len().saturating_sub(1);
        for (i, (response, group)) in groups.into_iter().enumerate() {
            observer.on_descend(&response, i == last);

            let mut child = self.child(&response, group);
            child.fit(words, config, selector, observer);
            self.children.push((response, child));

            observer.on_ascend();
        }
    }

    /// Allocate the child for one partition group
    fn child(&self, response: &Pattern, candidates: Vec<usize>) -> Self {
        let mut history = self.history.clone();
        history.push((self.probe, response.clone()));

        Self {
            depth: self.depth + 1,
            probe: None,
            candidates,
            children: Vec::new(),
            is_leaf: true,
            history,
        }
    }

    /// Choose a probe and partition the candidate set by feedback pattern
    ///
    /// Groups come back in first-encounter order while scanning the
    /// candidate set, each non-empty, and together they cover the
    /// candidate set exactly. At the root (empty history) the probe is the
    /// sentinel `None`: the partition runs against the empty probe word,
    /// which groups candidates purely by word length.
    fn split<S: ProbeSelector>(
        &self,
        words: &[String],
        selector: &mut S,
    ) -> (Option<usize>, Vec<(Pattern, Vec<usize>)>) {
        let probe = if self.history.is_empty() {
            None
        } else {
            Some(selector.select(words, &self.candidates, &self.history))
        };
        let probe_word = probe.and_then(|i| words.get(i)).map_or("", String::as_str);

        let mut groups: Vec<(Pattern, Vec<usize>)> = Vec::new();
        let mut slots: FxHashMap<Pattern, usize> = FxHashMap::default();

        for &idx in &self.candidates {
            let mask = Pattern::reveal(&words[idx], probe_word);
            if let Some(&slot) = slots.get(&mask) {
                groups[slot].1.push(idx);
            } else {
                slots.insert(mask.clone(), groups.len());
                groups.push((mask, vec![idx]));
            }
        }

        (probe, groups)
    }
}
