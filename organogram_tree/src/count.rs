// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descendant counts for display badges.

use alloc::collections::BTreeMap;

use crate::types::{Node, NodeId};

/// Number of strict descendants of every node in a forest.
///
/// Built in one post-order pass and never patched: rebuild it whenever the
/// forest changes. For every node `n`,
/// `count(n) == sum(1 + count(c) for c in n.children)`, so leaves count `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DescendantIndex {
    counts: BTreeMap<NodeId, usize>,
}

impl DescendantIndex {
    /// Index every node of `roots`, roots included.
    pub fn build(roots: &[Node]) -> Self {
        let mut counts = BTreeMap::new();
        for root in roots {
            count_into(root, &mut counts);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(nodes = counts.len(), "built descendant index");
        Self { counts }
    }

    /// Descendant count of `id`, or `None` if `id` is not in the forest.
    pub fn get(&self, id: NodeId) -> Option<usize> {
        self.counts.get(&id).copied()
    }

    /// Number of indexed nodes, which is the size of the forest.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if the forest was empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True if `id` is in the forest.
    pub fn contains(&self, id: NodeId) -> bool {
        self.counts.contains_key(&id)
    }

    /// All `(id, count)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.counts.iter().map(|(&id, &c)| (id, c))
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<NodeId, usize> {
        &self.counts
    }

    /// Consume the index, returning the underlying map.
    pub fn into_map(self) -> BTreeMap<NodeId, usize> {
        self.counts
    }
}

/// Count strict descendants of every node in `roots`.
pub fn count_descendants(roots: &[Node]) -> BTreeMap<NodeId, usize> {
    DescendantIndex::build(roots).into_map()
}

fn count_into(node: &Node, out: &mut BTreeMap<NodeId, usize>) -> usize {
    let mut total = 0;
    for child in &node.children {
        total += 1 + count_into(child, out);
    }
    out.insert(node.id, total);
    total
}
