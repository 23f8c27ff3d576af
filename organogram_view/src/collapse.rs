// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse store: which nodes currently hide their children.
//!
//! Collapsing is purely a display concern. Nothing is removed from the
//! forest, so descendant counts and predicate walks still see every node.
//!
//! Membership is by id and does not require the id to exist. After a refresh
//! some ids may refer to people who are gone; they stay in the set and are
//! simply never consulted. [`CollapseSet::live`] yields only the ids that
//! still exist.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use organogram_tree::{DescendantIndex, Node, NodeId};

/// Set of node ids whose children are hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapseSet {
    ids: BTreeSet<NodeId>,
}

impl CollapseSet {
    /// Create an empty set: everything expanded.
    pub fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// True if `id` is collapsed.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Collapse `id`. Returns false if it was already collapsed.
    pub fn add(&mut self, id: NodeId) -> bool {
        self.ids.insert(id)
    }

    /// Expand `id`. Returns false if it was not collapsed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.ids.remove(&id)
    }

    /// Collapse every id in `ids`, keeping existing members.
    pub fn add_all(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.ids.extend(ids);
    }

    /// Replace the whole set with `ids`.
    pub fn replace_all(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.ids = ids.into_iter().collect();
    }

    /// Collapse exactly the nodes of `roots` that have at least one child.
    ///
    /// Leaves are never collapsed since they have nothing to hide.
    pub fn collapse_all(&mut self, roots: &[Node]) {
        self.replace_all(parent_ids(roots));
    }

    /// Expand everything.
    pub fn expand_all(&mut self) {
        self.ids.clear();
    }

    /// Number of ids in the set, stale ones included.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if nothing is collapsed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All ids in ascending order, stale ones included.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    /// Ids that still name a node of the forest described by `index`.
    pub fn live<'a>(&'a self, index: &'a DescendantIndex) -> impl Iterator<Item = NodeId> + 'a {
        self.iter().filter(|&id| index.contains(id))
    }
}

impl FromIterator<NodeId> for CollapseSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Ids of every node in `roots` with at least one child, in pre-order.
pub fn parent_ids(roots: &[Node]) -> Vec<NodeId> {
    let mut out = Vec::new();
    push_parents(roots, &mut out);
    out
}

fn push_parents(nodes: &[Node], out: &mut Vec<NodeId>) {
    for node in nodes {
        if !node.is_leaf() {
            out.push(node.id);
            push_parents(&node.children, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn forest() -> Vec<Node> {
        vec![
            Node::new(1, "a")
                .child(Node::new(2, "b").child(Node::new(3, "c")))
                .child(Node::new(4, "d")),
            Node::new(5, "e"),
        ]
    }

    #[test]
    fn add_remove_report_change() {
        let mut set = CollapseSet::new();
        assert!(set.add(NodeId(1)));
        assert!(!set.add(NodeId(1)));
        assert!(set.contains(NodeId(1)));
        assert!(set.remove(NodeId(1)));
        assert!(!set.remove(NodeId(1)));
        assert!(set.is_empty());
    }

    #[test]
    fn collapse_all_skips_leaves() {
        let mut set = CollapseSet::new();
        set.add(NodeId(99));
        set.collapse_all(&forest());
        let ids: Vec<NodeId> = set.iter().collect();
        assert_eq!(ids, [NodeId(1), NodeId(2)]);
    }

    #[test]
    fn expand_all_clears() {
        let mut set: CollapseSet = [NodeId(1), NodeId(2)].into_iter().collect();
        assert_eq!(set.len(), 2);
        set.expand_all();
        assert!(set.is_empty());
    }

    #[test]
    fn replace_all_discards_previous_members() {
        let mut set: CollapseSet = [NodeId(1)].into_iter().collect();
        set.replace_all([NodeId(2), NodeId(3)]);
        assert!(!set.contains(NodeId(1)));
        assert_eq!(set.len(), 2);
        set.add_all([NodeId(1)]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn stale_ids_are_kept_but_not_live() {
        let forest = forest();
        let index = DescendantIndex::build(&forest);
        let set: CollapseSet = [NodeId(2), NodeId(42)].into_iter().collect();
        assert!(set.contains(NodeId(42)));
        let live: Vec<NodeId> = set.live(&index).collect();
        assert_eq!(live, [NodeId(2)]);
    }

    #[test]
    fn parent_ids_in_preorder() {
        let roots = vec![
            Node::new(10, "x").child(Node::new(11, "y").child(Node::new(12, "z"))),
            Node::new(20, "w").child(Node::new(21, "v")),
        ];
        assert_eq!(parent_ids(&roots), [NodeId(10), NodeId(11), NodeId(20)]);
        assert!(parent_ids(&[]).is_empty());
    }
}
