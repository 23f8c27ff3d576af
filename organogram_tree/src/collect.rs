// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subtree walks: predicate collection and forest lookups.

use alloc::vec::Vec;

use crate::types::{Node, NodeId};

/// Collect, in pre-order, the ids of `root` and of every node below it that
/// satisfy `pred`.
///
/// Used to find, for example, every supervisor under a coordinator so they can
/// be collapsed in one step.
pub fn collect_ids<F>(root: &Node, mut pred: F) -> Vec<NodeId>
where
    F: FnMut(&Node) -> bool,
{
    let mut out = Vec::new();
    collect_into(root, &mut pred, &mut out);
    out
}

fn collect_into<F>(node: &Node, pred: &mut F, out: &mut Vec<NodeId>)
where
    F: FnMut(&Node) -> bool,
{
    if pred(node) {
        out.push(node.id);
    }
    for child in &node.children {
        collect_into(child, pred, out);
    }
}

/// Find the node with `id`, searching roots in order, depth first.
pub fn find_node(roots: &[Node], id: NodeId) -> Option<&Node> {
    for root in roots {
        if root.id == id {
            return Some(root);
        }
        if let Some(found) = find_node(&root.children, id) {
            return Some(found);
        }
    }
    None
}

/// All ids of the forest in pre-order.
pub fn preorder_ids(roots: &[Node]) -> Vec<NodeId> {
    let mut out = Vec::new();
    for root in roots {
        collect_into(root, &mut |_: &Node| true, &mut out);
    }
    out
}

/// Total number of nodes in the forest.
pub fn node_count(roots: &[Node]) -> usize {
    roots.iter().map(|r| 1 + node_count(&r.children)).sum()
}
