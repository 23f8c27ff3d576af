// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forest filtering with child promotion.
//!
//! ## Semantics
//!
//! Each node is offered to a `hide` predicate exactly once, parents before
//! children, siblings left to right.
//!
//! - Kept nodes are copied with their children filtered recursively.
//! - Hidden nodes are dropped and their *filtered* children are spliced in at
//!   the position the hidden node occupied among its siblings.
//!
//! Children are never lost, only their hiding parent is. Because promotion
//! splices already-filtered lists, no node in the output satisfies `hide`, so
//! filtering twice with the same predicate is a no-op.
//!
//! The input forest is not touched; the output shares no storage with it.
//!
//! ## Example
//!
//! ```
//! use organogram_tree::{Node, NodeId, filter_forest};
//!
//! let raw = vec![
//!     Node::new(1, "Lead").child(
//!         Node::new(2, "Hidden")
//!             .with_role("Admin")
//!             .child(Node::new(3, "a"))
//!             .child(Node::new(4, "b")),
//!     ).child(Node::new(5, "c")),
//! ];
//! let out = filter_forest(&raw, |n| n.role() == Some("Admin"));
//! let ids: Vec<NodeId> = out[0].child_ids().collect();
//! assert_eq!(ids, [NodeId(3), NodeId(4), NodeId(5)]);
//! ```

use alloc::vec::Vec;

use crate::role::RolePolicy;
use crate::types::Node;

/// Filter `roots`, removing nodes for which `hide` returns true and promoting
/// their children into their place.
///
/// A panic inside `hide` unwinds through this function untouched; use
/// [`try_filter_forest`] for predicates that can fail.
pub fn filter_forest<F>(roots: &[Node], mut hide: F) -> Vec<Node>
where
    F: FnMut(&Node) -> bool,
{
    let mut out = Vec::with_capacity(roots.len());
    filter_into(roots, &mut hide, &mut out);
    #[cfg(feature = "tracing")]
    tracing::trace!(roots_in = roots.len(), roots_out = out.len(), "filtered forest");
    out
}

/// Like [`filter_forest`], but the predicate may fail.
///
/// The first error aborts the walk and is returned as is. No partial forest is
/// returned.
pub fn try_filter_forest<F, E>(roots: &[Node], mut hide: F) -> Result<Vec<Node>, E>
where
    F: FnMut(&Node) -> Result<bool, E>,
{
    let mut out = Vec::with_capacity(roots.len());
    try_filter_into(roots, &mut hide, &mut out)?;
    Ok(out)
}

/// Filter `roots` with the hide list of `policy`.
pub fn filter_with_policy(roots: &[Node], policy: &RolePolicy) -> Vec<Node> {
    let matcher = policy.matcher();
    filter_forest(roots, |n| matcher.is_hidden(n))
}

fn filter_into<F>(nodes: &[Node], hide: &mut F, out: &mut Vec<Node>)
where
    F: FnMut(&Node) -> bool,
{
    for node in nodes {
        if hide(node) {
            filter_into(&node.children, hide, out);
        } else {
            let mut children = Vec::with_capacity(node.children.len());
            filter_into(&node.children, hide, &mut children);
            out.push(node.with_replaced_children(children));
        }
    }
}

fn try_filter_into<F, E>(nodes: &[Node], hide: &mut F, out: &mut Vec<Node>) -> Result<(), E>
where
    F: FnMut(&Node) -> Result<bool, E>,
{
    for node in nodes {
        if hide(node)? {
            try_filter_into(&node.children, hide, out)?;
        } else {
            let mut children = Vec::with_capacity(node.children.len());
            try_filter_into(&node.children, hide, &mut children)?;
            out.push(node.with_replaced_children(children));
        }
    }
    Ok(())
}
