// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drill navigation: focus on one branch of the forest.
//!
//! ## Model
//!
//! The navigator holds a root→target path of ids. Every id on the path except
//! the last has exactly one *selected child*: the next id on the path. When a
//! renderer asks for the children of such a parent, [`DrillNavigator::apply_drill`]
//! narrows the list to that one child. Parents off the path are untouched, so
//! the focused branch is shown in full while its ancestors show only the way
//! down.
//!
//! The root row is handled the same way through [`NodeId::VIRTUAL_ROOT`]:
//! it selects the first id of the path among the forest roots.
//!
//! ## States
//!
//! - `Idle`: the path is empty, nothing is narrowed.
//! - `Focused(path)`: the path is non-empty.
//!
//! ## Minimal example
//!
//! ```
//! use organogram_tree::{Node, NodeId};
//! use organogram_view::drill::{DrillNavigator, find_path};
//!
//! let roots = vec![
//!     Node::new(1, "CEO")
//!         .child(Node::new(2, "Ana").child(Node::new(3, "Bruno")))
//!         .child(Node::new(4, "Caio")),
//! ];
//! assert_eq!(find_path(&roots, NodeId(3)), Some(vec![NodeId(1), NodeId(2), NodeId(3)]));
//!
//! let mut nav = DrillNavigator::new();
//! nav.focus(&roots, NodeId(2)).unwrap();
//! let shown = nav.apply_drill(&roots[0].children, NodeId(1));
//! assert_eq!(shown.len(), 1);
//! assert_eq!(shown[0].id, NodeId(2));
//! ```

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use organogram_tree::{Node, NodeId, RolePolicy, collect_ids};

use crate::collapse::CollapseSet;

/// Find the root→target path to `target`.
///
/// Roots are searched in order, depth first. Ids are unique so at most one
/// path exists. Returns `None` if `target` is not in the forest.
pub fn find_path(roots: &[Node], target: NodeId) -> Option<Vec<NodeId>> {
    locate(roots, target).map(|(path, _)| path)
}

/// Find the path to `target` together with the node itself.
fn locate(roots: &[Node], target: NodeId) -> Option<(Vec<NodeId>, &Node)> {
    let mut path = Vec::new();
    let node = locate_into(roots, target, &mut path)?;
    Some((path, node))
}

fn locate_into<'a>(nodes: &'a [Node], target: NodeId, path: &mut Vec<NodeId>) -> Option<&'a Node> {
    for node in nodes {
        path.push(node.id);
        if node.id == target {
            return Some(node);
        }
        if let Some(found) = locate_into(&node.children, target, path) {
            return Some(found);
        }
        path.pop();
    }
    None
}

/// Length of the longest prefix of `path` that is a valid root-anchored path
/// in `roots`.
pub fn valid_prefix_len(roots: &[Node], path: &[NodeId]) -> usize {
    let mut level = roots;
    for (i, id) in path.iter().enumerate() {
        match level.iter().find(|n| n.id == *id) {
            Some(node) => level = &node.children,
            None => return i,
        }
    }
    path.len()
}

/// True if `path` starts at a root of `roots` and follows parent/child edges.
///
/// The empty path is valid.
pub fn is_valid_path(roots: &[Node], path: &[NodeId]) -> bool {
    valid_prefix_len(roots, path) == path.len()
}

/// Snapshot of the navigator state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrillState<'a> {
    /// No focus.
    Idle,
    /// Focused on the last id of the path.
    Focused(&'a [NodeId]),
}

/// Drill navigation state machine over root→target paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrillNavigator {
    path: Vec<NodeId>,
    // Node focused by the most recent `focus`/`expand` and the path in effect
    // just before it. Cleared by every other mutation.
    undo: Option<(NodeId, Vec<NodeId>)>,
}

impl DrillNavigator {
    /// Create an idle navigator.
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            undo: None,
        }
    }

    /// The current root→target path; empty when idle.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Current state.
    pub fn state(&self) -> DrillState<'_> {
        if self.path.is_empty() {
            DrillState::Idle
        } else {
            DrillState::Focused(&self.path)
        }
    }

    /// True when a branch is focused.
    pub fn is_focused(&self) -> bool {
        !self.path.is_empty()
    }

    /// The focused node, if any.
    pub fn target(&self) -> Option<NodeId> {
        self.path.last().copied()
    }

    /// True if `id` is on the current path.
    pub fn on_path(&self, id: NodeId) -> bool {
        self.path.contains(&id)
    }

    /// Focus on `id`, setting the path from [`find_path`].
    ///
    /// Returns the new path, or `None` if `id` is not in `roots`; in that case
    /// nothing changes.
    pub fn focus(&mut self, roots: &[Node], id: NodeId) -> Option<&[NodeId]> {
        let path = find_path(roots, id)?;
        self.set_focused(id, path);
        Some(&self.path)
    }

    /// Open `id`: expand it in `collapsed` and focus on it.
    ///
    /// When `policy` says `id` is a coordinator, every supervisor below it is
    /// added to `collapsed`, so the chart reveals one management level at a
    /// time instead of the whole subtree. The node itself is never
    /// re-collapsed, even if its title also reads as a supervisor.
    ///
    /// Returns the new path, or `None` if `id` is not in `roots`; in that case
    /// neither the path nor `collapsed` changes.
    pub fn expand(
        &mut self,
        roots: &[Node],
        collapsed: &mut CollapseSet,
        policy: &RolePolicy,
        id: NodeId,
    ) -> Option<&[NodeId]> {
        let (path, node) = locate(roots, id)?;
        collapsed.remove(id);
        if policy.is_coordinator(node) {
            let matcher = policy.matcher();
            collapsed.add_all(
                collect_ids(node, |n| matcher.is_supervisor(n))
                    .into_iter()
                    .filter(|&s| s != id),
            );
        }
        self.set_focused(id, path);
        Some(&self.path)
    }

    /// Close `id`.
    ///
    /// If `id` is not on the path this is a no-op and returns false. Right
    /// after `expand(id)`/`focus(id)` the path in effect before that call is
    /// restored. Otherwise the path is cut just before `id`.
    ///
    /// Either way the resulting path never runs through `id`, so `id` is left
    /// without a selected child.
    pub fn collapse(&mut self, id: NodeId) -> bool {
        let Some(pos) = self.path.iter().position(|&p| p == id) else {
            return false;
        };
        match self.undo.take() {
            Some((focused, before)) if focused == id => {
                self.path = before;
                if let Some(pos) = self.path.iter().position(|&p| p == id) {
                    self.path.truncate(pos);
                }
            }
            _ => self.path.truncate(pos),
        }
        true
    }

    /// Drop the focus.
    pub fn clear(&mut self) {
        self.path.clear();
        self.undo = None;
    }

    /// Replace the path verbatim. The caller guarantees it is valid.
    pub fn set_path(&mut self, path: Vec<NodeId>) {
        self.path = path;
        self.undo = None;
    }

    /// Cut the path to its longest prefix still valid in `roots`.
    ///
    /// Returns true if the path changed.
    pub fn retain_valid(&mut self, roots: &[Node]) -> bool {
        self.undo = None;
        let keep = valid_prefix_len(roots, &self.path);
        if keep == self.path.len() {
            return false;
        }
        self.path.truncate(keep);
        true
    }

    /// The selected child of `parent`, if `parent` is on the path and not its
    /// last entry. [`NodeId::VIRTUAL_ROOT`] selects the first id of the path.
    pub fn selected_child(&self, parent: NodeId) -> Option<NodeId> {
        if parent.is_virtual_root() {
            return self.path.first().copied();
        }
        let pos = self.path.iter().position(|&p| p == parent)?;
        self.path.get(pos + 1).copied()
    }

    /// Map every parent on the path to its selected child.
    ///
    /// Includes [`NodeId::VIRTUAL_ROOT`] → first id when focused.
    pub fn selected_child_map(&self) -> BTreeMap<NodeId, NodeId> {
        let mut map: BTreeMap<NodeId, NodeId> =
            self.path.windows(2).map(|w| (w[0], w[1])).collect();
        if let Some(&first) = self.path.first() {
            map.insert(NodeId::VIRTUAL_ROOT, first);
        }
        map
    }

    /// Narrow `children` of `parent` to the selected child.
    ///
    /// Returns a one-element slice when `parent` has a selected child that is
    /// among `children`, and `children` unchanged otherwise.
    pub fn apply_drill<'a>(&self, children: &'a [Node], parent: NodeId) -> &'a [Node] {
        let Some(selected) = self.selected_child(parent) else {
            return children;
        };
        match children.iter().position(|c| c.id == selected) {
            Some(i) => core::slice::from_ref(&children[i]),
            None => children,
        }
    }

    fn set_focused(&mut self, id: NodeId, path: Vec<NodeId>) {
        let before = core::mem::replace(&mut self.path, path);
        self.undo = Some((id, before));
    }
}
