// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The org chart engine: filtered forest plus collapse and drill state.
//!
//! [`OrgChart`] owns everything one chart needs. The raw forest and the role
//! policy are inputs; the filtered forest and the [`DescendantIndex`] are
//! derived from them and rebuilt on every [`refresh`](OrgChart::refresh). The
//! [`CollapseSet`] and the [`DrillNavigator`] hold what the user did and
//! survive refreshes.
//!
//! ## Visibility
//!
//! [`OrgChart::children_of`] decides which children a renderer shows below a
//! parent:
//!
//! 1. If the parent has a selected child on the drill path, only that child.
//! 2. Otherwise, if the parent is collapsed, nothing.
//! 3. Otherwise all of its filtered children.
//!
//! Drill selection wins over collapse, so focusing a node deep inside a
//! collapsed chart still shows the way down to it.
//!
//! ## Example
//!
//! ```
//! use organogram_tree::{Node, NodeId};
//! use organogram_view::OrgChart;
//!
//! let mut chart = OrgChart::new(vec![
//!     Node::new(1, "CEO").with_role("Diretor").child(
//!         Node::new(2, "Ana").with_role("Coordenador").child(
//!             Node::new(3, "Bruno")
//!                 .with_role("Supervisor")
//!                 .child(Node::new(4, "Carla").with_role("Técnico"))
//!                 .child(Node::new(5, "Duda").with_role("Analista")),
//!         ),
//!     ),
//! ]);
//! assert_eq!(chart.descendants(NodeId(1)), Some(3));
//!
//! chart.collapse_all();
//! assert!(chart.expand(NodeId(2)));
//! assert_eq!(chart.path(), [NodeId(1), NodeId(2)]);
//!
//! let view = chart.view();
//! assert_eq!(view[0].children[0].children[0].node.id, NodeId(3));
//! assert!(view[0].children[0].children[0].collapsed);
//! ```

use alloc::vec::Vec;

use organogram_tree::{
    DescendantIndex, Node, NodeId, RoleFlags, RoleMatcher, RolePolicy, filter_forest, find_node,
};

use crate::collapse::CollapseSet;
use crate::drill::DrillNavigator;

/// One node as a renderer should draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleNode<'a> {
    /// The filtered node.
    pub node: &'a Node,
    /// Strict descendants in the filtered forest, hidden or not.
    pub descendants: usize,
    /// The node is in the collapse set.
    pub collapsed: bool,
    /// The node has at least one filtered child.
    pub has_children: bool,
    /// The node is on the drill path.
    pub on_path: bool,
    /// Role classification under the chart's policy.
    pub roles: RoleFlags,
    /// Children to draw, already narrowed and cut.
    pub children: Vec<VisibleNode<'a>>,
}

/// Filtered, collapsible, drillable org chart.
#[derive(Clone, Debug)]
pub struct OrgChart {
    policy: RolePolicy,
    matcher: RoleMatcher,
    raw: Vec<Node>,
    forest: Vec<Node>,
    counts: DescendantIndex,
    collapsed: CollapseSet,
    drill: DrillNavigator,
}

impl Default for OrgChart {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl OrgChart {
    /// Build a chart over `raw` with the default [`RolePolicy`].
    pub fn new(raw: Vec<Node>) -> Self {
        Self::with_policy(raw, RolePolicy::default())
    }

    /// Build a chart over `raw` with a custom role policy.
    pub fn with_policy(raw: Vec<Node>, policy: RolePolicy) -> Self {
        let mut chart = Self {
            matcher: policy.matcher(),
            policy,
            raw,
            forest: Vec::new(),
            counts: DescendantIndex::default(),
            collapsed: CollapseSet::new(),
            drill: DrillNavigator::new(),
        };
        chart.rebuild();
        chart
    }

    /// Replace the raw forest and recompute everything derived from it.
    ///
    /// The collapse set is kept as is; ids that vanished become inert. The
    /// drill path is cut to its longest prefix that still exists.
    pub fn refresh(&mut self, raw: Vec<Node>) {
        self.raw = raw;
        self.rebuild();
    }

    /// Swap the role policy and re-filter.
    pub fn set_policy(&mut self, policy: RolePolicy) {
        self.matcher = policy.matcher();
        self.policy = policy;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let matcher = &self.matcher;
        self.forest = filter_forest(&self.raw, |n| matcher.is_hidden(n));
        self.counts = DescendantIndex::build(&self.forest);
        if self.drill.retain_valid(&self.forest) {
            #[cfg(feature = "tracing")]
            tracing::debug!(depth = self.drill.path().len(), "drill path cut by refresh");
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            raw_roots = self.raw.len(),
            nodes = self.counts.len(),
            "refreshed org chart"
        );
    }

    /// Role policy in effect.
    pub fn policy(&self) -> &RolePolicy {
        &self.policy
    }

    /// The forest as last given to [`refresh`](Self::refresh).
    pub fn raw(&self) -> &[Node] {
        &self.raw
    }

    /// The filtered forest.
    pub fn forest(&self) -> &[Node] {
        &self.forest
    }

    /// Descendant counts over the filtered forest.
    pub fn counts(&self) -> &DescendantIndex {
        &self.counts
    }

    /// Strict descendant count of `id`, or `None` if it is not in the
    /// filtered forest.
    pub fn descendants(&self, id: NodeId) -> Option<usize> {
        self.counts.get(id)
    }

    /// The collapse set.
    pub fn collapsed(&self) -> &CollapseSet {
        &self.collapsed
    }

    /// The drill navigator.
    pub fn drill(&self) -> &DrillNavigator {
        &self.drill
    }

    /// The current drill path.
    pub fn path(&self) -> &[NodeId] {
        self.drill.path()
    }

    /// True if `id` is collapsed.
    pub fn is_collapsed(&self, id: NodeId) -> bool {
        self.collapsed.contains(id)
    }

    /// Look up a node of the filtered forest.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        find_node(&self.forest, id)
    }

    /// Expand `id` and drill into it.
    ///
    /// Expanding a coordinator collapses every supervisor below it. Returns
    /// false, changing nothing, if `id` is not in the filtered forest.
    pub fn expand(&mut self, id: NodeId) -> bool {
        let found = self
            .drill
            .expand(&self.forest, &mut self.collapsed, &self.policy, id)
            .is_some();
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, found, depth = self.drill.path().len(), "expand");
        found
    }

    /// Collapse `id` and back the drill path out of it.
    ///
    /// Returns false, changing nothing, if `id` is not in the filtered forest.
    pub fn collapse(&mut self, id: NodeId) -> bool {
        if !self.counts.contains(id) {
            return false;
        }
        self.collapsed.add(id);
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, "collapse");
        if self.drill.collapse(id) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%id, depth = self.drill.path().len(), "drill path backed out");
        }
        true
    }

    /// Collapse `id` if it is expanded, expand it otherwise.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.is_collapsed(id) {
            self.expand(id)
        } else {
            self.collapse(id)
        }
    }

    /// Collapse every node that has children. The drill path is kept.
    pub fn collapse_all(&mut self) {
        self.collapsed.collapse_all(&self.forest);
        #[cfg(feature = "tracing")]
        tracing::debug!(collapsed = self.collapsed.len(), "collapse all");
    }

    /// Expand every node. The drill path is kept.
    pub fn expand_all(&mut self) {
        self.collapsed.expand_all();
        #[cfg(feature = "tracing")]
        tracing::debug!("expand all");
    }

    /// Drop the drill focus. The collapse set is kept.
    pub fn clear_focus(&mut self) {
        self.drill.clear();
        #[cfg(feature = "tracing")]
        tracing::debug!("clear focus");
    }

    /// Children a renderer should draw below `parent`.
    ///
    /// Pass [`NodeId::VIRTUAL_ROOT`] for the root row. Unknown parents have
    /// no visible children.
    pub fn children_of(&self, parent: NodeId) -> &[Node] {
        if parent.is_virtual_root() {
            return self.drill.apply_drill(&self.forest, parent);
        }
        match self.node(parent) {
            Some(node) => self.visible_children(node),
            None => &[],
        }
    }

    fn visible_children<'a>(&self, node: &'a Node) -> &'a [Node] {
        if self.drill.selected_child(node.id).is_some() {
            self.drill.apply_drill(&node.children, node.id)
        } else if self.collapsed.contains(node.id) {
            &[]
        } else {
            &node.children
        }
    }

    /// The chart as it should be drawn, from the root row down.
    pub fn view(&self) -> Vec<VisibleNode<'_>> {
        self.drill
            .apply_drill(&self.forest, NodeId::VIRTUAL_ROOT)
            .iter()
            .map(|n| self.visible(n))
            .collect()
    }

    fn visible<'a>(&self, node: &'a Node) -> VisibleNode<'a> {
        VisibleNode {
            node,
            descendants: self.counts.get(node.id).unwrap_or(0),
            collapsed: self.collapsed.contains(node.id),
            has_children: !node.is_leaf(),
            on_path: self.drill.on_path(node.id),
            roles: self.matcher.classify_node(node),
            children: self
                .visible_children(node)
                .iter()
                .map(|c| self.visible(c))
                .collect(),
        }
    }
}
