// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the forest: node identifiers and reporting-line nodes.

use alloc::string::String;
use alloc::vec::Vec;

/// Identifier of a person in the hierarchy.
///
/// Ids are assigned upstream by the directory service and are unique across
/// the whole forest. They are never reused, so an id that disappears after a
/// refresh can safely linger in user state (collapse sets, drill paths)
/// without ever aliasing somebody else.
///
/// One value, [`NodeId::VIRTUAL_ROOT`], is reserved. It never appears in real
/// data and stands for "the list of top-level roots" wherever a parent id is
/// expected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NodeId(pub i64);

impl NodeId {
    /// Sentinel parent of every root in the forest.
    pub const VIRTUAL_ROOT: Self = Self(i64::MIN);

    /// The raw integer id.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// True for the [`VIRTUAL_ROOT`](Self::VIRTUAL_ROOT) sentinel.
    #[inline]
    pub const fn is_virtual_root(self) -> bool {
        self.0 == i64::MIN
    }
}

impl From<i64> for NodeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_virtual_root() {
            f.write_str("<root>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A person in the reporting-line forest.
///
/// Children are owned exclusively by their parent, so a forest of `Node`s is
/// acyclic by construction. Sibling order is significant and every operation
/// in this workspace preserves it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Node {
    /// Unique id of this person.
    pub id: NodeId,
    /// Display name; expected to be non-empty.
    pub name: String,
    /// Free-text job title such as `"Coordenador"` or `"Técnico"`.
    ///
    /// Role membership is decided by case-insensitive substring matching, see
    /// [`RolePolicy`](crate::RolePolicy).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub role: Option<String>,
    /// Opaque avatar location, carried through untouched.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub avatar_url: Option<String>,
    /// Direct reports, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a childless node with no role or avatar.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: NodeId(id),
            name: name.into(),
            role: None,
            avatar_url: None,
            children: Vec::new(),
        }
    }

    /// Set the role label.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the avatar location.
    #[must_use]
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Append a direct report.
    #[must_use]
    pub fn child(mut self, node: Self) -> Self {
        self.children.push(node);
        self
    }

    /// Replace the direct reports.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<Self>) -> Self {
        self.children = nodes;
        self
    }

    /// The role label, if any.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// True if this node has no direct reports.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Ids of the direct reports, in order.
    pub fn child_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().map(|c| c.id)
    }

    /// Copy of this node's own fields with the given children.
    pub(crate) fn with_replaced_children(&self, children: Vec<Self>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            role: self.role.clone(),
            avatar_url: self.avatar_url.clone(),
            children,
        }
    }
}
