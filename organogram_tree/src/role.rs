// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Role classification from free-text job titles.
//!
//! The directory service hands out titles like `"Coordenadora de Campo"` or
//! `"SUPERVISOR TÉCNICO"`, not an enum. A [`RolePolicy`] holds keyword lists
//! and classifies a title by case-insensitive substring match into
//! [`RoleFlags`]. A title can carry several flags at once.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::types::Node;

bitflags::bitflags! {
    /// Role classes a node can belong to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RoleFlags: u8 {
        /// Removed from the chart by the default filter; children are promoted.
        const HIDDEN      = 0b0000_0001;
        /// Expanding this node auto-collapses the supervisors beneath it.
        const COORDINATOR = 0b0000_0010;
        /// Collapsed automatically when a coordinator above it is expanded.
        const SUPERVISOR  = 0b0000_0100;
    }
}

/// Keyword lists used to classify roles.
///
/// Keywords are matched as case-insensitive substrings of the role label, so
/// `"analist"` matches both `"Analista"` and `"ANALISTA DE SISTEMAS"`.
/// A node without a role never matches anything.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RolePolicy {
    /// Roles removed from the chart.
    pub hidden: Vec<String>,
    /// Roles treated as coordinators.
    pub coordinator: Vec<String>,
    /// Roles treated as supervisors.
    pub supervisor: Vec<String>,
}

impl Default for RolePolicy {
    fn default() -> Self {
        Self {
            hidden: keywords(&["analist", "admin"]),
            coordinator: keywords(&["coorden", "coordinator"]),
            supervisor: keywords(&["supervis"]),
        }
    }
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl RolePolicy {
    /// A policy that classifies nothing: no node is hidden, no node is a
    /// coordinator or supervisor.
    pub fn empty() -> Self {
        Self {
            hidden: Vec::new(),
            coordinator: Vec::new(),
            supervisor: Vec::new(),
        }
    }

    /// Classify a role label.
    ///
    /// To classify many labels, build a [`RoleMatcher`] once instead.
    pub fn classify(&self, role: Option<&str>) -> RoleFlags {
        self.matcher().classify(role)
    }

    /// Keyword lists lowercased once, for classifying a whole forest.
    pub fn matcher(&self) -> RoleMatcher {
        RoleMatcher::new(self)
    }

    /// Classify a node by its role label.
    pub fn classify_node(&self, node: &Node) -> RoleFlags {
        self.classify(node.role())
    }

    /// True if the default filter should remove `node`.
    pub fn is_hidden(&self, node: &Node) -> bool {
        role_matches(node.role(), &self.hidden)
    }

    /// True if `node` is a coordinator.
    pub fn is_coordinator(&self, node: &Node) -> bool {
        role_matches(node.role(), &self.coordinator)
    }

    /// True if `node` is a supervisor.
    pub fn is_supervisor(&self, node: &Node) -> bool {
        role_matches(node.role(), &self.supervisor)
    }
}

/// Case-insensitive substring match of `role` against any of `keywords`.
///
/// Empty keywords are ignored so a stray `""` in configuration does not match
/// every role.
pub fn role_matches(role: Option<&str>, keywords: &[String]) -> bool {
    match role {
        Some(role) if !keywords.is_empty() => {
            let role = role.to_lowercase();
            keywords
                .iter()
                .filter(|k| !k.is_empty())
                .any(|k| role.contains(k.to_lowercase().as_str()))
        }
        _ => false,
    }
}

/// A [`RolePolicy`] with its keywords lowercased and blank ones dropped.
///
/// Classifying through a matcher lowercases each role label once and never
/// touches the keywords again, which is what filters and views walking the
/// whole forest want.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleMatcher {
    hidden: Vec<String>,
    coordinator: Vec<String>,
    supervisor: Vec<String>,
}

impl RoleMatcher {
    /// Normalize the keyword lists of `policy`.
    pub fn new(policy: &RolePolicy) -> Self {
        Self {
            hidden: normalize(&policy.hidden),
            coordinator: normalize(&policy.coordinator),
            supervisor: normalize(&policy.supervisor),
        }
    }

    /// Classify a role label.
    pub fn classify(&self, role: Option<&str>) -> RoleFlags {
        let Some(role) = role else {
            return RoleFlags::empty();
        };
        let role = role.to_lowercase();
        let mut flags = RoleFlags::empty();
        if contains_any(&role, &self.hidden) {
            flags |= RoleFlags::HIDDEN;
        }
        if contains_any(&role, &self.coordinator) {
            flags |= RoleFlags::COORDINATOR;
        }
        if contains_any(&role, &self.supervisor) {
            flags |= RoleFlags::SUPERVISOR;
        }
        flags
    }

    /// Classify a node by its role label.
    pub fn classify_node(&self, node: &Node) -> RoleFlags {
        self.classify(node.role())
    }

    /// True if the default filter should remove `node`.
    pub fn is_hidden(&self, node: &Node) -> bool {
        node_matches(node, &self.hidden)
    }

    /// True if `node` is a coordinator.
    pub fn is_coordinator(&self, node: &Node) -> bool {
        node_matches(node, &self.coordinator)
    }

    /// True if `node` is a supervisor.
    pub fn is_supervisor(&self, node: &Node) -> bool {
        node_matches(node, &self.supervisor)
    }

}

fn node_matches(node: &Node, keywords: &[String]) -> bool {
    match node.role() {
        Some(role) if !keywords.is_empty() => contains_any(&role.to_lowercase(), keywords),
        _ => false,
    }
}

fn normalize(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| k.to_lowercase())
        .collect()
}

// Both sides are already lowercase.
fn contains_any(role: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| role.contains(k.as_str()))
}
