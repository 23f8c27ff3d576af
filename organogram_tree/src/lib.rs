// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=organogram_tree --heading-base-level=0

//! Organogram Tree: the reporting-line forest behind an org chart.
//!
//! Organogram Tree is the data layer of an interactive organization chart.
//! It takes the forest delivered by a directory service and answers the
//! structural questions a chart needs.
//!
//! - Represents people as [`Node`]s with an id, a name, a free-text role and
//!   ordered direct reports.
//! - Removes nodes by role while keeping their reports, see [`filter_forest`].
//! - Counts descendants of every node for badges, see [`DescendantIndex`].
//! - Collects ids in a subtree by predicate, see [`collect_ids`].
//!
//! ## Where this fits
//!
//! - Tree: structure and queries (this crate).
//! - View: collapse and drill state over the filtered tree, see `organogram_view`.
//! - Layout: row compaction decisions, see `organogram_layout`.
//!
//! Nothing here fetches, renders or persists. Every function is a pure
//! function of its inputs and returns fresh data, so derived structures are
//! recomputed from scratch whenever the forest changes.
//!
//! ## Roles
//!
//! Directory titles are free text. A [`RolePolicy`] classifies them by
//! case-insensitive substring into [`RoleFlags`]. The default policy hides
//! analysts and admins, and recognizes coordinators (`"coorden"`,
//! `"coordinator"`) and supervisors (`"supervis"`).
//!
//! ## Minimal usage
//!
//! ```
//! use organogram_tree::{Node, NodeId, RolePolicy, DescendantIndex, filter_with_policy};
//!
//! let raw = vec![
//!     Node::new(1, "CEO").with_role("Diretor").child(
//!         Node::new(2, "Bruno")
//!             .with_role("Supervisor")
//!             .child(Node::new(4, "Carla").with_role("Técnico"))
//!             .child(Node::new(5, "Duda").with_role("Analista")),
//!     ),
//! ];
//!
//! let filtered = filter_with_policy(&raw, &RolePolicy::default());
//! let counts = DescendantIndex::build(&filtered);
//! assert_eq!(counts.get(NodeId(1)), Some(2));
//! assert_eq!(counts.get(NodeId(5)), None);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enable `std` in dependencies.
//! - `serde` (default): (de)serialize nodes and policies; enables
//!   [`parse_forest`](load::parse_forest).
//! - `tracing`: emit `trace` events for filter and count passes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod collect;
pub mod count;
pub mod error;
pub mod filter;
pub mod load;
pub mod role;
pub mod types;

pub use collect::{collect_ids, find_node, node_count, preorder_ids};
pub use count::{DescendantIndex, count_descendants};
pub use error::ForestError;
pub use filter::{filter_forest, filter_with_policy, try_filter_forest};
pub use load::validate_forest;
pub use role::{RoleFlags, RoleMatcher, RolePolicy, role_matches};
pub use types::{Node, NodeId};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn raw_forest() -> Vec<Node> {
        vec![
            Node::new(1, "CEO").with_role("Diretor").child(
                Node::new(2, "Ana").with_role("Coordenador").child(
                    Node::new(3, "Bruno")
                        .with_role("Supervisor")
                        .child(Node::new(4, "Carla").with_role("Técnico"))
                        .child(Node::new(5, "Duda").with_role("Analista")),
                ),
            ),
        ]
    }

    #[test]
    fn filter_then_count_then_collect() {
        let policy = RolePolicy::default();
        let filtered = filter_with_policy(&raw_forest(), &policy);

        let ids: Vec<i64> = preorder_ids(&filtered).iter().map(|i| i.get()).collect();
        assert_eq!(ids, [1, 2, 3, 4]);

        let counts: Vec<(i64, usize)> = count_descendants(&filtered)
            .into_iter()
            .map(|(k, v)| (k.get(), v))
            .collect();
        assert_eq!(counts, [(1, 3), (2, 2), (3, 1), (4, 0)]);

        let ana = find_node(&filtered, NodeId(2)).unwrap();
        assert!(policy.is_coordinator(ana));
        assert_eq!(collect_ids(ana, |n| policy.is_supervisor(n)), [NodeId(3)]);
    }

    #[test]
    fn counts_ignore_hidden_nodes() {
        let raw = raw_forest();
        let unfiltered = DescendantIndex::build(&raw);
        let filtered = DescendantIndex::build(&filter_with_policy(&raw, &RolePolicy::default()));
        assert_eq!(unfiltered.get(NodeId(1)), Some(4));
        assert_eq!(filtered.get(NodeId(1)), Some(3));
        assert_eq!(node_count(&raw), unfiltered.len());
    }
}
