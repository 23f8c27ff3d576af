// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=organogram_view --heading-base-level=0

//! Organogram View: collapse and drill state for interactive org charts.
//!
//! ## Overview
//!
//! This crate holds the user-driven state of an org chart over a forest
//! filtered by `organogram_tree`. It does not render anything.
//! Instead, it answers "which children do I draw under this node?" and hands
//! back a tree of [`VisibleNode`]s ready for painting.
//!
//! ## State
//!
//! - [`CollapseSet`](crate::collapse::CollapseSet): ids whose children are hidden.
//!   Collapsing never removes nodes, so counts still see whole subtrees.
//! - [`DrillNavigator`](crate::drill::DrillNavigator): a root→target path.
//!   Every ancestor on the path shows only its selected child, so the chart
//!   narrows to one branch without losing its context.
//!
//! Both survive a refresh. Collapsed ids that disappear become inert; the drill
//! path is cut to the part that still exists.
//!
//! ## Workflow
//!
//! 1) Build an [`OrgChart`](crate::chart::OrgChart) from the raw forest. It filters
//!    hidden roles and counts descendants.
//! 2) Feed it commands: `expand`, `collapse`, `toggle`, `collapse_all`,
//!    `expand_all`, `clear_focus`.
//! 3) Draw [`OrgChart::view`](crate::chart::OrgChart::view), or walk
//!    [`OrgChart::children_of`](crate::chart::OrgChart::children_of) from
//!    [`NodeId::VIRTUAL_ROOT`](organogram_tree::NodeId::VIRTUAL_ROOT) if you
//!    render lazily.
//!
//! Expanding a coordinator collapses the supervisors below it, so a large
//! department opens one management level at a time.
//!
//! ## Example
//!
//! ```
//! use organogram_tree::{Node, NodeId};
//! use organogram_view::OrgChart;
//!
//! let mut chart = OrgChart::new(vec![
//!     Node::new(1, "CEO").child(Node::new(2, "Ana")).child(Node::new(3, "Bia")),
//! ]);
//! chart.expand(NodeId(3));
//! let root_row = chart.children_of(NodeId::VIRTUAL_ROOT);
//! assert_eq!(root_row.len(), 1);
//! let under_ceo = chart.children_of(NodeId(1));
//! assert_eq!(under_ceo.len(), 1);
//! assert_eq!(under_ceo[0].name, "Bia");
//! ```
//!
//! ## Features
//!
//! - `std` (default): enable `std` in dependencies.
//! - `tracing`: emit `debug` events for refreshes and commands.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod chart;
pub mod collapse;
pub mod drill;

pub use chart::{OrgChart, VisibleNode};
pub use collapse::{CollapseSet, parent_ids};
pub use drill::{DrillNavigator, DrillState, find_path, is_valid_path, valid_prefix_len};
