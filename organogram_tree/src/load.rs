// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading and validating forests at the directory-service boundary.
//!
//! The payload is a JSON array of nodes:
//!
//! ```json
//! [{ "id": 1, "name": "CEO", "role": "Diretor", "avatarUrl": "…", "children": [] }]
//! ```
//!
//! `role`, `avatarUrl` and `children` may be omitted. Ownership makes cycles
//! impossible once parsed, so validation only checks id uniqueness, the
//! reserved id, and names.

use alloc::collections::BTreeSet;
#[cfg(feature = "serde")]
use alloc::vec::Vec;

use crate::error::ForestError;
use crate::types::{Node, NodeId};

/// Check that `roots` is a well-formed forest.
///
/// Reports the first problem found in pre-order.
pub fn validate_forest(roots: &[Node]) -> Result<(), ForestError> {
    let mut seen = BTreeSet::new();
    for root in roots {
        validate_node(root, &mut seen)?;
    }
    Ok(())
}

fn validate_node(node: &Node, seen: &mut BTreeSet<NodeId>) -> Result<(), ForestError> {
    if node.id.is_virtual_root() {
        return Err(ForestError::ReservedId);
    }
    if !seen.insert(node.id) {
        return Err(ForestError::DuplicateId(node.id));
    }
    if node.name.trim().is_empty() {
        return Err(ForestError::EmptyName(node.id));
    }
    for child in &node.children {
        validate_node(child, seen)?;
    }
    Ok(())
}

/// Parse and validate a JSON forest.
#[cfg(feature = "serde")]
pub fn parse_forest(json: &str) -> Result<Vec<Node>, ForestError> {
    let roots: Vec<Node> = serde_json::from_str(json)?;
    validate_forest(&roots)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(roots = roots.len(), "parsed forest");
    Ok(roots)
}

/// Parse and validate a JSON forest from raw bytes.
#[cfg(feature = "serde")]
pub fn parse_forest_slice(json: &[u8]) -> Result<Vec<Node>, ForestError> {
    let roots: Vec<Node> = serde_json::from_slice(json)?;
    validate_forest(&roots)?;
    Ok(roots)
}
