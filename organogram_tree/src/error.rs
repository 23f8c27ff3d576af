// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when loading a forest from the directory service.

use crate::types::NodeId;

/// A forest could not be loaded or failed validation.
///
/// The engine itself never produces this: its operations assume a
/// well-formed forest. It is returned by the loading helpers in
/// [`load`](crate::load).
#[derive(Debug)]
pub enum ForestError {
    /// The payload is not a valid JSON forest.
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    /// The same id appears more than once.
    DuplicateId(NodeId),
    /// The reserved [`NodeId::VIRTUAL_ROOT`] appears in the data.
    ReservedId,
    /// A node has an empty (or whitespace-only) name.
    EmptyName(NodeId),
}

impl core::fmt::Display for ForestError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "serde")]
            Self::Json(err) => write!(f, "invalid forest payload: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate node id {id}"),
            Self::ReservedId => write!(f, "node id {} is reserved", NodeId::VIRTUAL_ROOT.get()),
            Self::EmptyName(id) => write!(f, "node {id} has an empty name"),
        }
    }
}

impl core::error::Error for ForestError {
    #[cfg(feature = "serde")]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ForestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
