// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=organogram_layout --heading-base-level=0

//! Organogram Layout: row compaction decisions for org charts.
//!
//! An org chart lays each level's children out in a row. Wide rows switch to a
//! compact arrangement when they overflow their container. Measuring happens
//! elsewhere; this crate only turns measurements into a stable yes/no.
//!
//! - [`next_compact`]: the pure decision with a hysteresis dead band.
//! - [`RowCompactor`]: keeps the previous decision per row and ignores
//!   measurements it cannot trust. Accepts plain widths or Kurbo [`Rect`](kurbo::Rect)s.
//!
//! ```
//! use organogram_layout::{CompactorConfig, RowCompactor};
//!
//! let mut row = RowCompactor::new(CompactorConfig::default());
//! assert!(row.observe(960.0, 900.0, 5));
//! // Compact now; small wobble around the container width keeps it so.
//! assert!(row.observe(902.0, 900.0, 5));
//! ```
//!
//! ## Features
//!
//! - `std` (default): use Kurbo with `std`.
//! - `libm`: use Kurbo with `libm` for `no_std` targets.
//! - `serde`: (de)serialize [`CompactorConfig`].
//! - `tracing`: emit a `debug` event whenever a row flips.
//!
//! This crate is `no_std`.

#![no_std]

pub mod compact;

pub use compact::{CompactorConfig, RowCompactor, next_compact};
