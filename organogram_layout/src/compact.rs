// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row compaction with hysteresis.
//!
//! A row of sibling cards is laid out side by side. When it no longer fits its
//! container it switches to a *compact* arrangement (stacked, narrower cards).
//! Compacting changes the measured width, which can flip the decision back on
//! the next frame. A dead band of `margin` pixels on each side of the
//! container width stops that oscillation.
//!
//! With `overflow = row_width - available`:
//!
//! | previous | next is compact when |
//! |---|---|
//! | not compact | `overflow > margin` |
//! | compact | `overflow > -margin` |
//!
//! Inside `(-margin, margin]` the previous state is kept.

use kurbo::Rect;

/// Decide the next compact state of a row.
///
/// Total over all inputs and never panics. A `NaN` overflow compares false
/// everywhere and therefore yields `false`; callers that measure the DOM or a
/// scene should guard their inputs, as [`RowCompactor`] does.
///
/// ```
/// use organogram_layout::next_compact;
///
/// // 5px over: inside the band, nothing changes.
/// assert!(!next_compact(false, 805.0, 800.0, 8.0));
/// assert!(next_compact(true, 805.0, 800.0, 8.0));
/// // 9px over: compact.
/// assert!(next_compact(false, 809.0, 800.0, 8.0));
/// // Back under by the full margin: expand again.
/// assert!(!next_compact(true, 792.0, 800.0, 8.0));
/// ```
#[must_use]
pub fn next_compact(prev: bool, row_width: f64, available: f64, margin: f64) -> bool {
    let overflow = row_width - available;
    if prev {
        overflow > -margin
    } else {
        overflow > margin
    }
}

/// Tuning for [`RowCompactor`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CompactorConfig {
    /// Half-width of the dead band in pixels.
    /// Default: 8.0
    pub margin: f64,
    /// Rows with more children than this are never re-evaluated; their
    /// arrangement is left to the renderer.
    /// Default: 6
    pub max_children: usize,
}

impl Default for CompactorConfig {
    fn default() -> Self {
        Self {
            margin: 8.0,
            max_children: 6,
        }
    }
}

/// Compact state of one row, fed with successive measurements.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowCompactor {
    config: CompactorConfig,
    compact: bool,
}

impl RowCompactor {
    /// A non-compact row.
    pub fn new(config: CompactorConfig) -> Self {
        Self {
            config,
            compact: false,
        }
    }

    /// The tuning in use.
    pub fn config(&self) -> &CompactorConfig {
        &self.config
    }

    /// Current decision.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Forget the decision, e.g. when the row's children change.
    pub fn reset(&mut self) {
        self.compact = false;
    }

    /// Feed one measurement and return the resulting state.
    ///
    /// Measurements that cannot be trusted leave the state unchanged: a
    /// negative or non-finite width, or a row with more than
    /// [`max_children`](CompactorConfig::max_children) children.
    pub fn observe(&mut self, row_width: f64, available: f64, child_count: usize) -> bool {
        if !usable(row_width) || !usable(available) || child_count > self.config.max_children {
            return self.compact;
        }
        let next = next_compact(self.compact, row_width, available, self.config.margin);
        if next != self.compact {
            #[cfg(feature = "tracing")]
            tracing::debug!(row_width, available, compact = next, "row compaction flipped");
            self.compact = next;
        }
        self.compact
    }

    /// Like [`observe`](Self::observe), taking the row's and the container's
    /// bounds.
    pub fn observe_rects(&mut self, row: Rect, container: Rect, child_count: usize) -> bool {
        self.observe(row.width(), container.width(), child_count)
    }
}

fn usable(width: f64) -> bool {
    width.is_finite() && width >= 0.0
}
