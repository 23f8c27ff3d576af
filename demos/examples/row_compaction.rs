// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row compaction.
//!
//! Feed a row compactor a resize sequence and show how the dead band keeps a
//! row from flickering when its width sits near the container edge.
//!
//! Run:
//! - `cargo run -p organogram_demos --example row_compaction`

use kurbo::Rect;
use organogram_layout::{CompactorConfig, RowCompactor, next_compact};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let container = Rect::new(0.0, 0.0, 800.0, 160.0);
    let mut row = RowCompactor::new(CompactorConfig::default());

    // Measured row widths while the user drags a window edge.
    let widths = [760.0, 790.0, 806.0, 812.0, 798.0, 801.0, 795.0, 790.0, 780.0];
    let mut flips = 0;
    let mut prev = row.is_compact();
    for w in widths {
        let compact = row.observe_rects(Rect::new(0.0, 0.0, w, 120.0), container, 5);
        println!("row {w:>5.0}px -> {}", if compact { "compact" } else { "wide" });
        if compact != prev {
            flips += 1;
        }
        prev = compact;
    }
    println!("flips with hysteresis: {flips}");

    // Same sequence with a plain threshold.
    let mut naive = false;
    let mut naive_flips = 0;
    for w in widths {
        let next = next_compact(naive, w, container.width(), 0.0);
        if next != naive {
            naive_flips += 1;
        }
        naive = next;
    }
    println!("flips without: {naive_flips}");
    assert!(flips < naive_flips);
}
