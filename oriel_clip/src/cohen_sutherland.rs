// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region-code (Cohen–Sutherland) line clipping.
//!
//! Each endpoint is classified with an [`Outcode`]. Two empty codes accept
//! the segment; codes sharing a bit reject it (both endpoints lie beyond the
//! same edge). Otherwise one outside endpoint is pulled onto the rectangle
//! edge it violates and reclassified, and the loop repeats. An endpoint can
//! carry at most two outside bits and each pass clears at least one, so the
//! loop settles after a handful of passes; the bound below is a safety net,
//! not part of the termination argument.

use kurbo::{Line, Point, Rect};

use crate::Outcode;

/// Upper bound on endpoint replacements before the segment is rejected.
const MAX_CLIP_PASSES: usize = 8;

/// Clips `line` against `rect`, returning the visible sub-segment.
#[must_use]
pub fn clip_line(line: Line, rect: Rect) -> Option<Line> {
    let Line { mut p0, mut p1 } = line;
    let mut code0 = Outcode::classify(p0, rect);
    let mut code1 = Outcode::classify(p1, rect);

    for _ in 0..MAX_CLIP_PASSES {
        if (code0 | code1).is_empty() {
            return Some(Line::new(p0, p1));
        }
        if !(code0 & code1).is_empty() {
            return None;
        }

        // Pull the first outside endpoint onto the edge it violates.
        if !code0.is_empty() {
            p0 = edge_crossing(p0, p1, code0, rect);
            code0 = Outcode::classify(p0, rect);
        } else {
            p1 = edge_crossing(p0, p1, code1, rect);
            code1 = Outcode::classify(p1, rect);
        }
    }

    None
}

/// Intersection of the segment with the infinite line of the first edge the
/// outside code violates, tested in TOP, BOTTOM, RIGHT, LEFT priority order.
///
/// The denominators cannot be zero: `outside` has the corresponding bit set
/// for exactly one endpoint (a shared bit rejects the segment before this is
/// called), so the segment strictly spans that edge coordinate.
fn edge_crossing(p0: Point, p1: Point, outside: Outcode, rect: Rect) -> Point {
    if outside.contains(Outcode::TOP) {
        Point::new(
            p0.x + (p1.x - p0.x) * (rect.y1 - p0.y) / (p1.y - p0.y),
            rect.y1,
        )
    } else if outside.contains(Outcode::BOTTOM) {
        Point::new(
            p0.x + (p1.x - p0.x) * (rect.y0 - p0.y) / (p1.y - p0.y),
            rect.y0,
        )
    } else if outside.contains(Outcode::RIGHT) {
        Point::new(
            rect.x1,
            p0.y + (p1.y - p0.y) * (rect.x1 - p0.x) / (p1.x - p0.x),
        )
    } else {
        Point::new(
            rect.x0,
            p0.y + (p1.y - p0.y) * (rect.x0 - p0.x) / (p1.x - p0.x),
        )
    }
}
