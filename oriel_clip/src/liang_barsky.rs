// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parametric (Liang–Barsky) line clipping.
//!
//! The segment is written as `P(u) = P0 + u * (P1 - P0)` for `u` in `[0, 1]`
//! and intersected with the four boundary half-planes. Entering boundaries
//! raise the lower parameter bound, exiting boundaries lower the upper
//! bound, and the segment survives iff the bounds stay ordered.

use kurbo::{Line, Point, Rect};

/// Clips `line` against `rect`, returning the visible sub-segment.
#[must_use]
pub fn clip_line(line: Line, rect: Rect) -> Option<Line> {
    let dx = line.p1.x - line.p0.x;
    let dy = line.p1.y - line.p0.y;

    // Boundary order: left, right, bottom, top.
    let p = [-dx, dx, -dy, dy];
    let q = [
        line.p0.x - rect.x0,
        rect.x1 - line.p0.x,
        line.p0.y - rect.y0,
        rect.y1 - line.p0.y,
    ];

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;

    for (&pi, &qi) in p.iter().zip(&q) {
        if pi == 0.0 {
            // Parallel to this boundary; outside it means outside the window.
            if qi < 0.0 {
                return None;
            }
        } else {
            let t = qi / pi;
            if pi < 0.0 {
                // Entering through this boundary.
                u1 = u1.max(t);
            } else {
                // Exiting through this boundary.
                u2 = u2.min(t);
            }
        }
    }

    if u1 > u2 {
        return None;
    }

    Some(Line::new(
        Point::new(line.p0.x + u1 * dx, line.p0.y + u1 * dy),
        Point::new(line.p0.x + u2 * dx, line.p0.y + u2 * dy),
    ))
}
