// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oriel Clip: clipping of points, segments, and polygons against an
//! axis-aligned rectangle.
//!
//! This crate is the algorithmic core of the Oriel viewing pipeline. It
//! operates entirely in window space — the coordinate system in which the
//! view window is an axis-aligned [`kurbo::Rect`] — and knows nothing about
//! scenes, transforms, or devices.
//!
//! Three capabilities are provided:
//!
//! - **Point containment**: [`contains_inclusive`], the visibility test for
//!   point primitives. Bounds are inclusive on all four edges, so a point on
//!   the window boundary is visible. (This is why [`kurbo::Rect::contains`],
//!   which is half-open, is not used.)
//! - **Line clipping**: two interchangeable algorithms behind the
//!   [`LineClip`] trait — [`CohenSutherland`] (region codes) and
//!   [`LiangBarsky`] (parametric). Both return the visible sub-segment of a
//!   [`kurbo::Line`], or `None` when the segment lies entirely outside the
//!   rectangle. For any input the two produce the same accept/reject
//!   decision and the same endpoints up to floating-point rounding; callers
//!   select one via [`LineClipAlgorithm`].
//! - **Polygon clipping**: [`sutherland_hodgman::clip_polygon`], sequential
//!   half-plane clipping of a single simple polygon against the four
//!   rectangle edges. Valid only because the clip region is convex; it must
//!   not be reused against non-convex regions.
//!
//! ```rust
//! use kurbo::{Line, Point, Rect};
//! use oriel_clip::LineClipAlgorithm;
//!
//! let window = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let segment = Line::new(Point::new(-5.0, 3.0), Point::new(5.0, 3.0));
//!
//! let clipped = LineClipAlgorithm::CohenSutherland
//!     .clip_line(segment, window)
//!     .expect("segment crosses the window");
//! assert_eq!(clipped.p0, Point::new(0.0, 3.0));
//! assert_eq!(clipped.p1, Point::new(5.0, 3.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod cohen_sutherland;
pub mod liang_barsky;
mod outcode;
pub mod sutherland_hodgman;

use kurbo::{Line, Point, Rect};

pub use outcode::Outcode;

/// Inclusive rectangle containment.
///
/// Boundary points count as inside, matching the polygon inside-tests so
/// that point visibility and polygon clipping agree on the window edge.
#[must_use]
pub fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

/// Clipping of a line segment against an axis-aligned rectangle.
///
/// `None` means the segment is entirely outside the rectangle. `Some`
/// carries the visible sub-segment, which equals the input when the segment
/// is fully inside.
pub trait LineClip {
    /// Clips `line` against `rect`.
    fn clip_line(&self, line: Line, rect: Rect) -> Option<Line>;
}

/// Region-code line clipping. See [`cohen_sutherland`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CohenSutherland;

impl LineClip for CohenSutherland {
    fn clip_line(&self, line: Line, rect: Rect) -> Option<Line> {
        cohen_sutherland::clip_line(line, rect)
    }
}

/// Parametric line clipping. See [`liang_barsky`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiangBarsky;

impl LineClip for LiangBarsky {
    fn clip_line(&self, line: Line, rect: Rect) -> Option<Line> {
        liang_barsky::clip_line(line, rect)
    }
}

/// Selects which line-clipping algorithm a pipeline run uses.
///
/// The two algorithms are interchangeable: they agree on accept/reject and
/// on clipped endpoints up to floating-point rounding. Polygon clipping has
/// a single fixed algorithm and is not selected here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineClipAlgorithm {
    /// Region-code clipping ([`CohenSutherland`]).
    #[default]
    CohenSutherland,
    /// Parametric clipping ([`LiangBarsky`]).
    LiangBarsky,
}

impl LineClipAlgorithm {
    /// The clipper implementing this algorithm.
    #[must_use]
    pub fn clipper(self) -> &'static dyn LineClip {
        match self {
            Self::CohenSutherland => &CohenSutherland,
            Self::LiangBarsky => &LiangBarsky,
        }
    }

    /// Clips `line` against `rect` with the selected algorithm.
    #[must_use]
    pub fn clip_line(self, line: Line, rect: Rect) -> Option<Line> {
        self.clipper().clip_line(line, rect)
    }
}
