// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-run derived state produced by the pipeline.

use alloc::vec::Vec;
use kurbo::{Line, Point};
use peniko::Color;

/// Result of one pipeline run over a scene.
///
/// Entries parallel the scene's primitive collections: `points[i]` is the
/// result for the scene's `i`-th point primitive, and so on. A frame is
/// complete when returned and is discarded wholesale on the next run;
/// nothing here feeds back into the scene.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Per-point results, in scene order.
    pub points: Vec<PointResult>,
    /// Per-segment results, in scene order.
    pub segments: Vec<SegmentResult>,
    /// Per-polygon results, in scene order.
    pub polygons: Vec<PolygonResult>,
    /// Device-space corners of the view window, in ring order starting at
    /// the window's minimum corner. Hosts draw these as the window frame.
    pub window_outline: [Point; 4],
}

impl Frame {
    /// Primitive and visibility counts for this run.
    #[must_use]
    pub fn summary(&self) -> FrameSummary {
        FrameSummary {
            points: self.points.len(),
            visible_points: self.points.iter().filter(|p| p.visible).count(),
            segments: self.segments.len(),
            visible_segments: self.segments.iter().filter(|s| s.visible()).count(),
            polygons: self.polygons.len(),
            visible_polygons: self.polygons.iter().filter(|p| p.visible()).count(),
        }
    }
}

/// Derived state for one point primitive.
#[derive(Clone, Copy, Debug)]
pub struct PointResult {
    /// Projected position in window space.
    pub window: Point,
    /// Position in device coordinates.
    pub device: Point,
    /// True iff the projected position lies within the window bounds
    /// (inclusive).
    pub visible: bool,
    /// Color tag copied from the primitive.
    pub color: Color,
}

/// Derived state for one segment primitive.
#[derive(Clone, Copy, Debug)]
pub struct SegmentResult {
    /// The visible sub-segment, or `None` when the segment is entirely
    /// outside the window. The scene's world-space endpoints are untouched.
    pub clipped: Option<ClippedSegment>,
    /// Color tag copied from the primitive.
    pub color: Color,
}

impl SegmentResult {
    /// True iff any part of the segment survived clipping.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.clipped.is_some()
    }
}

/// The surviving part of a clipped segment, in both output spaces.
#[derive(Clone, Copy, Debug)]
pub struct ClippedSegment {
    /// Visible sub-segment in window space.
    pub window: Line,
    /// Visible sub-segment in device coordinates.
    pub device: Line,
}

/// Derived state for one polygon primitive.
#[derive(Clone, Debug)]
pub struct PolygonResult {
    /// Output polygons from clipping. Empty iff the polygon is entirely
    /// outside the window (or degenerate); the window clipper produces at
    /// most one piece.
    pub pieces: Vec<PolygonPiece>,
    /// Color tag copied from the primitive.
    pub color: Color,
}

impl PolygonResult {
    /// True iff any part of the polygon survived clipping.
    #[must_use]
    pub fn visible(&self) -> bool {
        !self.pieces.is_empty()
    }
}

/// One clipped output polygon, in both output spaces.
#[derive(Clone, Debug)]
pub struct PolygonPiece {
    /// Clipped vertex ring in window space.
    pub window: Vec<Point>,
    /// Clipped vertex ring in device coordinates.
    pub device: Vec<Point>,
}

/// Primitive and visibility counts for a [`Frame`].
///
/// This is the pipeline's debug/inspection snapshot; hosts surface it in
/// status panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSummary {
    /// Total point primitives.
    pub points: usize,
    /// Points inside the window.
    pub visible_points: usize,
    /// Total segment primitives.
    pub segments: usize,
    /// Segments at least partially inside the window.
    pub visible_segments: usize,
    /// Total polygon primitives.
    pub polygons: usize,
    /// Polygons at least partially inside the window.
    pub visible_polygons: usize,
}
