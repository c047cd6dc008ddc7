// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oriel Scene: world-space primitive records and the scene container.
//!
//! A [`Scene`] holds ordered collections of the three primitive kinds the
//! viewing pipeline understands:
//!
//! - [`Point`] — a single world-space location.
//! - [`Segment`] — a straight line between two world-space endpoints.
//! - [`Polygon`] — an ordered ring of world-space vertices (insertion order
//!   is winding order; convexity is not required).
//!
//! World coordinates are authored once, typically by an external scene
//! loader, and are never mutated by the pipeline. Everything derived from
//! them per view (projected coordinates, clip results, visibility) lives in
//! `oriel_pipeline`'s per-run frame, not on these records, so a record can
//! never carry stale state from an earlier run.
//!
//! Colors use [`peniko::Color`] and default to opaque black.
//!
//! ```rust
//! use kurbo::Point;
//! use oriel_scene::{Polygon, Scene, Segment};
//!
//! let mut scene = Scene::new();
//! scene.points.push(oriel_scene::Point::new(Point::new(2.0, 3.0)));
//! scene.segments.push(Segment::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0)));
//! scene.polygons.push(Polygon::new(vec![
//!     Point::new(1.0, 1.0),
//!     Point::new(4.0, 1.0),
//!     Point::new(2.5, 4.0),
//! ]));
//! assert_eq!(scene.len(), 3);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use peniko::Color;

/// A single world-space point with a color tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// World-space position.
    pub position: kurbo::Point,
    /// Draw color.
    pub color: Color,
}

impl Point {
    /// Creates a black point at `position`.
    #[must_use]
    pub fn new(position: kurbo::Point) -> Self {
        Self {
            position,
            color: Color::BLACK,
        }
    }

    /// Sets the draw color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A world-space line segment with a color tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// World-space start point.
    pub start: kurbo::Point,
    /// World-space end point.
    pub end: kurbo::Point,
    /// Draw color.
    pub color: Color,
}

impl Segment {
    /// Creates a black segment from `start` to `end`.
    #[must_use]
    pub fn new(start: kurbo::Point, end: kurbo::Point) -> Self {
        Self {
            start,
            end,
            color: Color::BLACK,
        }
    }

    /// Sets the draw color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The segment as a [`kurbo::Line`].
    #[must_use]
    pub fn line(&self) -> kurbo::Line {
        kurbo::Line::new(self.start, self.end)
    }
}

/// A world-space polygon with a color tag.
///
/// Vertices form a closed ring in insertion order; the last vertex connects
/// back to the first. Rings with fewer than three vertices are accepted here
/// but clip to nothing downstream.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// World-space vertex ring.
    pub vertices: Vec<kurbo::Point>,
    /// Draw color.
    pub color: Color,
}

impl Polygon {
    /// Creates a black polygon from a vertex ring.
    #[must_use]
    pub fn new(vertices: Vec<kurbo::Point>) -> Self {
        Self {
            vertices,
            color: Color::BLACK,
        }
    }

    /// Sets the draw color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Ordered collections of world-space primitives.
///
/// The pipeline reads a scene and never writes to it; results come back in a
/// separate per-run frame indexed by the positions of the primitives here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Point primitives, in scene order.
    pub points: Vec<Point>,
    /// Segment primitives, in scene order.
    pub segments: Vec<Segment>,
    /// Polygon primitives, in scene order.
    pub polygons: Vec<Polygon>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of primitives across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len() + self.segments.len() + self.polygons.len()
    }

    /// Returns true if the scene holds no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use peniko::Color;

    use super::{Polygon, Scene, Segment};

    #[test]
    fn primitives_default_to_black() {
        let point = super::Point::new(kurbo::Point::new(1.0, 2.0));
        assert_eq!(point.color, Color::BLACK);

        let segment = Segment::new(kurbo::Point::ZERO, kurbo::Point::new(1.0, 0.0));
        assert_eq!(segment.color, Color::BLACK);
    }

    #[test]
    fn with_color_overrides_tag() {
        let red = Color::from_rgb8(255, 0, 0);
        let polygon = Polygon::new(vec![
            kurbo::Point::ZERO,
            kurbo::Point::new(1.0, 0.0),
            kurbo::Point::new(0.0, 1.0),
        ])
        .with_color(red);
        assert_eq!(polygon.color, red);
    }

    #[test]
    fn scene_counts_all_kinds() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        scene.points.push(super::Point::new(kurbo::Point::ZERO));
        scene
            .segments
            .push(Segment::new(kurbo::Point::ZERO, kurbo::Point::new(2.0, 2.0)));
        assert_eq!(scene.len(), 2);
        assert!(!scene.is_empty());
    }

    #[test]
    fn segment_as_line_keeps_endpoints() {
        let segment = Segment::new(kurbo::Point::new(1.0, 2.0), kurbo::Point::new(3.0, 4.0));
        let line = segment.line();
        assert_eq!(line.p0, segment.start);
        assert_eq!(line.p1, segment.end);
    }
}
