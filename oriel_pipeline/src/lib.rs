// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oriel Pipeline: the viewing-pipeline orchestrator.
//!
//! A [`Pipeline`] runs the full coordinate pipeline over a scene each time
//! the view parameters or the scene change:
//!
//! 1. Build the composite world→window transform from the
//!    [`ViewWindow`](oriel_view::ViewWindow).
//! 2. Project every primitive into window space with that one transform.
//! 3. Clip: points by inclusive containment, segments with the configured
//!    [`LineClipAlgorithm`], polygons with sequential half-plane clipping.
//! 4. Map surviving geometry into device coordinates through the
//!    [`Viewport`](oriel_view::Viewport).
//!
//! The pipeline owns no algorithmic logic; it sequences `oriel_view` and
//! `oriel_clip` over `oriel_scene` data. Results come back as a fresh
//! [`Frame`] every run — world-space records are never written to, and no
//! derived state survives from one run to the next.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use oriel_pipeline::Pipeline;
//! use oriel_scene::{Scene, Segment};
//! use oriel_view::{ViewWindow, Viewport};
//!
//! let mut scene = Scene::new();
//! scene.segments.push(Segment::new(Point::new(-5.0, 3.0), Point::new(5.0, 3.0)));
//!
//! let window = ViewWindow::new(Rect::new(0.0, 0.0, 10.0, 10.0));
//! let viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let frame = Pipeline::new().run(&scene, &window, &viewport);
//! let clipped = frame.segments[0].clipped.expect("crosses the window");
//! assert_eq!(clipped.window.p0, Point::new(0.0, 3.0));
//! ```
//!
//! ## Concurrency
//!
//! A run is synchronous and executes to completion; it is not reentrant.
//! Because all derived state lives in the returned [`Frame`], embedding the
//! core in a threaded host only requires that the `Scene` not be mutated
//! while a run reads it.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod frame;

use alloc::vec::Vec;
use kurbo::Line;
use oriel_clip::{contains_inclusive, sutherland_hodgman};
use oriel_scene::Scene;
use oriel_view::{ViewWindow, Viewport};

pub use frame::{
    ClippedSegment, Frame, FrameSummary, PointResult, PolygonPiece, PolygonResult, SegmentResult,
};
pub use oriel_clip::LineClipAlgorithm;

/// Viewing-pipeline configuration.
///
/// The only configurable step is the line-clipping algorithm, selected once
/// and used for every segment of every run until changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    line_clip: LineClipAlgorithm,
}

impl Pipeline {
    /// Creates a pipeline with the default line clipper (Cohen–Sutherland).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline using `line_clip` for segments.
    #[must_use]
    pub fn with_line_clip(line_clip: LineClipAlgorithm) -> Self {
        Self { line_clip }
    }

    /// Returns the configured line-clipping algorithm.
    #[must_use]
    pub fn line_clip(&self) -> LineClipAlgorithm {
        self.line_clip
    }

    /// Selects the line-clipping algorithm for subsequent runs.
    pub fn set_line_clip(&mut self, line_clip: LineClipAlgorithm) {
        self.line_clip = line_clip;
    }

    /// Runs the full pipeline over `scene`, producing a fresh [`Frame`].
    #[must_use]
    pub fn run(&self, scene: &Scene, window: &ViewWindow, viewport: &Viewport) -> Frame {
        let world_to_window = window.world_to_window();
        let clip_rect = window.bounds();
        let to_device = viewport.window_to_device(window);

        let points = scene
            .points
            .iter()
            .map(|point| {
                let projected = world_to_window * point.position;
                PointResult {
                    window: projected,
                    device: to_device * projected,
                    visible: contains_inclusive(clip_rect, projected),
                    color: point.color,
                }
            })
            .collect();

        let segments = scene
            .segments
            .iter()
            .map(|segment| {
                let projected = Line::new(
                    world_to_window * segment.start,
                    world_to_window * segment.end,
                );
                let clipped = self
                    .line_clip
                    .clip_line(projected, clip_rect)
                    .map(|visible| ClippedSegment {
                        window: visible,
                        device: to_device * visible,
                    });
                SegmentResult {
                    clipped,
                    color: segment.color,
                }
            })
            .collect();

        let polygons = scene
            .polygons
            .iter()
            .map(|polygon| {
                let projected: Vec<kurbo::Point> = polygon
                    .vertices
                    .iter()
                    .map(|&vertex| world_to_window * vertex)
                    .collect();
                let pieces = sutherland_hodgman::clip_polygon(&projected, clip_rect)
                    .into_iter()
                    .map(|ring| PolygonPiece {
                        device: ring.iter().map(|&vertex| to_device * vertex).collect(),
                        window: ring,
                    })
                    .collect();
                PolygonResult {
                    pieces,
                    color: polygon.color,
                }
            })
            .collect();

        let window_outline = [
            to_device * kurbo::Point::new(clip_rect.x0, clip_rect.y0),
            to_device * kurbo::Point::new(clip_rect.x1, clip_rect.y0),
            to_device * kurbo::Point::new(clip_rect.x1, clip_rect.y1),
            to_device * kurbo::Point::new(clip_rect.x0, clip_rect.y1),
        ];

        Frame {
            points,
            segments,
            polygons,
            window_outline,
        }
    }
}
