// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};

use crate::ViewWindow;

/// Device-space target rectangle.
///
/// The viewport is read-only during a pipeline run; it only changes when the
/// host resizes the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    rect: Rect,
}

impl Viewport {
    /// Creates a viewport over `rect` in device coordinates.
    ///
    /// `rect` must have positive width and height; degenerate viewports are
    /// a caller error (checked in debug builds).
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        debug_assert!(
            rect.width() > 0.0 && rect.height() > 0.0,
            "viewport rect must have positive extent"
        );
        Self { rect }
    }

    /// Returns the viewport rectangle in device coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The window→device mapping for the given view window.
    ///
    /// Window-space coordinates are normalized by the window bounds into
    /// `[0, 1]²` and scaled onto the viewport rectangle, flipping Y: window
    /// space is Y-up, device space is Y-down, so the window's bottom edge
    /// lands on the viewport's maximum-Y edge.
    ///
    /// The window bounds invariant (positive extent) makes the divisions
    /// well-defined; this mapper does not guard against a degenerate window.
    #[must_use]
    pub fn window_to_device(&self, window: &ViewWindow) -> Affine {
        let w = window.bounds();
        let sx = self.rect.width() / w.width();
        let sy = self.rect.height() / w.height();
        Affine::translate((self.rect.x0, self.rect.y1))
            * Affine::scale_non_uniform(sx, -sy)
            * Affine::translate((-w.x0, -w.y0))
    }
}

impl Default for Viewport {
    /// An `800 × 600` viewport with its minimum corner at the origin.
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 800.0, 600.0))
    }
}
