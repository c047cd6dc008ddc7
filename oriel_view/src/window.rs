// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Rotatable world-space view window.
///
/// The window is a rectangle `bounds` plus a rotation `angle` (degrees,
/// counter-clockwise) about the rectangle's center. Panning moves the
/// bounds along the window's own axes, rotation spins the window in place,
/// and zooming scales the bounds about the center.
///
/// [`ViewWindow::world_to_window`] produces the composite transform that
/// counter-rotates the world so the window appears axis-aligned; in that
/// window-projection space the clip rectangle is simply [`ViewWindow::bounds`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    bounds: Rect,
    angle: f64,
}

impl ViewWindow {
    /// Creates an unrotated window over `bounds`.
    ///
    /// `bounds` must have positive width and height; degenerate windows are
    /// a caller error (checked in debug builds).
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        debug_assert!(
            bounds.width() > 0.0 && bounds.height() > 0.0,
            "view window bounds must have positive extent"
        );
        Self { bounds, angle: 0.0 }
    }

    /// Returns the window bounds in world coordinates.
    ///
    /// In window-projection space the same rectangle is the clip region.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replaces the window bounds, keeping the current rotation.
    pub fn set_bounds(&mut self, bounds: Rect) {
        debug_assert!(
            bounds.width() > 0.0 && bounds.height() > 0.0,
            "view window bounds must have positive extent"
        );
        self.bounds = bounds;
    }

    /// Returns the window center.
    ///
    /// Derived from the bounds, so it is always consistent with them.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Returns the window rotation in degrees, normalized to `[0, 360)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Pans the window by `delta`, expressed along the window's own axes.
    ///
    /// The delta is rotated by the current window angle before being applied
    /// to the bounds, so "up" always moves toward the top edge of the view
    /// as the user sees it.
    pub fn pan(&mut self, delta: Vec2) {
        let rotated = Affine::rotate(self.angle.to_radians()) * delta.to_point();
        self.bounds = self.bounds + rotated.to_vec2();
    }

    /// Rotates the window by `degrees` (counter-clockwise positive) about
    /// its center, normalizing the stored angle into `[0, 360)`.
    pub fn rotate_by(&mut self, degrees: f64) {
        let mut angle = (self.angle + degrees) % 360.0;
        if angle < 0.0 {
            angle += 360.0;
        }
        self.angle = angle;
    }

    /// Scales the window's width and height by `factor` about its center.
    ///
    /// A factor below `1.0` shrinks the window and therefore zooms in; a
    /// factor above `1.0` zooms out. Non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let center = self.center();
        let half_width = self.bounds.width() * factor / 2.0;
        let half_height = self.bounds.height() * factor / 2.0;
        self.bounds = Rect::new(
            center.x - half_width,
            center.y - half_height,
            center.x + half_width,
            center.y + half_height,
        );
    }

    /// The composite world→window transform.
    ///
    /// `T(center) · R(−angle) · T(−center)`: translate the center to the
    /// origin, counter-rotate the world so the rotated window appears
    /// axis-aligned, translate back. Applying this to every primitive puts
    /// the scene in the space where [`ViewWindow::bounds`] is the clip
    /// rectangle.
    #[must_use]
    pub fn world_to_window(&self) -> Affine {
        let center = self.center().to_vec2();
        Affine::translate(center)
            * Affine::rotate(-self.angle.to_radians())
            * Affine::translate(-center)
    }

    /// Snapshot of the window state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewWindowDebugInfo {
        ViewWindowDebugInfo {
            bounds: self.bounds,
            center: self.center(),
            angle: self.angle,
        }
    }
}

impl Default for ViewWindow {
    /// A `10 × 7.5` window with its minimum corner at the origin.
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 10.0, 7.5))
    }
}

/// Debug snapshot of a [`ViewWindow`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewWindowDebugInfo {
    /// Window bounds in world coordinates.
    pub bounds: Rect,
    /// Window center, derived from the bounds.
    pub center: Point,
    /// Rotation in degrees, in `[0, 360)`.
    pub angle: f64,
}
