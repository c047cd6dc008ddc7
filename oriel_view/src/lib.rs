// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oriel View: the view window and viewport of the viewing pipeline.
//!
//! This crate provides small, headless models of the two rectangles the
//! pipeline maps between:
//!
//! - [`ViewWindow`] — the rotatable world-space rectangle being viewed, with
//!   pan/rotate/zoom operations and the composite world→window transform.
//! - [`Viewport`] — the device-space target rectangle, with the
//!   window→device mapping (including the vertical flip from Y-up window
//!   space to Y-down device space).
//!
//! It does **not** clip, own scene data, or render. Callers are expected to:
//! - Wire user input (buttons, gestures) into [`ViewWindow::pan`],
//!   [`ViewWindow::rotate_by`], and [`ViewWindow::zoom_by`] at a higher
//!   layer.
//! - Re-run the pipeline (`oriel_pipeline`) after any view change.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use oriel_view::{ViewWindow, Viewport};
//!
//! let mut window = ViewWindow::new(Rect::new(0.0, 0.0, 10.0, 7.5));
//! window.pan(Vec2::new(1.0, 0.0));
//! window.rotate_by(15.0);
//! window.zoom_by(0.9); // zoom in
//!
//! // World → window-projection space.
//! let projected = window.world_to_window() * Point::new(3.0, 4.0);
//!
//! // Window-projection space → device pixels.
//! let viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let device = viewport.window_to_device(&window) * projected;
//! # let _ = device;
//! ```
//!
//! ## Design notes
//!
//! - The window's `center` is derived from its bounds on demand, so it can
//!   never disagree with them.
//! - The rotation angle is kept in degrees and normalized to `[0, 360)` for
//!   display; the transform math is insensitive to the normalization.
//! - Degenerate windows and viewports (non-positive width or height) are a
//!   caller error, asserted in debug builds only.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;
mod window;

pub use viewport::Viewport;
pub use window::{ViewWindow, ViewWindowDebugInfo};
