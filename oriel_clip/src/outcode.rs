// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region codes for points relative to an axis-aligned rectangle.

use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// 4-bit region classification of a point relative to a rectangle.
    ///
    /// An empty code means the point is inside (boundary included). The
    /// horizontal bits are mutually exclusive, as are the vertical bits.
    /// `BOTTOM`/`TOP` refer to window space, which is Y-up: `BOTTOM` is
    /// `y < rect.y0` and `TOP` is `y > rect.y1`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Outcode: u8 {
        /// `x < rect.x0`.
        const LEFT = 0b0001;
        /// `x > rect.x1`.
        const RIGHT = 0b0010;
        /// `y < rect.y0`.
        const BOTTOM = 0b0100;
        /// `y > rect.y1`.
        const TOP = 0b1000;
    }
}

impl Outcode {
    /// Classifies `pt` relative to `rect`.
    #[must_use]
    pub fn classify(pt: Point, rect: Rect) -> Self {
        let mut code = Self::empty();
        if pt.x < rect.x0 {
            code |= Self::LEFT;
        } else if pt.x > rect.x1 {
            code |= Self::RIGHT;
        }
        if pt.y < rect.y0 {
            code |= Self::BOTTOM;
        } else if pt.y > rect.y1 {
            code |= Self::TOP;
        }
        code
    }

    /// Returns true if the classified point was inside the rectangle.
    #[must_use]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}
