// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential half-plane (Sutherland–Hodgman) polygon clipping.
//!
//! The working vertex list is clipped against one window boundary at a time,
//! in a fixed left, right, bottom, top order, feeding each result into the
//! next boundary. This is exact only because the clip region is convex; it
//! must not be reused against non-convex clip regions.
//!
//! The result is a list of output polygons so the contract also covers
//! algorithms that can split a concave input into several pieces; this
//! implementation produces at most one. Pieces are reported as produced — a
//! polygon grazing a window corner can legitimately come out with fewer than
//! three vertices.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// Inline capacity for working vertex lists. Clipping against four
/// half-planes can add at most one vertex per boundary beyond the input
/// count, so small polygons stay off the heap.
type VertexList = SmallVec<[Point; 8]>;

#[derive(Clone, Copy)]
enum Boundary {
    Left,
    Right,
    Bottom,
    Top,
}

impl Boundary {
    /// Clip order used by the window clipper.
    const SEQUENCE: [Self; 4] = [Self::Left, Self::Right, Self::Bottom, Self::Top];

    /// Inclusive inside-test for this boundary's half-plane, matching the
    /// point visibility test on the window edge.
    fn is_inside(self, pt: Point, rect: Rect) -> bool {
        match self {
            Self::Left => pt.x >= rect.x0,
            Self::Right => pt.x <= rect.x1,
            Self::Bottom => pt.y >= rect.y0,
            Self::Top => pt.y <= rect.y1,
        }
    }

    /// Intersection of edge `p0 -> p1` with this boundary's infinite line.
    ///
    /// Returns `None` for edges parallel to the boundary (zero denominator);
    /// such edges contribute no intersection point.
    fn intersect(self, p0: Point, p1: Point, rect: Rect) -> Option<Point> {
        match self {
            Self::Left | Self::Right => {
                let dx = p1.x - p0.x;
                if dx == 0.0 {
                    return None;
                }
                let edge = match self {
                    Self::Left => rect.x0,
                    _ => rect.x1,
                };
                let t = (edge - p0.x) / dx;
                Some(Point::new(edge, p0.y + t * (p1.y - p0.y)))
            }
            Self::Bottom | Self::Top => {
                let dy = p1.y - p0.y;
                if dy == 0.0 {
                    return None;
                }
                let edge = match self {
                    Self::Bottom => rect.y0,
                    _ => rect.y1,
                };
                let t = (edge - p0.y) / dy;
                Some(Point::new(p0.x + t * (p1.x - p0.x), edge))
            }
        }
    }
}

/// Clips a polygon against `rect`, returning its output polygons.
///
/// The list is empty iff the polygon is entirely outside the window (or has
/// fewer than three vertices, a defined degenerate case rather than an
/// error); otherwise it holds exactly one clipped vertex ring.
#[must_use]
pub fn clip_polygon(vertices: &[Point], rect: Rect) -> Vec<Vec<Point>> {
    if vertices.len() < 3 {
        return Vec::new();
    }

    let mut working = VertexList::from_slice(vertices);
    for boundary in Boundary::SEQUENCE {
        working = clip_boundary(&working, boundary, rect);
        if working.is_empty() {
            // Fully clipped; the remaining boundaries cannot resurrect it.
            return Vec::new();
        }
    }

    let mut pieces = Vec::with_capacity(1);
    pieces.push(working.into_vec());
    pieces
}

/// One pass of the edge-clipping rule against a single boundary.
fn clip_boundary(input: &[Point], boundary: Boundary, rect: Rect) -> VertexList {
    let mut output = VertexList::new();
    for (i, &v0) in input.iter().enumerate() {
        let v1 = input[(i + 1) % input.len()];
        let inside0 = boundary.is_inside(v0, rect);
        let inside1 = boundary.is_inside(v1, rect);

        if inside0 && inside1 {
            output.push(v1);
        } else if inside0 {
            // Leaving the half-plane.
            if let Some(crossing) = boundary.intersect(v0, v1, rect) {
                output.push(crossing);
            }
        } else if inside1 {
            // Entering the half-plane.
            if let Some(crossing) = boundary.intersect(v0, v1, rect) {
                output.push(crossing);
            }
            output.push(v1);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{Point, Rect};

    use super::clip_polygon;

    const RECT: Rect = Rect::new(0.0, 0.0, 10.0, 10.0);

    /// True if `actual` equals `expected` up to rotation of the start vertex.
    fn same_ring(actual: &[Point], expected: &[Point]) -> bool {
        if actual.len() != expected.len() {
            return false;
        }
        let n = actual.len();
        (0..n).any(|offset| {
            (0..n).all(|i| {
                let a = actual[(i + offset) % n];
                let e = expected[i];
                (a.x - e.x).abs() < 1e-9 && (a.y - e.y).abs() < 1e-9
            })
        })
    }

    #[test]
    fn contained_polygon_is_returned_unchanged_up_to_rotation() {
        let triangle = vec![
            Point::new(2.0, 2.0),
            Point::new(8.0, 2.0),
            Point::new(5.0, 8.0),
        ];
        let pieces = clip_polygon(&triangle, RECT);
        assert_eq!(pieces.len(), 1, "one output piece expected");
        assert!(same_ring(&pieces[0], &triangle), "got {:?}", pieces[0]);
    }

    #[test]
    fn fully_outside_polygon_clips_to_nothing() {
        let triangle = vec![
            Point::new(20.0, 20.0),
            Point::new(30.0, 20.0),
            Point::new(25.0, 28.0),
        ];
        assert!(clip_polygon(&triangle, RECT).is_empty());
    }

    #[test]
    fn degenerate_input_clips_to_nothing() {
        assert!(clip_polygon(&[], RECT).is_empty());
        assert!(clip_polygon(&[Point::new(5.0, 5.0)], RECT).is_empty());
        let two = [Point::new(1.0, 1.0), Point::new(9.0, 9.0)];
        assert!(clip_polygon(&two, RECT).is_empty());
    }

    #[test]
    fn diamond_overhanging_all_edges_clips_to_an_octagon() {
        let diamond = vec![
            Point::new(-2.0, 5.0),
            Point::new(5.0, 12.0),
            Point::new(12.0, 5.0),
            Point::new(5.0, -2.0),
        ];
        let pieces = clip_polygon(&diamond, RECT);
        assert_eq!(pieces.len(), 1, "one output piece expected");

        let expected = [
            Point::new(0.0, 3.0),
            Point::new(0.0, 7.0),
            Point::new(3.0, 10.0),
            Point::new(7.0, 10.0),
            Point::new(10.0, 7.0),
            Point::new(10.0, 3.0),
            Point::new(7.0, 0.0),
            Point::new(3.0, 0.0),
        ];
        assert!(same_ring(&pieces[0], &expected), "got {:?}", pieces[0]);
    }

    #[test]
    fn overhang_on_one_side_gains_exactly_the_cut_vertices() {
        // Square sticking out past the right edge.
        let square = vec![
            Point::new(5.0, 2.0),
            Point::new(15.0, 2.0),
            Point::new(15.0, 8.0),
            Point::new(5.0, 8.0),
        ];
        let pieces = clip_polygon(&square, RECT);
        assert_eq!(pieces.len(), 1, "one output piece expected");
        let expected = [
            Point::new(5.0, 2.0),
            Point::new(10.0, 2.0),
            Point::new(10.0, 8.0),
            Point::new(5.0, 8.0),
        ];
        assert!(same_ring(&pieces[0], &expected), "got {:?}", pieces[0]);
    }

    #[test]
    fn concave_polygon_stays_a_single_piece() {
        // A "U" whose opening faces up; the window cuts the prongs. True
        // concave splitting is out of contract: one connected ring comes
        // back, boundary-joined along the top edge.
        let u_shape = vec![
            Point::new(2.0, 2.0),
            Point::new(8.0, 2.0),
            Point::new(8.0, 14.0),
            Point::new(6.0, 14.0),
            Point::new(6.0, 4.0),
            Point::new(4.0, 4.0),
            Point::new(4.0, 14.0),
            Point::new(2.0, 14.0),
        ];
        let pieces = clip_polygon(&u_shape, RECT);
        assert_eq!(pieces.len(), 1, "sequential half-plane clipping yields one piece");
        let piece: &Vec<Point> = &pieces[0];
        assert!(
            piece
                .iter()
                .all(|v| v.x >= 0.0 && v.x <= 10.0 && v.y >= 0.0 && v.y <= 10.0),
            "all vertices inside the window, got {piece:?}"
        );
    }

    #[test]
    fn polygon_on_the_boundary_is_kept() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let pieces = clip_polygon(&square, RECT);
        assert_eq!(pieces.len(), 1, "one output piece expected");
        assert!(same_ring(&pieces[0], &square), "got {:?}", pieces[0]);
    }
}
