// Copyright 2026 the Oriel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the Oriel clipping engine.
//!
//! Inputs are deterministic: line segments are drawn from a lattice of
//! endpoints spanning inside, outside, and boundary positions relative to a
//! fixed window, and the polygon set mixes contained, overhanging, and
//! fully-outside rings. This keeps runs comparable across machines without
//! an input corpus.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Line, Point, Rect};
use oriel_clip::{LineClip, LineClipAlgorithm, sutherland_hodgman};

const WINDOW: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

fn segment_lattice() -> Vec<Line> {
    let coords = [-50.0, -10.0, 0.0, 25.0, 50.0, 100.0, 130.0, 170.0];
    let mut endpoints = Vec::new();
    for &x in &coords {
        for &y in &coords {
            endpoints.push(Point::new(x, y));
        }
    }
    let mut segments = Vec::new();
    for &p0 in &endpoints {
        for &p1 in &endpoints {
            segments.push(Line::new(p0, p1));
        }
    }
    segments
}

fn polygon_set() -> Vec<Vec<Point>> {
    vec![
        // Contained triangle.
        vec![
            Point::new(20.0, 20.0),
            Point::new(80.0, 20.0),
            Point::new(50.0, 80.0),
        ],
        // Diamond overhanging all four edges.
        vec![
            Point::new(-20.0, 50.0),
            Point::new(50.0, 120.0),
            Point::new(120.0, 50.0),
            Point::new(50.0, -20.0),
        ],
        // Fully outside square.
        vec![
            Point::new(200.0, 200.0),
            Point::new(300.0, 200.0),
            Point::new(300.0, 300.0),
            Point::new(200.0, 300.0),
        ],
        // Concave comb crossing the top edge.
        vec![
            Point::new(10.0, 10.0),
            Point::new(90.0, 10.0),
            Point::new(90.0, 140.0),
            Point::new(70.0, 140.0),
            Point::new(70.0, 40.0),
            Point::new(50.0, 40.0),
            Point::new(50.0, 140.0),
            Point::new(30.0, 140.0),
            Point::new(30.0, 40.0),
            Point::new(10.0, 40.0),
        ],
    ]
}

fn bench_line_clippers(c: &mut Criterion) {
    let segments = segment_lattice();
    let mut group = c.benchmark_group("line_clip");
    for algorithm in [
        LineClipAlgorithm::CohenSutherland,
        LineClipAlgorithm::LiangBarsky,
    ] {
        group.bench_function(format!("{algorithm:?}"), |b| {
            let clipper = algorithm.clipper();
            b.iter(|| {
                segments
                    .iter()
                    .filter(|&&line| clipper.clip_line(black_box(line), WINDOW).is_some())
                    .count()
            });
        });
    }
    group.finish();
}

fn bench_polygon_clipper(c: &mut Criterion) {
    let polygons = polygon_set();
    c.bench_function("polygon_clip/sutherland_hodgman", |b| {
        b.iter(|| {
            polygons
                .iter()
                .map(|ring| sutherland_hodgman::clip_polygon(black_box(ring), WINDOW).len())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, bench_line_clippers, bench_polygon_clipper);
criterion_main!(benches);
