// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use approx::assert_relative_eq;
use lawson::geometry::point_generation::{PointBounds, generate_random_points_seeded};
use lawson::kernel::{
    Orientation, TrianglePosition, circumcircle, in_circle, in_triangle, intersected_edge,
    orientation,
};
use lawson::{Point3, VectorOps};

fn p(x: f64, y: f64) -> Point3<f64> {
    Point3::planar(x, y)
}

#[test]
fn test_orientation_ignores_z() {
    let a = Point3::new(0.0, 0.0, 5.0);
    let b = Point3::new(1.0, 0.0, -3.0);
    let c = Point3::new(0.0, 1.0, 100.0);
    assert_eq!(orientation(&a, &b, &c), Orientation::CounterClockwise);
    assert_eq!(orientation(&a, &c, &b), Orientation::Clockwise);
    assert_eq!(orientation(&a, &b, &p(2.0, 0.0)), Orientation::Collinear);
    assert!(orientation(&a, &b, &c).is_ccw());
    assert!(orientation(&a, &c, &b).is_cw());
    let flat = orientation(&a, &b, &p(2.0, 0.0));
    assert!(!flat.is_ccw() && !flat.is_cw());
}

#[test]
fn test_in_triangle_is_rotation_consistent() {
    let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    let on_ab = p(2.0, 0.0);
    assert_eq!(in_triangle(&on_ab, &a, &b, &c), TrianglePosition::OnEdge(2));
    // rotating the corners moves the reported edge with them
    assert_eq!(in_triangle(&on_ab, &b, &c, &a), TrianglePosition::OnEdge(1));
    assert_eq!(in_triangle(&on_ab, &c, &a, &b), TrianglePosition::OnEdge(0));
}

#[test]
fn test_corner_is_outside() {
    let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    assert_eq!(in_triangle(&a, &a, &b, &c), TrianglePosition::Outside);
    assert_eq!(in_triangle(&p(5.0, 0.0), &a, &b, &c), TrianglePosition::Outside);
}

#[test]
fn test_in_circle_matches_circumcircle() {
    let pts: Vec<Point3<f64>> =
        generate_random_points_seeded(64, PointBounds::square(-5.0, 5.0), 11).unwrap();

    for w in pts.windows(4) {
        let (mut a, mut b, c, d) = (w[0], w[1], w[2], w[3]);
        match orientation(&a, &b, &c) {
            Orientation::Collinear => continue,
            Orientation::Clockwise => std::mem::swap(&mut a, &mut b),
            Orientation::CounterClockwise => {}
        }
        let (center, r) = circumcircle(&a, &b, &c).unwrap();
        let dist = center.vector_to(&d).norm();
        if (dist - r).abs() < 1e-9 {
            continue;
        }
        assert_eq!(in_circle(&d, &a, &b, &c), dist < r);
    }
}

#[test]
fn test_circumcircle_passes_through_corners() {
    let (a, b, c) = (p(1.0, 2.0), p(4.0, -1.0), p(-2.0, 0.5));
    let (center, r) = circumcircle(&a, &b, &c).unwrap();
    for q in [a, b, c] {
        assert_relative_eq!(center.vector_to(&q).norm(), r, epsilon = 1e-10);
    }
}

#[test]
fn test_segment_leaving_triangle() {
    let (c, d, e) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    let inside = p(1.0, 1.0);
    assert_eq!(intersected_edge(&inside, &p(2.0, -3.0), &c, &d, &e), Some(2));
    assert_eq!(intersected_edge(&inside, &p(-3.0, 2.0), &c, &d, &e), Some(1));
    assert_eq!(intersected_edge(&inside, &p(1.5, 1.5), &c, &d, &e), None);
}
