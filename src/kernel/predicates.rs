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

use crate::geometry::{Point3, Vector3, VectorOps};
use crate::kernel::orientation::{Orientation, orientation};
use crate::numeric::scalar::Scalar;

/// Where a point sits relative to a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrianglePosition {
    Outside,
    Inside,
    /// On the edge opposite the given corner (0, 1 or 2).
    OnEdge(usize),
}

/// Classify `p` against the counter-clockwise triangle `(a, b, c)`.
pub fn in_triangle<T: Scalar>(
    p: &Point3<T>,
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
) -> TrianglePosition {
    use Orientation::{Collinear as Z, CounterClockwise as P};

    let d_ab = orientation(p, a, b);
    let d_bc = orientation(p, b, c);
    let d_ca = orientation(p, c, a);

    match (d_ab, d_bc, d_ca) {
        (P, P, P) => TrianglePosition::Inside,
        (Z, P, P) => TrianglePosition::OnEdge(2),
        (P, Z, P) => TrianglePosition::OnEdge(0),
        (P, P, Z) => TrianglePosition::OnEdge(1),
        _ => TrianglePosition::Outside,
    }
}

#[inline]
pub fn det2<T: Scalar>(i: T, j: T, k: T, l: T) -> T {
    i * l - j * k
}

/// True iff `p` lies strictly inside the circle through the counter-clockwise
/// triangle `(a, b, c)`.
pub fn in_circle<T: Scalar>(p: &Point3<T>, a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> bool {
    let (adx, ady) = (a.x - p.x, a.y - p.y);
    let (bdx, bdy) = (b.x - p.x, b.y - p.y);
    let (cdx, cdy) = (c.x - p.x, c.y - p.y);

    let ad = adx * adx + ady * ady;
    let bd = bdx * bdx + bdy * bdy;
    let cd = cdx * cdx + cdy * cdy;

    let det = adx * det2(bdy, bd, cdy, cd) - ady * det2(bdx, bd, cdx, cd)
        + ad * det2(bdx, bdy, cdx, cdy);

    det > T::zero()
}

/// Cotangent of the angle between `u` and `v`, or 0 when the angle is flat.
pub fn cotan<T: Scalar>(u: &Vector3<T>, v: &Vector3<T>) -> T {
    let sin_theta = u.cross(v).norm();
    if sin_theta != T::zero() {
        u.dot(v) / sin_theta
    } else {
        T::zero()
    }
}

/// Proper crossing of segments `ab` and `cd` (touching does not count).
pub fn intersect<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> bool {
    orientation(c, a, b).as_sign() * orientation(d, a, b).as_sign() < 0
        && orientation(a, d, c).as_sign() * orientation(b, d, c).as_sign() < 0
}

/// Local index of the edge of triangle `(c, d, e)` crossed by segment `ab`.
pub fn intersected_edge<T: Scalar>(
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    d: &Point3<T>,
    e: &Point3<T>,
) -> Option<usize> {
    if intersect(a, b, c, d) {
        Some(2)
    } else if intersect(a, b, e, c) {
        Some(1)
    } else if intersect(a, b, d, e) {
        Some(0)
    } else {
        None
    }
}

/// Center and radius of the circle through `a`, `b`, `c` (in 3D, so the
/// payload coordinate is honoured). `None` for collinear input.
pub fn circumcircle<T: Scalar>(
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
) -> Option<(Point3<T>, T)> {
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    let n = ab.cross(&ac);
    let n2 = n.dot(&n);
    if n2 == T::zero() {
        return None;
    }

    let two = T::from_f64(2.0);
    let offset = (n.cross(&ab).scale(ac.dot(&ac)) + ac.cross(&n).scale(ab.dot(&ab))) / (two * n2);
    Some((*a + offset, offset.norm()))
}
