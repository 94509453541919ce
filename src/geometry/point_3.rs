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

use std::ops::{Add, Sub};

use crate::geometry::vector_3::Vector3;
use crate::numeric::scalar::Scalar;

/// A vertex position. Planar predicates only read `x` and `y`; `z` rides
/// along as payload (height, sample value, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Point on the `z = 0` plane.
    pub fn planar(x: T, y: T) -> Self {
        Self { x, y, z: T::zero() }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn from_vals(vals: [f64; 3]) -> Self {
        Self::new(
            T::from_f64(vals[0]),
            T::from_f64(vals[1]),
            T::from_f64(vals[2]),
        )
    }

    /// Vector going from `self` to `other`.
    #[inline]
    pub fn vector_to(&self, other: &Point3<T>) -> Vector3<T> {
        Vector3::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    #[inline]
    pub fn as_vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn coords(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Exact XY coincidence.
    pub fn same_xy(&self, other: &Point3<T>) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;
    fn add(self, rhs: Vector3<T>) -> Point3<T> {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: Point3<T>) -> Vector3<T> {
        rhs.vector_to(&self)
    }
}

