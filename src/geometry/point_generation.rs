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

//! Random point sets for seeding triangulations, benchmarks and tests.
//!
//! Uniform samples are in general position with probability one, which is
//! exactly what the floating-point predicates assume.

use rand::{Rng, SeedableRng};

use crate::error::{MeshError, Result};
use crate::geometry::point_3::Point3;
use crate::numeric::scalar::Scalar;

/// Coordinate ranges for generated points. `z` is payload only; a
/// zero-width range keeps every point on the `z = z.0` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

impl PointBounds {
    /// Square `[min, max]²` on the `z = 0` plane.
    pub fn square(min: f64, max: f64) -> Self {
        Self {
            x: (min, max),
            y: (min, max),
            z: (0.0, 0.0),
        }
    }

    pub fn with_z(mut self, min: f64, max: f64) -> Self {
        self.z = (min, max);
        self
    }

    fn validate(&self) -> Result<()> {
        for (name, (lo, hi)) in [("x", self.x), ("y", self.y)] {
            if !(lo < hi) {
                return Err(MeshError::invalid_param(
                    name,
                    format!("{lo}..{hi}"),
                    "range must be non-empty",
                ));
            }
        }
        if !(self.z.0 <= self.z.1) {
            return Err(MeshError::invalid_param(
                "z",
                format!("{}..{}", self.z.0, self.z.1),
                "range must not be reversed",
            ));
        }
        Ok(())
    }
}

fn sample<T: Scalar, R: Rng>(rng: &mut R, n_points: usize, bounds: &PointBounds) -> Vec<Point3<T>> {
    let mut points = Vec::with_capacity(n_points);
    for _ in 0..n_points {
        let x = rng.random_range(bounds.x.0..bounds.x.1);
        let y = rng.random_range(bounds.y.0..bounds.y.1);
        let z = if bounds.z.0 < bounds.z.1 {
            rng.random_range(bounds.z.0..bounds.z.1)
        } else {
            bounds.z.0
        };
        points.push(Point3::from_vals([x, y, z]));
    }
    points
}

/// Uniform random points from the thread-local generator.
pub fn generate_random_points<T: Scalar>(
    n_points: usize,
    bounds: PointBounds,
) -> Result<Vec<Point3<T>>> {
    bounds.validate()?;
    let mut rng = rand::rng();
    Ok(sample(&mut rng, n_points, &bounds))
}

/// Same as [`generate_random_points`] but reproducible for a given seed.
pub fn generate_random_points_seeded<T: Scalar>(
    n_points: usize,
    bounds: PointBounds,
    seed: u64,
) -> Result<Vec<Point3<T>>> {
    bounds.validate()?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Ok(sample(&mut rng, n_points, &bounds))
}
