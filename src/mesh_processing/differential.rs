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

//! Discrete differential operators on the one-ring.
//!
//! The cotangent Laplacian of a quantity `u` at vertex `i` is
//! `Σ (cot α_j + cot β_j)(u_j − u_i) / (2 · patch_area(i))`, where `α_j` and
//! `β_j` are the angles opposite edge `(i, j)` in the two faces sharing it.
//! The point at infinity is never a centre; ring terms reaching it drop out.

use tracing::warn;

use crate::config::DiffusionScheme;
use crate::error::{MeshError, Result};
use crate::geometry::{Vector3, VectorOps};
use crate::impl_mesh;
use crate::kernel::cotan;

/// One weighted ring edge: neighbor index and `cot α + cot β`.
struct RingWeight<T> {
    vertex: usize,
    weight: T,
}

impl_mesh! {
    fn ring_weights(&self, v: usize) -> Result<Vec<RingWeight<T>>> {
        let ring = self.neighboring_vertices_of_vertex(v)?;
        let n = ring.len();
        let center = self.position(v);

        let mut weights = Vec::with_capacity(n);
        for j in 1..=n {
            let jv = ring[j % n];
            if self.is_infinite_vertex(jv) {
                continue;
            }
            let prev = ring[j - 1];
            let next = ring[(j + 1) % n];
            let pj = self.position(jv);

            let cot_alpha = if self.is_infinite_vertex(prev) {
                T::zero()
            } else {
                let pp = self.position(prev);
                cotan(&pp.vector_to(pj), &pp.vector_to(center))
            };
            let cot_beta = if self.is_infinite_vertex(next) {
                T::zero()
            } else {
                let pn = self.position(next);
                cotan(&pn.vector_to(center), &pn.vector_to(pj))
            };

            weights.push(RingWeight { vertex: jv, weight: cot_alpha + cot_beta });
        }
        Ok(weights)
    }

    /// Cotangent Laplacian of the value overlay at `v`. Zero at the point at
    /// infinity and at vertices with no finite area around them.
    pub fn laplacian_at(&self, v: usize) -> Result<T> {
        self.check_vertex(v)?;
        if self.is_infinite_vertex(v) {
            return Ok(T::zero());
        }
        let area = self.patch_area(v)?;
        if area == T::zero() {
            return Ok(T::zero());
        }

        let ui = self.values[v];
        let sum = self
            .ring_weights(v)?
            .into_iter()
            .fold(T::zero(), |acc, rw| acc + rw.weight * (self.values[rw.vertex] - ui));
        Ok(sum / (T::from_f64(2.0) * area))
    }

    /// Cotangent Laplacian of the vertex positions at `v`.
    pub fn laplacian_vector(&self, v: usize) -> Result<Vector3<T>> {
        self.check_vertex(v)?;
        if self.is_infinite_vertex(v) {
            return Ok(Vector3::zero());
        }
        let area = self.patch_area(v)?;
        if area == T::zero() {
            return Ok(Vector3::zero());
        }

        let pi = self.position(v);
        let mut sum = Vector3::zero();
        for rw in self.ring_weights(v)? {
            sum += pi.vector_to(self.position(rw.vertex)).scale(rw.weight);
        }
        Ok(sum / (T::from_f64(2.0) * area))
    }

    /// Replace every finite vertex value by its Laplacian.
    ///
    /// Every Laplacian is computed from the values as they were before the
    /// call, whatever [`MeshConfig::diffusion`](crate::config::MeshConfig) says.
    pub fn laplacian(&mut self) -> Result<()> {
        self.sweep(DiffusionScheme::Synchronous, |mesh, v| mesh.laplacian_at(v))
    }

    /// One explicit Euler step of `∂u/∂t = Δu` over all finite vertices.
    /// Read order follows [`MeshConfig::diffusion`](crate::config::MeshConfig).
    pub fn heat_diffusion(&mut self, dt: T) -> Result<()> {
        let scheme = self.config.diffusion;
        self.sweep(scheme, |mesh, v| Ok(mesh.values[v] + dt * mesh.laplacian_at(v)?))
    }

    /// Explicit Euler step at a single vertex.
    pub fn heat_diffusion_at(&mut self, v: usize, dt: T) -> Result<()> {
        let delta = dt * self.laplacian_at(v)?;
        self.values[v] = self.values[v] + delta;
        Ok(())
    }

    fn sweep<F>(&mut self, scheme: DiffusionScheme, update: F) -> Result<()>
    where
        F: Fn(&Self, usize) -> Result<T>,
    {
        let finite: Vec<usize> = self.finite_vertices().collect();
        match scheme {
            DiffusionScheme::InPlace => {
                for v in finite {
                    let value = update(self, v)?;
                    self.values[v] = value;
                }
            }
            DiffusionScheme::Synchronous => {
                let next = finite
                    .iter()
                    .map(|&v| update(self, v))
                    .collect::<Result<Vec<T>>>()?;
                for (v, value) in finite.into_iter().zip(next) {
                    self.values[v] = value;
                }
            }
        }
        Ok(())
    }

    /// Set each finite vertex normal to its unit Laplacian vector, flipped
    /// to agree with a neighboring face normal, and store the Laplacian
    /// magnitude in the curvature overlay.
    pub fn smooth_normals(&mut self) -> Result<()> {
        let finite: Vec<usize> = self.finite_vertices().collect();
        for v in finite {
            let lv = self.laplacian_vector(v)?;
            let Some(face) = self
                .neighboring_faces_of_vertex(v)?
                .into_iter()
                .find(|&f| !self.is_infinite_face(f))
            else {
                continue;
            };
            let oriented = if self.face_normal(face)?.dot(&lv) < T::zero() { -lv } else { lv };

            self.curvature[v] = oriented.norm();
            self.normals[v] = oriented.normalized();
        }
        Ok(())
    }

    /// Normalise the curvature overlay by its maximum.
    pub fn curvature(&mut self) -> Result<()> {
        let max = self.curvature.iter().copied().fold(T::zero(), T::max);
        if max == T::zero() {
            warn!("curvature overlay is zero, run smooth_normals on a curved mesh first");
            return Err(MeshError::FlatCurvature);
        }
        for c in &mut self.curvature {
            *c = *c / max;
        }
        Ok(())
    }

    pub fn vertex_value(&self, v: usize) -> Result<T> {
        self.check_vertex(v)?;
        Ok(self.values[v])
    }

    pub fn set_vertex_value(&mut self, v: usize, value: T) -> Result<()> {
        self.check_vertex(v)?;
        self.values[v] = value;
        Ok(())
    }

    /// Overwrite the whole value overlay. `values` must hold one entry per
    /// vertex.
    pub fn set_values(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.vertices.len() {
            return Err(MeshError::invalid_param(
                "values",
                values.len(),
                "length must match the vertex count",
            ));
        }
        self.values.copy_from_slice(values);
        Ok(())
    }

    pub fn reset_values(&mut self) {
        self.values.iter_mut().for_each(|x| *x = T::zero());
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn curvatures(&self) -> &[T] {
        &self.curvature
    }

    pub fn normals(&self) -> &[Vector3<T>] {
        &self.normals
    }
}
