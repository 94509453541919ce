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

use crate::error::{MeshError, Result};
use crate::geometry::{Vector3, VectorOps};
use crate::impl_mesh;

impl_mesh! {
    /// Faces around `v`, counter-clockwise, starting at its incident face.
    pub fn neighboring_faces_of_vertex(&self, v: usize) -> Result<Vec<usize>> {
        self.check_vertex(v)?;
        let start = self.vertices[v].incident_face;
        self.check_face(start)?;

        let mut ring = Vec::with_capacity(8);
        let mut current = start;
        loop {
            ring.push(current);
            let li = self.expect_local_index(v, current)?;
            current = self.faces[current].neighbors[(li + 1) % 3];
            if current == start {
                return Ok(ring);
            }
            if ring.len() > self.faces.len() {
                return Err(MeshError::BrokenRing { vertex: v, steps: ring.len() });
            }
        }
    }

    /// One-ring of `v`, counter-clockwise. Entry `k` is the vertex following
    /// `v` in the `k`-th face of [`Self::neighboring_faces_of_vertex`], so
    /// consecutive entries span a face with `v`.
    pub fn neighboring_vertices_of_vertex(&self, v: usize) -> Result<Vec<usize>> {
        let faces = self.neighboring_faces_of_vertex(v)?;
        faces
            .iter()
            .map(|&f| {
                let li = self.expect_local_index(v, f)?;
                Ok(self.faces[f].vertices[(li + 1) % 3])
            })
            .collect()
    }

    pub fn neighboring_faces_of_face(&self, f: usize) -> Result<[usize; 3]> {
        Ok(self.face(f)?.neighbors)
    }

    /// Vertices shared by `v`'s ring and an infinite face mark the hull.
    pub fn is_hull_vertex(&self, v: usize) -> Result<bool> {
        Ok(self
            .neighboring_faces_of_vertex(v)?
            .iter()
            .any(|&f| self.is_infinite_face(f)))
    }

    /// Area of a finite face, in 3D. Infinite faces have no area and
    /// report 0.
    pub fn face_area(&self, f: usize) -> Result<T> {
        self.check_face(f)?;
        if self.is_infinite_face(f) {
            return Ok(T::zero());
        }
        Ok(T::half() * self.face_cross(f).norm())
    }

    /// Unit normal of a finite face.
    pub fn face_normal(&self, f: usize) -> Result<Vector3<T>> {
        self.check_face(f)?;
        if self.is_infinite_face(f) {
            return Err(MeshError::InfiniteFace { face: f, operation: "measured" });
        }
        Ok(self.face_cross(f).normalized())
    }

    /// One third of the area of the finite faces around `v`.
    pub fn patch_area(&self, v: usize) -> Result<T> {
        let mut area = T::zero();
        for f in self.neighboring_faces_of_vertex(v)? {
            area = area + self.face_area(f)?;
        }
        Ok(area / T::from_f64(3.0))
    }

    fn face_cross(&self, f: usize) -> Vector3<T> {
        let [a, b, c] = self.faces[f].vertices;
        let p0 = self.position(a);
        let u = p0.vector_to(self.position(b));
        let w = p0.vector_to(self.position(c));
        u.cross(&w)
    }
}
