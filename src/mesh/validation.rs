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
use crate::impl_mesh;
use crate::kernel::in_circle;

impl_mesh! {
    /// Check incidence and adjacency.
    ///
    /// Every vertex's `incident_face` must list it as a corner, every
    /// neighbor relation must be symmetric, and two neighbors must agree on
    /// the shared edge (traversed in opposite directions).
    pub fn integrity_check(&self) -> Result<()> {
        for (v, vertex) in self.vertices.iter().enumerate() {
            self.check_face(vertex.incident_face)?;
            if !self.faces[vertex.incident_face].contains(v) {
                return Err(MeshError::VertexNotIncident { vertex: v, face: vertex.incident_face });
            }
        }

        for (f, face) in self.faces.iter().enumerate() {
            for &v in &face.vertices {
                self.check_vertex(v)?;
            }
            for slot in 0..3 {
                let g = face.neighbors[slot];
                self.check_face(g)?;
                let other = &self.faces[g];
                let back = other.edge_to(f).ok_or(MeshError::AsymmetricNeighbor {
                    face: f,
                    slot,
                    neighbor: g,
                })?;
                let (u, w) = face.edge(slot);
                if other.edge(back) != (w, u) {
                    return Err(MeshError::AsymmetricNeighbor { face: f, slot, neighbor: g });
                }
            }
        }
        Ok(())
    }

    /// No finite face may strictly contain, in its circumcircle, the far
    /// vertex of a finite neighbor.
    pub fn delaunay_check(&self) -> Result<()> {
        for f in self.finite_faces() {
            let face = &self.faces[f];
            let [a, b, c] = face.vertices;
            for slot in 0..3 {
                let g = face.neighbors[slot];
                if self.is_infinite_face(g) {
                    continue;
                }
                let other = &self.faces[g];
                let back = other.edge_to(f).ok_or(MeshError::AsymmetricNeighbor {
                    face: f,
                    slot,
                    neighbor: g,
                })?;
                let d = other.vertices[back];
                if in_circle(self.position(d), self.position(a), self.position(b), self.position(c)) {
                    return Err(MeshError::DelaunayViolation { face: f, vertex: d });
                }
            }
        }
        Ok(())
    }
}
