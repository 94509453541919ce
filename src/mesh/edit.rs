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

//! Local connectivity edits. Each operator rewires both sides of every
//! adjacency it touches and fixes the `incident_face` of every vertex that
//! may have lost its face, so the mesh is consistent again on return.

use crate::error::{MeshError, Result};
use crate::geometry::Point3;
use crate::impl_mesh;
use crate::mesh::basic_types::{Face, SplitResult, Vertex};

impl_mesh! {
    /// Split face `f` into three around a new vertex at `p`.
    ///
    /// `f` keeps corners `a`, `b` and gets the new vertex in place of `c`;
    /// `(b, c, p)` and `(c, a, p)` are appended. `p` is expected strictly
    /// inside `f`, or beyond the hull edge when `f` is infinite.
    pub fn triangle_split(&mut self, p: Point3<T>, f: usize) -> Result<SplitResult> {
        self.check_face(f)?;
        let Face { vertices: [a, b, c], neighbors: [na, nb, nc] } = self.faces[f];

        let v = self.push_vertex(Vertex::finite(p, f));
        let g1 = self.faces.len();
        let g2 = g1 + 1;

        self.faces[f] = Face::new([a, b, v], [g1, g2, nc]);
        self.push_face(Face::new([b, c, v], [g2, f, na]));
        self.push_face(Face::new([c, a, v], [f, g1, nb]));

        self.change_neighbor(na, f, g1)?;
        self.change_neighbor(nb, f, g2)?;

        self.vertices[c].incident_face = g1;
        self.vertices[a].incident_face = f;
        self.vertices[b].incident_face = f;

        Ok(SplitResult { vertex: v, faces: vec![f, g1, g2] })
    }

    /// Split the edge opposite slot `edge` of face `f0` at `p`, which must lie
    /// on that edge. Both incident faces are halved: 2 faces rewritten in
    /// place, 2 appended.
    pub fn edge_split(&mut self, p: Point3<T>, f0: usize, edge: usize) -> Result<SplitResult> {
        self.check_face(f0)?;
        if edge > 2 {
            return Err(MeshError::InvalidLocalEdge { edge });
        }

        let face0 = self.faces[f0];
        let a = face0.vertices[edge];
        let b = face0.vertices[(edge + 1) % 3];
        let c = face0.vertices[(edge + 2) % 3];
        let f1 = face0.neighbors[edge];
        let n_ca = face0.neighbors[(edge + 1) % 3];
        let n_ab = face0.neighbors[(edge + 2) % 3];

        let face1 = self.faces[f1];
        let j = face1.edge_to(f0).ok_or(MeshError::AsymmetricNeighbor {
            face: f0,
            slot: edge,
            neighbor: f1,
        })?;
        let d = face1.vertices[j];
        // face1 runs c -> b across the shared edge
        debug_assert_eq!(face1.edge(j), (c, b));
        let m_bd = face1.neighbors[(j + 1) % 3];
        let m_dc = face1.neighbors[(j + 2) % 3];

        let v = self.push_vertex(Vertex::finite(p, f0));
        let g0 = self.faces.len();
        let g1 = g0 + 1;

        self.faces[f0] = Face::new([a, b, v], [g1, g0, n_ab]);
        self.faces[f1] = Face::new([d, c, v], [g0, g1, m_dc]);
        self.push_face(Face::new([a, v, c], [f1, n_ca, f0]));
        self.push_face(Face::new([d, v, b], [f0, m_bd, f1]));

        self.change_neighbor(n_ca, f0, g0)?;
        self.change_neighbor(m_bd, f1, g1)?;

        self.vertices[a].incident_face = f0;
        self.vertices[b].incident_face = f0;
        self.vertices[c].incident_face = f1;
        self.vertices[d].incident_face = f1;

        Ok(SplitResult { vertex: v, faces: vec![f0, f1, g0, g1] })
    }

    /// Replace the edge opposite slot `edge` of `f0` by the other diagonal of
    /// the quadrilateral formed with its neighbor. Returns that neighbor.
    ///
    /// With `f0 = (a, b, c)` and neighbor `(d, c, b)`, the faces become
    /// `(a, b, d)` and `(a, d, c)`; `a` keeps its slot in `f0`.
    pub fn flip_edge(&mut self, f0: usize, edge: usize) -> Result<usize> {
        self.check_face(f0)?;
        if edge > 2 {
            return Err(MeshError::InvalidLocalEdge { edge });
        }

        let face0 = self.faces[f0];
        let a = face0.vertices[edge];
        let b = face0.vertices[(edge + 1) % 3];
        let c = face0.vertices[(edge + 2) % 3];
        let f1 = face0.neighbors[edge];
        let n_ca = face0.neighbors[(edge + 1) % 3];
        let n_ab = face0.neighbors[(edge + 2) % 3];

        let face1 = self.faces[f1];
        let j = face1.edge_to(f0).ok_or(MeshError::AsymmetricNeighbor {
            face: f0,
            slot: edge,
            neighbor: f1,
        })?;
        let d = face1.vertices[j];
        debug_assert_eq!(face1.edge(j), (c, b));
        let m_bd = face1.neighbors[(j + 1) % 3];
        let m_dc = face1.neighbors[(j + 2) % 3];

        let mut flipped0 = Face::new([0; 3], [0; 3]);
        flipped0.vertices[edge] = a;
        flipped0.vertices[(edge + 1) % 3] = b;
        flipped0.vertices[(edge + 2) % 3] = d;
        flipped0.neighbors[edge] = m_bd;
        flipped0.neighbors[(edge + 1) % 3] = f1;
        flipped0.neighbors[(edge + 2) % 3] = n_ab;

        self.faces[f0] = flipped0;
        self.faces[f1] = Face::new([a, d, c], [m_dc, n_ca, f0]);

        self.change_neighbor(m_bd, f1, f0)?;
        self.change_neighbor(n_ca, f0, f1)?;

        self.vertices[a].incident_face = f0;
        self.vertices[b].incident_face = f0;
        self.vertices[c].incident_face = f1;
        self.vertices[d].incident_face = f1;

        Ok(f1)
    }
}
