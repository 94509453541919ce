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

use crate::config::MeshConfig;
use crate::error::{MeshError, Result};
use crate::geometry::{Point3, Vector3};
use crate::impl_mesh;
use crate::mesh::basic_types::{Face, Mesh, TriangulationState, Vertex};
use crate::numeric::scalar::Scalar;

impl<T: Scalar> Default for Mesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl_mesh! {
    pub fn new() -> Self {
        Self::with_config(MeshConfig::default())
    }

    pub fn with_config(config: MeshConfig) -> Self {
        Mesh {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: Vec::new(),
            values: Vec::new(),
            curvature: Vec::new(),
            state: TriangulationState::Empty,
            config,
        }
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MeshConfig) {
        self.config = config;
    }

    pub fn state(&self) -> TriangulationState {
        self.state
    }

    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex(&self, v: usize) -> Result<&Vertex<T>> {
        self.vertices.get(v).ok_or(MeshError::InvalidVertexIndex {
            vertex: v,
            count: self.vertices.len(),
        })
    }

    pub fn face(&self, f: usize) -> Result<&Face> {
        self.faces.get(f).ok_or(MeshError::InvalidFaceIndex {
            face: f,
            count: self.faces.len(),
        })
    }

    #[inline]
    pub fn position(&self, v: usize) -> &Point3<T> {
        &self.vertices[v].position
    }

    /// Drop all vertices, faces and overlays. Indices handed out before are
    /// invalid afterwards.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.normals.clear();
        self.values.clear();
        self.curvature.clear();
        self.state = TriangulationState::Empty;
    }

    /// Slot of `vertex` inside `face`, `None` if it is not a corner.
    pub fn local_index(&self, vertex: usize, face: usize) -> Option<usize> {
        self.faces.get(face)?.slot_of(vertex)
    }

    pub(crate) fn expect_local_index(&self, vertex: usize, face: usize) -> Result<usize> {
        self.local_index(vertex, face)
            .ok_or(MeshError::VertexNotIncident { vertex, face })
    }

    /// Point the neighbor slot of `face` that holds `old` at `new`.
    pub fn change_neighbor(&mut self, face: usize, old: usize, new: usize) -> Result<()> {
        self.face(face)?;
        if self.faces[face].change_neighbor(old, new) {
            Ok(())
        } else {
            Err(MeshError::NotNeighbors {
                face,
                neighbor: old,
            })
        }
    }

    #[inline]
    pub fn is_infinite_vertex(&self, v: usize) -> bool {
        self.vertices[v].is_infinite()
    }

    /// A face is infinite when one of its corners is the point at infinity.
    #[inline]
    pub fn is_infinite_face(&self, f: usize) -> bool {
        self.faces[f]
            .vertices
            .iter()
            .any(|&v| self.vertices[v].is_infinite())
    }

    pub fn finite_faces(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.faces.len()).filter(|&f| !self.is_infinite_face(f))
    }

    pub fn finite_face_count(&self) -> usize {
        self.finite_faces().count()
    }

    /// Number of hull edges, which is also the number of hull vertices.
    pub fn hull_size(&self) -> usize {
        self.faces.len() - self.finite_face_count()
    }

    pub fn finite_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertices.len()).filter(|&v| !self.vertices[v].is_infinite())
    }

    pub(crate) fn push_vertex(&mut self, vertex: Vertex<T>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(vertex);
        self.normals.push(Vector3::unit_z());
        self.values.push(T::zero());
        self.curvature.push(T::zero());
        idx
    }

    pub(crate) fn push_face(&mut self, face: Face) -> usize {
        let idx = self.faces.len();
        self.faces.push(face);
        idx
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<()> {
        self.vertex(v).map(|_| ())
    }

    pub(crate) fn check_face(&self, f: usize) -> Result<()> {
        self.face(f).map(|_| ())
    }
}
