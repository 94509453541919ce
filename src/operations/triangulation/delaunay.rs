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

//! Incremental Delaunay insertion on top of the mesh operators.
//!
//! The plane is closed with one vertex at infinity (index 0) so that every
//! hull edge has a face on both sides. Insertion locates the point, splits
//! the face or edge that holds it (or the infinite face fronting it), and
//! restores the empty-circle property with Lawson flips.

use tracing::{debug, info};

use crate::config::ValidationPolicy;
use crate::error::{MeshError, Result};
use crate::geometry::Point3;
use crate::impl_mesh;
use crate::kernel::{Orientation, in_circle, orientation};
use crate::mesh::basic_types::{
    Face, INFINITE_VERTEX, InsertionKind, InsertionReport, Location, TriangulationState, Vertex,
};

impl_mesh! {
    /// Triangulate `points`: the first three seed the mesh, the rest are
    /// inserted in order.
    pub fn from_points(points: &[Point3<T>]) -> Result<Self> {
        let mut mesh = Self::new();
        mesh.insert_many(points, None)?;
        Ok(mesh)
    }

    /// Seed an empty mesh with the point at infinity and the triangle
    /// `(a, b, c)`, reordered to be counter-clockwise.
    ///
    /// Produces vertices `0..4` and faces `0..4`: face 0 is the finite seed
    /// triangle, faces 1 to 3 fan around the point at infinity, one per hull
    /// edge.
    pub fn bootstrap(&mut self, a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Result<()> {
        if self.state != TriangulationState::Empty {
            return Err(MeshError::WrongState {
                expected: TriangulationState::Empty,
                actual: self.state,
            });
        }

        let (b, c) = match orientation(&a, &b, &c) {
            Orientation::CounterClockwise => (b, c),
            Orientation::Clockwise => (c, b),
            Orientation::Collinear => return Err(MeshError::DegenerateSeed),
        };

        self.push_vertex(Vertex::at_infinity(1));
        self.push_vertex(Vertex::finite(a, 0));
        self.push_vertex(Vertex::finite(b, 0));
        self.push_vertex(Vertex::finite(c, 0));

        self.push_face(Face::new([1, 2, 3], [1, 2, 3]));
        self.push_face(Face::new([INFINITE_VERTEX, 3, 2], [0, 3, 2]));
        self.push_face(Face::new([INFINITE_VERTEX, 1, 3], [0, 1, 3]));
        self.push_face(Face::new([INFINITE_VERTEX, 2, 1], [0, 2, 1]));

        self.state = TriangulationState::Bootstrapped;
        debug!(vertices = self.vertices.len(), faces = self.faces.len(), "bootstrapped");
        Ok(())
    }

    /// Insert `p` and restore the Delaunay property.
    pub fn insert(&mut self, p: Point3<T>) -> Result<InsertionReport> {
        match self.state {
            TriangulationState::Bootstrapped | TriangulationState::Insertable => {}
            actual => {
                return Err(MeshError::WrongState {
                    expected: TriangulationState::Insertable,
                    actual,
                });
            }
        }

        let location = self.locate(&p)?;
        let (vertex, kind, hull_flips) = match location {
            Location::Inside { face } => {
                let split = self.triangle_split(p, face)?;
                (split.vertex, InsertionKind::TriangleSplit, 0)
            }
            Location::OnEdge { face, edge } => {
                let split = self.edge_split(p, face, edge)?;
                (split.vertex, InsertionKind::EdgeSplit, 0)
            }
            Location::OutsideHull { face } => {
                let (vertex, flips) = self.insert_outside(p, face)?;
                (vertex, InsertionKind::OutsideHull, flips)
            }
        };

        let lawson_flips = self.lawson(vertex)?;
        self.state = TriangulationState::Insertable;

        debug!(vertex, ?kind, hull_flips, lawson_flips, "inserted");

        if self.config.validation == ValidationPolicy::AfterEachInsertion {
            self.validate()?;
        }

        Ok(InsertionReport {
            vertex,
            kind,
            hull_flips,
            lawson_flips,
        })
    }

    /// Clear the mesh, seed it with the first three points and insert the
    /// rest. `count` caps the total number of points used.
    ///
    /// On any error the mesh is cleared again and left `Empty`, so a failed
    /// batch never leaves a partial triangulation behind.
    pub fn insert_many(
        &mut self,
        points: &[Point3<T>],
        count: Option<usize>,
    ) -> Result<Vec<InsertionReport>> {
        let limit = count.unwrap_or(points.len()).min(points.len());
        if limit < 3 {
            return Err(MeshError::NotEnoughPoints(limit));
        }

        self.clear();
        let reports = match self.build_batch(&points[..limit]) {
            Ok(reports) => reports,
            Err(err) => {
                debug!(%err, "batch insertion failed, mesh cleared");
                self.clear();
                return Err(err);
            }
        };

        info!(
            points = limit,
            faces = self.faces.len(),
            hull = self.hull_size(),
            "triangulation built"
        );
        Ok(reports)
    }

    fn build_batch(&mut self, points: &[Point3<T>]) -> Result<Vec<InsertionReport>> {
        self.bootstrap(points[0], points[1], points[2])?;

        let mut reports = Vec::with_capacity(points.len() - 3);
        for p in &points[3..] {
            reports.push(self.insert(*p)?);
        }

        if self.config.validation != ValidationPolicy::Never {
            self.validate()?;
        }
        Ok(reports)
    }

    /// Split the infinite face fronting `p`, then flip hull edges on both
    /// sides of the new vertex while it sees them from outside. Returns the
    /// new vertex and the number of hull flips.
    fn insert_outside(&mut self, p: Point3<T>, face: usize) -> Result<(usize, usize)> {
        let split = self.triangle_split(p, face)?;
        let vertex = split.vertex;

        let fronts: Vec<usize> = split
            .faces
            .iter()
            .copied()
            .filter(|&f| self.is_infinite_face(f))
            .collect();
        debug_assert_eq!(fronts.len(), 2);

        let mut flips = 0;
        for start in fronts {
            flips += self.extend_hull(vertex, start)?;
        }
        Ok((vertex, flips))
    }

    fn extend_hull(&mut self, vertex: usize, start: usize) -> Result<usize> {
        let p = *self.position(vertex);
        let mut current = start;
        let mut flips = 0;

        loop {
            let ip = self.expect_local_index(vertex, current)?;
            let next = self.faces[current].neighbors[ip];
            let i0 = self.expect_local_index(INFINITE_VERTEX, next)?;
            let (u, w) = self.faces[next].edge(i0);

            // hull edge u -> w, finite side on the left
            if !orientation(self.position(u), self.position(w), &p).is_ccw() {
                return Ok(flips);
            }

            let other = self.flip_edge(current, ip)?;
            flips += 1;
            if !self.is_infinite_face(current) {
                current = other;
            }
        }
    }

    /// Flip edges around `vertex` until every finite face pair is Delaunay.
    fn lawson(&mut self, vertex: usize) -> Result<usize> {
        let mut stack = self.neighboring_faces_of_vertex(vertex)?;
        let mut flips = 0;

        while let Some(f) = stack.pop() {
            if self.is_infinite_face(f) {
                continue;
            }
            let i = self.expect_local_index(vertex, f)?;
            let g = self.faces[f].neighbors[i];
            if self.is_infinite_face(g) {
                continue;
            }

            let j = self.faces[g].edge_to(f).ok_or(MeshError::AsymmetricNeighbor {
                face: f,
                slot: i,
                neighbor: g,
            })?;
            let far = self.faces[g].vertices[j];
            let [a, b, c] = self.faces[f].vertices;

            if in_circle(self.position(far), self.position(a), self.position(b), self.position(c)) {
                let g = self.flip_edge(f, i)?;
                stack.push(f);
                stack.push(g);
                flips += 1;
            }
        }
        Ok(flips)
    }

    fn validate(&self) -> Result<()> {
        self.integrity_check()?;
        self.delaunay_check()
    }
}
