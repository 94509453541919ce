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
use crate::geometry::{Point3, Vector3};
use crate::numeric::scalar::Scalar;

/// Slot reserved for the point at infinity in a triangulation.
pub const INFINITE_VERTEX: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// Closes the plane into a sphere; every face touching it is outside the
    /// convex hull.
    AtInfinity,
    Finite,
}

#[derive(Debug, Clone)]
pub struct Vertex<T: Scalar> {
    pub position: Point3<T>,
    pub kind: VertexKind,
    /// One live face that has this vertex as a corner; seed of ring walks.
    pub incident_face: usize,
}

impl<T: Scalar> Vertex<T> {
    pub fn finite(position: Point3<T>, incident_face: usize) -> Self {
        Self {
            position,
            kind: VertexKind::Finite,
            incident_face,
        }
    }

    pub fn at_infinity(incident_face: usize) -> Self {
        Self {
            position: Point3::origin(),
            kind: VertexKind::AtInfinity,
            incident_face,
        }
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.kind == VertexKind::AtInfinity
    }
}

/// Triangle with counter-clockwise corners. `neighbors[i]` shares the edge
/// opposite `vertices[i]`, i.e. `vertices[i + 1] - vertices[i + 2]` (mod 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    pub vertices: [usize; 3],
    pub neighbors: [usize; 3],
}

impl Face {
    pub fn new(vertices: [usize; 3], neighbors: [usize; 3]) -> Self {
        Self {
            vertices,
            neighbors,
        }
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    /// Slot holding vertex `v`.
    #[inline]
    pub fn slot_of(&self, v: usize) -> Option<usize> {
        self.vertices.iter().position(|&x| x == v)
    }

    /// Slot whose neighbor is `f`.
    #[inline]
    pub fn edge_to(&self, f: usize) -> Option<usize> {
        self.neighbors.iter().position(|&n| n == f)
    }

    /// Endpoints of the edge opposite slot `i`, in face order.
    #[inline]
    pub fn edge(&self, i: usize) -> (usize, usize) {
        (self.vertices[(i + 1) % 3], self.vertices[(i + 2) % 3])
    }

    /// Rewrite the neighbor slot that currently holds `old`. Returns false
    /// when `old` is not a neighbor.
    pub fn change_neighbor(&mut self, old: usize, new: usize) -> bool {
        match self.edge_to(old) {
            Some(i) => {
                self.neighbors[i] = new;
                true
            }
            None => false,
        }
    }

}

/// Result of a point-location walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Strictly inside a finite face.
    Inside { face: usize },
    /// On the edge opposite corner `edge` of a finite face.
    OnEdge { face: usize, edge: usize },
    /// Beyond the hull edge of this infinite face.
    OutsideHull { face: usize },
}

impl Location {
    pub fn inside_hull(&self) -> bool {
        !matches!(self, Location::OutsideHull { .. })
    }

    pub fn face(&self) -> usize {
        match *self {
            Location::Inside { face }
            | Location::OnEdge { face, .. }
            | Location::OutsideHull { face } => face,
        }
    }

    pub fn edge(&self) -> Option<usize> {
        match *self {
            Location::OnEdge { edge, .. } => Some(edge),
            _ => None,
        }
    }
}

/// Faces produced by a split: 3 for a triangle split, 4 for an edge split.
/// The first entry is always the face that was split in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    pub vertex: usize,
    pub faces: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertionKind {
    TriangleSplit,
    EdgeSplit,
    OutsideHull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionReport {
    pub vertex: usize,
    pub kind: InsertionKind,
    /// Flips made to keep the hull convex after an outside insertion.
    pub hull_flips: usize,
    /// Flips made while restoring the empty-circle property.
    pub lawson_flips: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangulationState {
    Empty,
    /// Infinite vertex, 3 seeds, 1 finite face and 3 infinite faces.
    Bootstrapped,
    Insertable,
    /// Closed surface read from a file; not a planar triangulation.
    Surface,
}

#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar> {
    pub(crate) vertices: Vec<Vertex<T>>,
    pub(crate) faces: Vec<Face>,

    pub(crate) normals: Vec<Vector3<T>>,
    pub(crate) values: Vec<T>,
    pub(crate) curvature: Vec<T>,

    pub(crate) state: TriangulationState,
    pub(crate) config: MeshConfig,
}
