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

//! Point location by oriented walk.
//!
//! Starting from a finite face, repeatedly cross an edge that has the query
//! point on its clockwise side, never re-crossing the edge just entered.
//! Reaching an infinite face means the point is outside the hull; a face with
//! no such edge contains the point.

use tracing::debug;

use crate::error::{MeshError, Result};
use crate::geometry::Point3;
use crate::impl_mesh;
use crate::kernel::{TrianglePosition, in_triangle, orientation};
use crate::mesh::basic_types::Location;

impl_mesh! {
    /// Locate `p` starting from the first finite face.
    pub fn locate(&self, p: &Point3<T>) -> Result<Location> {
        let start = self.start_face()?;
        self.locate_from(p, start)
    }

    /// Locate `p` walking from `start`.
    pub fn locate_from(&self, p: &Point3<T>, start: usize) -> Result<Location> {
        self.check_face(start)?;
        let budget = self.config.walk_budget(self.faces.len());

        let mut face = start;
        let mut entered: Option<usize> = None;

        for _ in 0..budget {
            if self.is_infinite_face(face) {
                return Ok(Location::OutsideHull { face });
            }

            let f = &self.faces[face];
            let crossing = (0..3).find(|&i| {
                if Some(i) == entered {
                    return false;
                }
                let (u, w) = f.edge(i);
                orientation(self.position(u), self.position(w), p).is_cw()
            });

            if let Some(i) = crossing {
                let next = f.neighbors[i];
                entered = self.faces[next].edge_to(face);
                face = next;
                continue;
            }

            let [a, b, c] = f.vertices;
            return match in_triangle(p, self.position(a), self.position(b), self.position(c)) {
                TrianglePosition::Inside => Ok(Location::Inside { face }),
                TrianglePosition::OnEdge(edge) => Ok(Location::OnEdge { face, edge }),
                // Only reachable when p is clockwise of the entry edge alone,
                // or sits on a corner.
                TrianglePosition::Outside => {
                    if let Some(v) = f.vertices.iter().copied().find(|&v| self.position(v).same_xy(p)) {
                        return Err(self.duplicate(v, p));
                    }
                    debug!(face, "walk stopped in a face that does not contain the point");
                    Err(MeshError::LocationFailed { steps: budget })
                }
            };
        }

        Err(MeshError::LocationFailed { steps: budget })
    }

    /// Fixed starting face of the walk: the lowest-index finite face.
    pub(crate) fn start_face(&self) -> Result<usize> {
        self.finite_faces().next().ok_or(MeshError::WrongState {
            expected: crate::mesh::basic_types::TriangulationState::Insertable,
            actual: self.state,
        })
    }

    pub(crate) fn duplicate(&self, vertex: usize, p: &Point3<T>) -> MeshError {
        MeshError::DuplicatePoint {
            vertex,
            x: p.x.to_f64().unwrap_or(f64::NAN),
            y: p.y.to_f64().unwrap_or(f64::NAN),
        }
    }
}
