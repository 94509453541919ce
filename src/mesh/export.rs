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
use crate::numeric::scalar::Scalar;

/// Flat buffers for a rendering host. `positions` and `normals` hold three
/// components per vertex, `triangles` three vertex indices per face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderMesh<T: Scalar> {
    pub positions: Vec<T>,
    pub normals: Vec<T>,
    pub scalars: Vec<T>,
    pub triangles: Vec<u32>,
}

impl<T: Scalar> RenderMesh<T> {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}

impl_mesh! {
    /// Export the mesh for display. The scalar channel carries the
    /// curvature overlay when `use_curvature` is set, the value overlay
    /// otherwise. With `remove_infinite`, faces touching the point at
    /// infinity are left out; the vertex itself stays so indices match.
    ///
    /// Fails with [`MeshError::InvalidParameter`] when a vertex index does
    /// not fit the `u32` triangle buffer.
    pub fn render_mesh(&self, use_curvature: bool, remove_infinite: bool) -> Result<RenderMesh<T>> {
        let n = self.vertices.len();
        let mut out = RenderMesh {
            positions: Vec::with_capacity(3 * n),
            normals: Vec::with_capacity(3 * n),
            scalars: Vec::with_capacity(n),
            triangles: Vec::with_capacity(3 * self.faces.len()),
        };

        for (v, vertex) in self.vertices.iter().enumerate() {
            out.positions.extend_from_slice(&vertex.position.coords());
            let nrm = self.normals[v];
            out.normals.extend_from_slice(&[nrm.x, nrm.y, nrm.z]);
            out.scalars.push(if use_curvature { self.curvature[v] } else { self.values[v] });
        }

        for (f, face) in self.faces.iter().enumerate() {
            if remove_infinite && self.is_infinite_face(f) {
                continue;
            }
            for v in face.vertices {
                out.triangles.push(render_index(v)?);
            }
        }
        Ok(out)
    }
}

fn render_index(v: usize) -> Result<u32> {
    u32::try_from(v).map_err(|_| MeshError::invalid_param("vertex index", v, "does not fit in u32"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_index_rejects_wide_indices() {
        assert_eq!(render_index(7).unwrap(), 7);
        assert_eq!(render_index(u32::MAX as usize).unwrap(), u32::MAX);
        let wide = u32::MAX as u64 + 1;
        if let Ok(v) = usize::try_from(wide) {
            assert!(matches!(
                render_index(v),
                Err(MeshError::InvalidParameter { name: "vertex index", .. })
            ));
        }
    }
}
