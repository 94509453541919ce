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

//! Incremental planar Delaunay triangulation over a face-adjacency mesh,
//! with cotangent-Laplacian operators on the same connectivity.
//!
//! ```
//! use lawson::{Mesh, Point3};
//!
//! let points = [
//!     Point3::planar(0.0, 0.0),
//!     Point3::planar(1.0, 0.0),
//!     Point3::planar(0.0, 1.0),
//!     Point3::planar(0.3, 0.3),
//! ];
//! let mesh = Mesh::<f64>::from_points(&points).unwrap();
//! assert_eq!(mesh.finite_face_count(), 3);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod mesh_processing;
pub mod numeric;
pub mod operations;

pub use config::{DiffusionScheme, MeshConfig, ValidationPolicy};
pub use error::{MeshError, Result};
pub use geometry::{Point3, Vector3, VectorOps};
pub use mesh::{
    INFINITE_VERTEX, InsertionKind, InsertionReport, Location, Mesh, RenderMesh,
    TriangulationState,
};
pub use numeric::Scalar;
