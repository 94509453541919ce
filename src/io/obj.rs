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

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{error::Result, mesh::basic_types::Mesh, numeric::scalar::Scalar};

/// Save positions, the scalar overlay as texture coordinates and vertex
/// normals. Every vertex is written, so OBJ index `i + 1` is mesh vertex `i`.
pub fn write_obj<T: Scalar, P: AsRef<Path>>(
    mesh: &Mesh<T>,
    path: P,
    use_curvature: bool,
    remove_infinite: bool,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_obj_to(mesh, &mut out, use_curvature, remove_infinite)?;
    out.flush()?;
    info!(path = %path.display(), "OBJ saved");
    Ok(())
}

pub fn write_obj_to<T: Scalar, W: Write>(
    mesh: &Mesh<T>,
    out: &mut W,
    use_curvature: bool,
    remove_infinite: bool,
) -> Result<()> {
    let data = if use_curvature { mesh.curvatures() } else { mesh.values() };

    writeln!(out, "# {} vertices, {} faces", mesh.vertex_count(), mesh.face_count())?;
    for v in mesh.vertices() {
        let [x, y, z] = v.position.coords();
        writeln!(out, "v {x} {y} {z}")?;
    }
    for s in data {
        writeln!(out, "vt {s} {s}")?;
    }
    for n in mesh.normals() {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    for (f, face) in mesh.faces().iter().enumerate() {
        if remove_infinite && mesh.is_infinite_face(f) {
            continue;
        }
        // OBJ is 1-based; position, texture and normal share the index
        let [a, b, c] = face.vertices.map(|v| v + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}
