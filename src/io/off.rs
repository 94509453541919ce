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
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{info, warn};

use crate::{
    error::{MeshError, Result},
    geometry::Point3,
    io::Tokens,
    mesh::basic_types::{Face, Mesh, TriangulationState, Vertex},
    numeric::scalar::Scalar,
};

/// Sentinel for a face or neighbor slot not yet assigned while loading.
const UNSET: usize = usize::MAX;

/// Load a closed, consistently oriented triangle mesh from an OFF file.
pub fn read_off<T: Scalar, P: AsRef<Path>>(path: P) -> Result<Mesh<T>> {
    let path = path.as_ref();
    let load = || -> Result<Mesh<T>> {
        let file = File::open(path)?;
        read_off_from(BufReader::new(file))
    };
    let mesh = load().map_err(|e| MeshError::Load {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    info!(path = %path.display(), vertices = mesh.vertex_count(), faces = mesh.face_count(), "OFF loaded");
    Ok(mesh)
}

/// Parse OFF text. Faces that are not triangles are skipped. Adjacency is
/// recovered by matching each directed edge with its reverse, so the
/// surface must be closed and every edge shared by exactly two faces.
pub fn read_off_from<T: Scalar, R: BufRead>(reader: R) -> Result<Mesh<T>> {
    let mut toks = Tokens::read(reader)?;

    let (line, header) = toks.next_token("OFF header")?;
    if header != "OFF" {
        return Err(MeshError::parse(line, format!("expected 'OFF', got '{header}'")));
    }

    let vcount: usize = toks.parse("vertex count")?;
    let fcount: usize = toks.parse("face count")?;
    let _ecount: usize = toks.parse("edge count")?;

    let mut mesh = Mesh::new();
    for _ in 0..vcount {
        let x: f64 = toks.parse("x coordinate")?;
        let y: f64 = toks.parse("y coordinate")?;
        let z: f64 = toks.parse("z coordinate")?;
        mesh.push_vertex(Vertex::finite(Point3::from_vals([x, y, z]), UNSET));
    }

    for _ in 0..fcount {
        let n: usize = toks.parse("face size")?;
        if n != 3 {
            warn!(line = toks.line(), size = n, "skipping non-triangular face");
            for _ in 0..n {
                toks.parse::<usize>("vertex index")?;
            }
            continue;
        }

        let mut vertices = [0usize; 3];
        for slot in &mut vertices {
            let v: usize = toks.parse("vertex index")?;
            if v >= vcount {
                return Err(MeshError::parse(
                    toks.line(),
                    format!("vertex index {v} out of range ({vcount} vertices)"),
                ));
            }
            *slot = v;
        }
        mesh.push_face(Face::new(vertices, [UNSET; 3]));
    }

    link_faces(&mut mesh)?;
    mesh.state = TriangulationState::Surface;
    Ok(mesh)
}

/// Fill neighbor slots and incident faces from the face list.
fn link_faces<T: Scalar>(mesh: &mut Mesh<T>) -> Result<()> {
    let mut edges: HashMap<(usize, usize), (usize, usize)> =
        HashMap::with_capacity(3 * mesh.faces.len());

    for (f, face) in mesh.faces.iter().enumerate() {
        for slot in 0..3 {
            let (u, w) = face.edge(slot);
            if edges.insert((u, w), (f, slot)).is_some() {
                return Err(MeshError::NonManifoldEdge { v0: u, v1: w });
            }
        }
    }

    for f in 0..mesh.faces.len() {
        for slot in 0..3 {
            let (u, w) = mesh.faces[f].edge(slot);
            let &(g, _) = edges
                .get(&(w, u))
                .ok_or(MeshError::OpenBoundary { v0: u, v1: w })?;
            mesh.faces[f].neighbors[slot] = g;
        }
        for v in mesh.faces[f].vertices {
            if mesh.vertices[v].incident_face == UNSET {
                mesh.vertices[v].incident_face = f;
            }
        }
    }

    if let Some(vertex) = mesh.vertices.iter().position(|v| v.incident_face == UNSET) {
        return Err(MeshError::IsolatedVertex { vertex });
    }
    Ok(())
}

/// Save the finite part of the mesh as OFF. The point at infinity and the
/// faces touching it are dropped and the remaining vertices renumbered.
pub fn write_off<T: Scalar, P: AsRef<Path>>(mesh: &Mesh<T>, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_off_to(mesh, &mut out)?;
    out.flush()?;
    info!(path = %path.display(), "OFF saved");
    Ok(())
}

pub fn write_off_to<T: Scalar, W: Write>(mesh: &Mesh<T>, out: &mut W) -> Result<()> {
    let mut remap = vec![UNSET; mesh.vertex_count()];
    let mut next = 0;
    for v in mesh.finite_vertices() {
        remap[v] = next;
        next += 1;
    }
    let faces: Vec<usize> = mesh.finite_faces().collect();

    writeln!(out, "OFF")?;
    writeln!(out, "{} {} 0", next, faces.len())?;

    for v in mesh.finite_vertices() {
        let [x, y, z] = mesh.position(v).coords();
        writeln!(out, "{x} {y} {z}")?;
    }
    for f in faces {
        let [a, b, c] = mesh.faces[f].vertices;
        writeln!(out, "3 {} {} {}", remap[a], remap[b], remap[c])?;
    }
    Ok(())
}
