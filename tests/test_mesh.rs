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

use lawson::geometry::point_generation::{PointBounds, generate_random_points_seeded};
use lawson::mesh::Face;
use lawson::{Mesh, MeshError, Point3};

fn unit_triangle() -> Mesh<f64> {
    let mut mesh = Mesh::new();
    mesh.bootstrap(
        Point3::planar(0.0, 0.0),
        Point3::planar(1.0, 0.0),
        Point3::planar(0.0, 1.0),
    )
    .unwrap();
    mesh
}

fn random_mesh(n: usize, seed: u64) -> Mesh<f64> {
    let points = generate_random_points_seeded(n, PointBounds::square(-1.0, 1.0), seed).unwrap();
    Mesh::from_points(&points).unwrap()
}

/// First finite face slot whose neighbor is finite too.
fn interior_edge(mesh: &Mesh<f64>) -> (usize, usize) {
    mesh.finite_faces()
        .find_map(|f| {
            (0..3)
                .find(|&i| !mesh.is_infinite_face(mesh.faces()[f].neighbors[i]))
                .map(|i| (f, i))
        })
        .unwrap()
}

/// Rotate so the smallest vertex index comes first.
fn canonical(face: &Face) -> [usize; 3] {
    let mut v = face.vertices;
    while v[0] != *v.iter().min().unwrap() {
        v.rotate_left(1);
    }
    v
}

#[test]
fn test_triangle_split_counts() {
    let mut mesh = unit_triangle();
    let split = mesh.triangle_split(Point3::planar(0.2, 0.2), 0).unwrap();

    assert_eq!(split.vertex, 4);
    assert_eq!(split.faces, vec![0, 4, 5]);
    assert_eq!(mesh.face_count(), 6);
    assert_eq!(mesh.finite_face_count(), 3);
    assert_eq!(mesh.neighboring_faces_of_vertex(4).unwrap().len(), 3);
    mesh.integrity_check().unwrap();
}

#[test]
fn test_edge_split_interior_edge() {
    let mut mesh = random_mesh(40, 3);
    let (f, i) = interior_edge(&mesh);
    let (u, w) = mesh.faces()[f].edge(i);
    let (pu, pw) = (*mesh.position(u), *mesh.position(w));
    let mid = Point3::new((pu.x + pw.x) * 0.5, (pu.y + pw.y) * 0.5, 0.0);

    let faces_before = mesh.face_count();
    let finite_before = mesh.finite_face_count();
    let split = mesh.edge_split(mid, f, i).unwrap();

    assert_eq!(split.faces.len(), 4);
    assert_eq!(mesh.face_count(), faces_before + 2);
    assert_eq!(mesh.finite_face_count(), finite_before + 2);

    let mut ring = mesh.neighboring_vertices_of_vertex(split.vertex).unwrap();
    assert_eq!(ring.len(), 4);
    assert!(ring.contains(&u) && ring.contains(&w));
    ring.retain(|&v| v != u && v != w);
    assert_eq!(ring.len(), 2);
    mesh.integrity_check().unwrap();
}

#[test]
fn test_edge_split_on_hull_edge() {
    let mut mesh = unit_triangle();
    // slot 1 of face 0 holds vertex 2; the edge opposite runs from vertex 3 to vertex 1
    let split = mesh.edge_split(Point3::planar(0.0, 0.5), 0, 1).unwrap();

    assert_eq!(mesh.finite_face_count(), 2);
    assert_eq!(mesh.face_count(), 6);
    assert!(mesh.is_hull_vertex(split.vertex).unwrap());
    mesh.integrity_check().unwrap();
}

#[test]
fn test_flip_twice_restores_faces() {
    let mut mesh = random_mesh(30, 5);
    let (f, i) = interior_edge(&mesh);
    let g = mesh.faces()[f].neighbors[i];
    let before_f = mesh.faces()[f];
    let before_g = mesh.faces()[g];

    assert_eq!(mesh.flip_edge(f, i).unwrap(), g);
    mesh.integrity_check().unwrap();
    assert_ne!(canonical(&mesh.faces()[f]), canonical(&before_f));

    // the new diagonal sits opposite the corner after `i`
    assert_eq!(mesh.flip_edge(f, (i + 1) % 3).unwrap(), g);
    mesh.integrity_check().unwrap();

    // same two triangles, stored in swapped slots
    assert_eq!(canonical(&mesh.faces()[f]), canonical(&before_g));
    assert_eq!(canonical(&mesh.faces()[g]), canonical(&before_f));

    let swap = |x: usize| if x == f { g } else if x == g { f } else { x };
    let mut after: Vec<usize> = mesh.faces()[g].neighbors.iter().map(|&x| swap(x)).collect();
    let mut orig = before_f.neighbors.to_vec();
    after.sort_unstable();
    orig.sort_unstable();
    assert_eq!(after, orig);
}

#[test]
fn test_flip_keeps_vertex_incidence() {
    let mut mesh = random_mesh(25, 9);
    let (f, i) = interior_edge(&mesh);
    mesh.flip_edge(f, i).unwrap();
    for v in 0..mesh.vertex_count() {
        let face = mesh.vertices()[v].incident_face;
        assert!(mesh.faces()[face].contains(v));
    }
}

#[test]
fn test_editing_rejects_bad_indices() {
    let mut mesh = unit_triangle();
    assert!(matches!(
        mesh.triangle_split(Point3::planar(0.1, 0.1), 17),
        Err(MeshError::InvalidFaceIndex { face: 17, .. })
    ));
    assert!(matches!(
        mesh.flip_edge(0, 3),
        Err(MeshError::InvalidLocalEdge { edge: 3 })
    ));
    assert!(matches!(
        mesh.change_neighbor(0, 0, 1),
        Err(MeshError::NotNeighbors { face: 0, neighbor: 0 })
    ));
}
