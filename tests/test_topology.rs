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

use approx::assert_relative_eq;
use lawson::{INFINITE_VERTEX, Mesh, MeshError, Point3};

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

#[test]
fn test_faces_around_seed_vertex() {
    let mesh = unit_triangle();
    // finite face first, then the two infinite faces on its hull edges
    let ring = mesh.neighboring_faces_of_vertex(1).unwrap();
    assert_eq!(ring.len(), 3);
    assert_eq!(ring[0], 0);
    assert!(ring[1..].iter().all(|&f| mesh.is_infinite_face(f)));
}

#[test]
fn test_vertices_around_seed_vertex_are_ccw() {
    let mesh = unit_triangle();
    assert_eq!(mesh.neighboring_vertices_of_vertex(1).unwrap(), vec![2, 3, INFINITE_VERTEX]);
}

#[test]
fn test_infinite_vertex_sees_whole_hull() {
    let mesh = unit_triangle();
    let ring = mesh.neighboring_vertices_of_vertex(INFINITE_VERTEX).unwrap();
    let mut sorted = ring.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![1, 2, 3]);
    assert_eq!(mesh.hull_size(), 3);
}

#[test]
fn test_areas() {
    let mesh = unit_triangle();
    assert_relative_eq!(mesh.face_area(0).unwrap(), 0.5);
    assert_eq!(mesh.face_area(1).unwrap(), 0.0);
    assert_relative_eq!(mesh.patch_area(1).unwrap(), 0.5 / 3.0);
}

#[test]
fn test_face_normal_points_up() {
    let mesh = unit_triangle();
    let n = mesh.face_normal(0).unwrap();
    assert_relative_eq!(n.z, 1.0);
    assert!(matches!(mesh.face_normal(2), Err(MeshError::InfiniteFace { face: 2, .. })));
}

#[test]
fn test_neighboring_faces_of_face() {
    let mesh = unit_triangle();
    assert_eq!(mesh.neighboring_faces_of_face(0).unwrap(), [1, 2, 3]);
    for f in 1..4 {
        assert!(mesh.neighboring_faces_of_face(f).unwrap().contains(&0));
    }
}

#[test]
fn test_local_index() {
    let mesh = unit_triangle();
    assert_eq!(mesh.local_index(3, 0), Some(2));
    assert_eq!(mesh.local_index(1, 1), None);
    assert_eq!(mesh.local_index(1, 99), None);
}

#[test]
fn test_out_of_range_indices_are_errors() {
    let mesh = unit_triangle();
    assert!(matches!(
        mesh.neighboring_faces_of_vertex(42),
        Err(MeshError::InvalidVertexIndex { vertex: 42, count: 4 })
    ));
    assert!(matches!(
        mesh.face_area(9),
        Err(MeshError::InvalidFaceIndex { face: 9, count: 4 })
    ));
}

#[test]
fn test_hull_vertices() {
    let points = [
        Point3::planar(0.0, 0.0),
        Point3::planar(4.0, 0.0),
        Point3::planar(0.0, 4.0),
        Point3::planar(1.0, 1.0),
    ];
    let mesh = Mesh::<f64>::from_points(&points).unwrap();
    assert!(mesh.is_hull_vertex(1).unwrap());
    assert!(!mesh.is_hull_vertex(4).unwrap());
}

#[test]
fn test_clear_resets() {
    let mut mesh = unit_triangle();
    mesh.clear();
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.face_count(), 0);
    assert_eq!(mesh.state(), lawson::TriangulationState::Empty);
}
