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
use lawson::{
    InsertionKind, Location, Mesh, MeshConfig, MeshError, Point3, TriangulationState,
    ValidationPolicy,
};

fn p(x: f64, y: f64) -> Point3<f64> {
    Point3::planar(x, y)
}

fn seeded(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Mesh<f64> {
    let mut mesh = Mesh::new();
    mesh.bootstrap(a, b, c).unwrap();
    mesh
}

fn centroid(mesh: &Mesh<f64>, f: usize) -> Point3<f64> {
    let [a, b, c] = mesh.faces()[f].vertices;
    let (pa, pb, pc) = (mesh.position(a), mesh.position(b), mesh.position(c));
    p((pa.x + pb.x + pc.x) / 3.0, (pa.y + pb.y + pc.y) / 3.0)
}

#[test]
fn test_scenario_seed_triangle() {
    let mesh = seeded(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));

    assert_eq!(mesh.state(), TriangulationState::Bootstrapped);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.finite_face_count(), 1);
    assert_eq!(mesh.face_count() - mesh.finite_face_count(), 3);
    for v in 1..4 {
        assert_eq!(mesh.vertices()[v].incident_face, 0);
    }
    mesh.integrity_check().unwrap();
}

#[test]
fn test_scenario_centroid_insertion() {
    let mut mesh = seeded(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    let report = mesh.insert(p(1.0 / 3.0, 1.0 / 3.0)).unwrap();

    assert_eq!(report.kind, InsertionKind::TriangleSplit);
    assert_eq!(report.lawson_flips, 0);
    assert_eq!(mesh.finite_face_count(), 3);
    assert_eq!(mesh.state(), TriangulationState::Insertable);
    mesh.integrity_check().unwrap();
    mesh.delaunay_check().unwrap();
}

#[test]
fn test_scenario_far_outside_insertion() {
    let mut mesh = seeded(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    let before = mesh.finite_face_count();
    let report = mesh.insert(p(-10.0, -10.0)).unwrap();

    assert_eq!(report.kind, InsertionKind::OutsideHull);
    assert_eq!(mesh.finite_face_count(), before + 2);
    assert!(mesh.is_hull_vertex(report.vertex).unwrap());
    // (0, 0) ends up inside the new hull
    assert!(!mesh.is_hull_vertex(1).unwrap());
    mesh.integrity_check().unwrap();
    mesh.delaunay_check().unwrap();
}

#[test]
fn test_insertion_on_edge() {
    let mut mesh = seeded(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    mesh.insert(p(1.0, 1.0)).unwrap();

    let report = mesh.insert(p(0.5, 0.5)).unwrap();
    assert_eq!(report.kind, InsertionKind::EdgeSplit);

    let finite_before = mesh.finite_face_count();
    let report = mesh.insert(p(2.0, 0.0)).unwrap();
    assert_eq!(report.kind, InsertionKind::EdgeSplit);
    // one finite and one infinite face were halved
    assert_eq!(mesh.finite_face_count(), finite_before + 1);

    mesh.integrity_check().unwrap();
    mesh.delaunay_check().unwrap();
}

#[test]
fn test_face_count_per_insertion() {
    let points: Vec<Point3<f64>> =
        generate_random_points_seeded(200, PointBounds::square(0.0, 100.0), 1).unwrap();
    let mut mesh = Mesh::new();
    mesh.bootstrap(points[0], points[1], points[2]).unwrap();

    for q in &points[3..] {
        let faces = mesh.face_count();
        let finite = mesh.finite_face_count();
        let report = mesh.insert(*q).unwrap();

        assert_eq!(mesh.face_count(), faces + 2);
        match report.kind {
            InsertionKind::TriangleSplit | InsertionKind::EdgeSplit => {
                assert_eq!(mesh.finite_face_count(), finite + 2)
            }
            InsertionKind::OutsideHull => {
                assert_eq!(mesh.finite_face_count(), finite + 1 + report.hull_flips)
            }
        }
    }

    let n = points.len();
    assert_eq!(mesh.face_count(), 2 * n - 2);
    assert_eq!(mesh.finite_face_count(), 2 * n - 2 - mesh.hull_size());
}

#[test]
fn test_random_insertions_stay_delaunay() {
    let points: Vec<Point3<f64>> = generate_random_points_seeded(
        150,
        PointBounds::square(-50.0, 50.0).with_z(0.0, 10.0),
        2024,
    )
    .unwrap();
    let config = MeshConfig::default().with_validation(ValidationPolicy::AfterEachInsertion);
    let mut mesh = Mesh::with_config(config);
    let reports = mesh.insert_many(&points, None).unwrap();

    assert_eq!(reports.len(), 147);
    assert_eq!(mesh.vertex_count(), 151);
    mesh.integrity_check().unwrap();
    mesh.delaunay_check().unwrap();
}

#[test]
fn test_insert_many_respects_count() {
    let points: Vec<Point3<f64>> =
        generate_random_points_seeded(50, PointBounds::square(0.0, 1.0), 8).unwrap();
    let mut mesh = Mesh::new();
    let reports = mesh.insert_many(&points, Some(10)).unwrap();
    assert_eq!(reports.len(), 7);
    assert_eq!(mesh.vertex_count(), 11);

    // a second batch starts from scratch
    mesh.insert_many(&points, Some(5)).unwrap();
    assert_eq!(mesh.vertex_count(), 6);
}

#[test]
fn test_locate_finds_face_of_centroid() {
    let points: Vec<Point3<f64>> =
        generate_random_points_seeded(120, PointBounds::square(-1.0, 1.0), 77).unwrap();
    let mesh = Mesh::from_points(&points).unwrap();

    for f in mesh.finite_faces() {
        let c = centroid(&mesh, f);
        let location = mesh.locate(&c).unwrap();
        assert!(location.inside_hull());
        assert_eq!(location, Location::Inside { face: f });
        assert_eq!(location.edge(), None);
    }
}

#[test]
fn test_locate_from_any_start() {
    let points: Vec<Point3<f64>> =
        generate_random_points_seeded(60, PointBounds::square(-1.0, 1.0), 4).unwrap();
    let mesh = Mesh::from_points(&points).unwrap();
    let target = mesh.finite_faces().last().unwrap();
    let c = centroid(&mesh, target);

    for start in mesh.finite_faces() {
        assert_eq!(mesh.locate_from(&c, start).unwrap().face(), target);
    }
}

#[test]
fn test_locate_outside_hull() {
    let mesh = seeded(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    let location = mesh.locate(&p(5.0, 5.0)).unwrap();
    assert!(!location.inside_hull());
    assert!(mesh.is_infinite_face(location.face()));
}

#[test]
fn test_walk_budget() {
    let points: Vec<Point3<f64>> =
        generate_random_points_seeded(80, PointBounds::square(-1.0, 1.0), 6).unwrap();
    let mut mesh = Mesh::from_points(&points).unwrap();
    let start = mesh.finite_faces().next().unwrap();
    let far = mesh
        .finite_faces()
        .find(|&f| f != start && !mesh.faces()[start].neighbors.contains(&f))
        .unwrap();
    let c = centroid(&mesh, far);

    mesh.set_config(MeshConfig::default().with_max_walk_steps(1));
    assert!(matches!(mesh.locate(&c), Err(MeshError::LocationFailed { steps: 1 })));
}

#[test]
fn test_duplicate_point_is_rejected() {
    let mut mesh = seeded(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    mesh.insert(p(1.0, 1.0)).unwrap();
    let faces = mesh.face_count();

    assert!(matches!(
        mesh.insert(p(1.0, 1.0)),
        Err(MeshError::DuplicatePoint { vertex: 4, .. })
    ));
    assert!(matches!(
        mesh.insert(p(4.0, 0.0)),
        Err(MeshError::DuplicatePoint { vertex: 2, .. })
    ));
    assert_eq!(mesh.face_count(), faces);
}

#[test]
fn test_failed_batch_leaves_mesh_empty() {
    let points = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0), p(1.0, 1.0), p(1.0, 1.0)];
    let mut mesh = Mesh::new();
    assert!(matches!(
        mesh.insert_many(&points, None),
        Err(MeshError::DuplicatePoint { .. })
    ));
    assert_eq!(mesh.state(), TriangulationState::Empty);
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.face_count(), 0);

    // the mesh is usable again afterwards
    mesh.insert_many(&points, Some(4)).unwrap();
    assert_eq!(mesh.vertex_count(), 5);
}

#[test]
fn test_degenerate_input() {
    assert!(matches!(
        Mesh::<f64>::from_points(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(3.0, 0.0)]),
        Err(MeshError::DegenerateSeed)
    ));
    assert!(matches!(
        Mesh::<f64>::from_points(&[p(0.0, 0.0), p(1.0, 1.0)]),
        Err(MeshError::NotEnoughPoints(2))
    ));
}

#[test]
fn test_insert_requires_seeded_mesh() {
    let mut mesh = Mesh::<f64>::new();
    assert!(matches!(
        mesh.insert(p(0.0, 0.0)),
        Err(MeshError::WrongState {
            expected: TriangulationState::Insertable,
            actual: TriangulationState::Empty,
        })
    ));
}

#[test]
fn test_z_is_carried() {
    let points = [
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 2.0),
        Point3::new(0.0, 1.0, 3.0),
        Point3::new(0.25, 0.25, 7.5),
    ];
    let mesh = Mesh::<f64>::from_points(&points).unwrap();
    assert_eq!(mesh.position(4).z, 7.5);
}
