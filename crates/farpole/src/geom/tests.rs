use super::*;
use crate::error::InvalidPolygon;
use nalgebra::vector;

#[test]
fn segment_distance_projects_and_clamps() {
    let a = vector![0.0, 0.0];
    let b = vector![10.0, 0.0];
    // Orthogonal projection hits the interior.
    assert!((segment_distance(vector![5.0, 3.0], a, b) - 3.0).abs() < 1e-12);
    // Projection parameter clamps to the endpoints.
    assert!((segment_distance(vector![-4.0, 3.0], a, b) - 5.0).abs() < 1e-12);
    assert!((segment_distance(vector![14.0, 3.0], a, b) - 5.0).abs() < 1e-12);
    // Zero-length segment falls back to point distance.
    assert!((segment_distance(vector![3.0, 4.0], a, a) - 5.0).abs() < 1e-12);
}

#[test]
fn signed_distance_sign_and_magnitude() {
    let poly =
        Polygon::from_coords(&[vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]]).unwrap();
    assert!((signed_distance(vector![2.0, 2.0], &poly) - 2.0).abs() < 1e-12);
    assert!((signed_distance(vector![2.0, 3.0], &poly) - 1.0).abs() < 1e-12);
    // Outside is negative.
    assert!((signed_distance(vector![-3.0, 2.0], &poly) + 3.0).abs() < 1e-12);
    assert!((signed_distance(vector![2.0, -1.5], &poly) + 1.5).abs() < 1e-12);
    // On the boundary the magnitude vanishes.
    assert!(signed_distance(vector![0.0, 2.0], &poly).abs() < 1e-12);
}

#[test]
fn holes_flip_insideness() {
    let poly = Polygon::from_coords(&[
        vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)],
    ])
    .unwrap();
    // The center sits in the hole: outside, one unit from the hole edge.
    assert!((signed_distance(vector![5.0, 5.0], &poly) + 1.0).abs() < 1e-12);
    // In the band between hole and outer boundary.
    assert!((signed_distance(vector![2.0, 5.0], &poly) - 2.0).abs() < 1e-12);
}

#[test]
fn single_vertex_ring_degenerates_to_point_distance() {
    let poly = Polygon::from_coords(&[vec![(1.0, 1.0)]]).unwrap();
    assert!((signed_distance(vector![4.0, 5.0], &poly) + 5.0).abs() < 1e-12);
}

#[test]
fn polygon_validation() {
    assert!(matches!(Polygon::new(vec![]), Err(InvalidPolygon::NoRings)));
    assert!(matches!(
        Polygon::from_coords(&[vec![]]),
        Err(InvalidPolygon::EmptyRing { index: 0 })
    ));
    assert!(matches!(
        Polygon::from_coords(&[vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)], vec![]]),
        Err(InvalidPolygon::EmptyRing { index: 1 })
    ));
    assert!(matches!(
        Polygon::from_coords(&[vec![(0.0, 0.0), (f64::NAN, 1.0)]]),
        Err(InvalidPolygon::NonFinite { ring: 0, vertex: 1 })
    ));
    assert!(matches!(
        Polygon::from_coords(&[vec![(0.0, 0.0), (1.0, f64::INFINITY)]]),
        Err(InvalidPolygon::NonFinite { ring: 0, vertex: 1 })
    ));
}

#[test]
fn bbox_covers_outer_ring_only() {
    let poly = Polygon::from_coords(&[
        vec![(-2.0, 0.0), (6.0, -1.0), (6.0, 5.0), (0.0, 5.0)],
        vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)],
    ])
    .unwrap();
    let bb = poly.bbox();
    assert_eq!(bb.min, vector![-2.0, -1.0]);
    assert_eq!(bb.max, vector![6.0, 5.0]);
    assert!((bb.width() - 8.0).abs() < 1e-12);
    assert!((bb.height() - 6.0).abs() < 1e-12);
    assert_eq!(bb.center(), vector![2.0, 2.0]);
}

#[test]
fn ring_edges_start_with_wraparound() {
    let ring = Ring::new(vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]]);
    let edges: Vec<_> = ring.edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0], (vector![1.0, 1.0], vector![0.0, 0.0]));
    assert_eq!(edges[1], (vector![0.0, 0.0], vector![1.0, 0.0]));
    assert_eq!(edges[2], (vector![1.0, 0.0], vector![1.0, 1.0]));
}
