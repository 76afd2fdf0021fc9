use super::*;
use crate::error::FlagError;
use nalgebra::vector;

fn ref_points() -> [Vec3; 4] {
    REFERENCE_FRAME.map(|[x, y, z]| Vec3::new(x, y, z))
}

fn assert_proportional(a: &Vec3, b: &Vec3) {
    assert!(
        same_projective_point(a, b, 1e-9),
        "{a:?} and {b:?} are not proportional"
    );
}

#[test]
fn connecting_line_contains_both_points() {
    let p = vector![1.0, 0.0, 1.0];
    let q = vector![0.0, 2.0, 1.0];
    let l = connecting_line(&p, &q).unwrap();
    assert!(l.dot(&p).abs() < 1e-12);
    assert!(l.dot(&q).abs() < 1e-12);
}

#[test]
fn connecting_line_rejects_same_projective_point() {
    let p = vector![0.3, -1.2, 2.0];
    assert_eq!(connecting_line(&p, &p), Err(FlagError::CoincidentPoints));
    assert_eq!(connecting_line(&p, &(p * -4.0)), Err(FlagError::CoincidentPoints));
    assert_eq!(
        connecting_line(&p, &Vec3::zeros()),
        Err(FlagError::CoincidentPoints)
    );
}

#[test]
fn parallel_lines_meet_at_infinity() {
    // x = 1 and x = -1 in the chart z = 1.
    let l = vector![-1.0, 0.0, 1.0];
    let m = vector![1.0, 0.0, 1.0];
    let q = line_intersection(&l, &m);
    assert!(q.z.abs() < 1e-12);
    assert!(q.y.abs() > 0.0);
    assert_eq!(
        project_point(&vector![0.0, 0.0, 1.0], &q),
        Err(FlagError::AtInfinity)
    );
    // Same line twice gives the zero vector.
    assert_eq!(line_intersection(&l, &(l * 3.0)), Vec3::zeros());
}

#[test]
fn project_point_rescales_onto_chart() {
    let n = vector![0.0, 0.0, 1.0];
    let p = project_point(&n, &vector![2.0, 4.0, 2.0]).unwrap();
    assert!((p - vector![1.0, 2.0, 1.0]).norm() < 1e-12);

    let tilted = vector![1.0, 1.0, 0.0].normalize();
    let q = project_point(&tilted, &vector![3.0, 1.0, 5.0]).unwrap();
    assert!((q.dot(&tilted) - 1.0).abs() < 1e-12);
}

#[test]
fn rotate_vectors_aligns_directions() {
    let p = vector![0.2, -0.4, 1.0];
    let q = vector![0.0, 0.0, 1.0];
    let r = rotate_vectors(&p, &q);
    assert!((r * p.normalize() - q).norm() < 1e-12);
    assert!((r.transpose() * r - Mat3::identity()).amax() < 1e-12);
    assert!((r.determinant() - 1.0).abs() < 1e-12);
    // The axis p × q is fixed.
    let axis = p.cross(&q);
    assert!((r * axis - axis).norm() < 1e-12);
}

#[test]
fn rotate_vectors_degenerate_directions() {
    let p = vector![0.0, 0.0, 2.0];
    assert_eq!(rotate_vectors(&p, &vector![0.0, 0.0, 1.0]), Mat3::identity());

    let r = rotate_vectors(&p, &vector![0.0, 0.0, -1.0]);
    assert!((r * vector![0.0, 0.0, 1.0] - vector![0.0, 0.0, -1.0]).norm() < 1e-12);
    assert!((r.determinant() - 1.0).abs() < 1e-12);
}

#[test]
fn invert_basis_detects_dependent_columns() {
    let a = vector![1.0, 0.0, 1.0];
    let b = vector![0.0, 1.0, 1.0];
    let (basis, inverse) = invert_basis([a, b, vector![1.0, 1.0, 0.0]], "test").unwrap();
    assert!((basis * inverse - Mat3::identity()).amax() < 1e-12);
    assert_eq!(
        invert_basis([a, b, a + b], "test"),
        Err(FlagError::DegenerateBasis { context: "test" })
    );
}

#[test]
fn conjugated_diagonal_has_basis_eigenvectors() {
    let cols = [
        vector![1.0, 0.0, 1.0],
        vector![0.0, 1.0, 2.0],
        vector![-1.0, 1.0, 1.0],
    ];
    let (basis, inverse) = invert_basis(cols, "test").unwrap();
    let g = conjugate_diagonal(&basis, &inverse, &vector![2.0, 0.5, -1.0]);
    assert!((g * cols[0] - cols[0] * 2.0).norm() < 1e-12);
    assert!((g * cols[1] - cols[1] * 0.5).norm() < 1e-12);
    assert!((g * cols[2] + cols[2]).norm() < 1e-12);
}

#[test]
fn four_points_onto_themselves_is_identity() {
    let refs = ref_points();
    let t = transform_four_points(&refs, &refs).unwrap();
    let t = t / t[(0, 0)];
    assert!((t - Mat3::identity()).amax() < 1e-12);
}

#[test]
fn four_points_maps_each_point() {
    let points = [
        vector![0.5, 0.1, 1.0],
        vector![-0.3, 0.7, 1.0],
        vector![-0.4, -0.6, 1.0],
        vector![2.0, 0.2, 0.5],
    ];
    let others = ref_points();
    let t = transform_four_points(&points, &others).unwrap();
    for (p, o) in points.iter().zip(others.iter()) {
        assert_proportional(&(t * p), o);
    }
    // And back again.
    let back = transform_four_points(&others, &points).unwrap();
    for (p, o) in points.iter().zip(others.iter()) {
        assert_proportional(&(back * o), p);
    }
}

#[test]
fn four_points_rejects_collinear_triples() {
    let collinear = [
        vector![0.0, 0.0, 1.0],
        vector![1.0, 1.0, 1.0],
        vector![5.0, 3.0, 1.0],
        vector![2.0, 2.0, 1.0],
    ];
    let refs = ref_points();
    assert_eq!(
        transform_four_points(&collinear, &refs),
        Err(FlagError::Collinear {
            frame: 0,
            triple: [0, 1, 3]
        })
    );
    assert!(matches!(
        transform_four_points(&refs, &collinear),
        Err(FlagError::Collinear { frame: 1, .. })
    ));
}
