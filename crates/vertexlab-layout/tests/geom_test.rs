use vertexlab_layout::geom::{point, segments_intersect};

#[test]
fn perpendicular_segments_cross() {
    let a1 = point(0.0, -100.0);
    let a2 = point(0.0, 100.0);
    let b1 = point(-100.0, 0.0);
    let b2 = point(100.0, 0.0);
    assert!(segments_intersect(a1, a2, b1, b2));
    assert!(segments_intersect(b1, b2, a1, a2));
    assert!(segments_intersect(a2, a1, b2, b1));
}

#[test]
fn parallel_sides_do_not_cross() {
    let a1 = point(0.0, -100.0);
    let a2 = point(0.0, 100.0);
    let b1 = point(-100.0, 0.0);
    let b2 = point(100.0, 0.0);
    assert!(!segments_intersect(a1, b1, a2, b2));
}

#[test]
fn shared_endpoint_counts_as_crossing() {
    let a1 = point(0.0, -100.0);
    let b1 = point(-100.0, 0.0);
    let b2 = point(100.0, 0.0);
    assert!(segments_intersect(a1, b1, a1, b2));
}

#[test]
fn skewed_segments_cross() {
    let a1 = point(1.0, 1.0);
    let a2 = point(3.0, 2.0);
    let b1 = point(1.0, 4.0);
    let b2 = point(2.0, -1.0);
    assert!(segments_intersect(a1, a2, b1, b2));
    assert!(segments_intersect(b1, b2, a1, a2));
}

#[test]
fn disjoint_and_collinear_segments_do_not_cross() {
    assert!(!segments_intersect(
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(2.0, 1.0),
        point(3.0, -1.0)
    ));
    assert!(!segments_intersect(
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(1.0, 0.0),
        point(3.0, 0.0)
    ));
}

#[test]
fn crossing_is_symmetric_over_a_grid() {
    let pts: Vec<_> = (0..4)
        .flat_map(|x| (0..3).map(move |y| point(x as f64 * 1.5, (y * y) as f64)))
        .collect();
    for &a1 in &pts {
        for &a2 in &pts {
            for &b1 in &pts {
                for &b2 in &pts {
                    assert_eq!(
                        segments_intersect(a1, a2, b1, b2),
                        segments_intersect(b1, b2, a1, a2),
                        "{a1:?}-{a2:?} vs {b1:?}-{b2:?}"
                    );
                }
            }
        }
    }
}
