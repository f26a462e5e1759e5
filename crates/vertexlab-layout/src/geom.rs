//! 2D geometry helpers shared by the layout and de-intersection passes.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Sign of `v` with an exact zero mapping to zero (`f64::signum` maps `+0.0` to `1.0`).
fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Whether segment `a1-a2` crosses segment `b1-b2`.
///
/// Each segment's endpoints must fall on different sides of the other segment's line, compared
/// by the sign of the cross product. A zero cross product has its own sign, so a shared endpoint
/// still counts when the other endpoints are on opposite sides, while fully collinear segments
/// never intersect.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let cut_a = a2 - a1;
    let cut_b = b2 - b1;

    if sign(cut_a.cross(b1 - a1)) == sign(cut_a.cross(b2 - a1)) {
        return false;
    }
    if sign(cut_b.cross(a1 - b1)) == sign(cut_b.cross(a2 - b1)) {
        return false;
    }
    true
}

/// Displacement from the closest point of segment `p1-p2` to `point`.
pub fn min_vector_from_segment_to_point(p1: Point, p2: Point, point: Point) -> Vector {
    let seg = p2 - p1;
    let len_sq = seg.square_length();
    if len_sq == 0.0 {
        return point - p1;
    }
    let t = ((point - p1).dot(seg) / len_sq).clamp(0.0, 1.0);
    point - (p1 + seg * t)
}

/// Replaces non-finite components with zero.
pub fn sanitize(v: Vector) -> Vector {
    let fix = |c: f64| if c.is_finite() { c } else { 0.0 };
    vector(fix(v.x), fix(v.y))
}
