use super::{Point2, ENDPOINT_TOLERANCE, ON_SEGMENT_TOLERANCE_SQ, TOLERANCE};

/// Intersection of the infinite lines through `(p1, p2)` and `(p3, p4)`.
///
/// Returns `None` if the lines are parallel or either pair of points is
/// coincident.
#[must_use]
pub fn line_line_intersect_2d(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let t = ((p3.x - p1.x) * d2.y - (p3.y - p1.y) * d2.x) / cross;
    Some(p1 + d1 * t)
}

/// Squared distance from `p` to the segment `(a, b)`.
#[must_use]
pub fn point_segment_distance_sq(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return (p - a).norm_squared();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm_squared()
}

/// Finds the point where the segment `(b0, b1)` cuts the segment `(a0, a1)`,
/// suitable as a split point for the first segment.
///
/// The crossing must lie on `(a0, a1)` within [`ON_SEGMENT_TOLERANCE_SQ`] and
/// must not coincide with `a0` or `a1` within [`ENDPOINT_TOLERANCE`] on both
/// axes. The second segment is extended as an infinite line, so a segment
/// ending on the first one (a T junction) still yields a crossing.
#[must_use]
pub fn crossing_point(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<Point2> {
    let point = line_line_intersect_2d(a0, a1, b0, b1)?;
    if point_segment_distance_sq(&point, a0, a1) >= ON_SEGMENT_TOLERANCE_SQ {
        return None;
    }
    let near = |q: &Point2| {
        (q.x - point.x).abs() <= ENDPOINT_TOLERANCE && (q.y - point.y).abs() <= ENDPOINT_TOLERANCE
    };
    if near(a0) || near(a1) {
        return None;
    }
    Some(point)
}
