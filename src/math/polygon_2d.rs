use super::Point2;

/// Computes the signed area of a closed polygon with the shoelace sum
/// `Σ (xᵢ·yᵢ₋₁ − yᵢ·xᵢ₋₁) / 2`, wrapping from the last vertex to the first.
///
/// Positive for clockwise winding in a y-up frame, which is counter-clockwise
/// on a y-down screen. Callers needing the surface take the absolute value.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut prev = points[n - 1];
    for pt in points {
        sum += pt.x * prev.y - pt.y * prev.x;
        prev = *pt;
    }
    sum * 0.5
}

/// Returns the unsigned area of a closed polygon.
#[must_use]
pub fn polygon_area(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Returns the length of an open polyline.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| nalgebra::distance(&w[0], &w[1]))
        .sum()
}
