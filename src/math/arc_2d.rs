//! 2D arc math for round walls.
//!
//! A round wall is described by its chord (start and end points) and its
//! signed arc extent in radians: positive sweeps counter-clockwise in a
//! y-up frame.

use super::{Point2, Vector2, TOLERANCE};

/// Center-radius-angle form of an arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl ArcGeometry {
    /// Evaluates a point on the arc at parameter `t` in `[0, 1]`, at
    /// `radius + radial_offset` from the center.
    #[must_use]
    pub fn point_at(&self, t: f64, radial_offset: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        let r = self.radius + radial_offset;
        Point2::new(self.center.x + r * angle.cos(), self.center.y + r * angle.sin())
    }

    /// Length of the arc.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }
}

/// Builds the arc going from `start` to `end` with the given signed extent.
///
/// Returns `None` for a zero-length chord or a (near) zero extent.
#[must_use]
pub fn arc_from_extent(start: &Point2, end: &Point2, extent: f64) -> Option<ArcGeometry> {
    let chord = end - start;
    let chord_len = chord.norm();
    let half_sweep = extent * 0.5;
    if chord_len < TOLERANCE || half_sweep.sin().abs() < TOLERANCE {
        return None;
    }

    // Signed distance from the chord midpoint to the center, measured along
    // the left normal of the chord.
    let offset = chord_len * 0.5 / half_sweep.tan();
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = nalgebra::center(start, end) + normal * offset;
    let radius = (chord_len * 0.5 / half_sweep.sin()).abs();
    let start_angle = (start.y - center.y).atan2(start.x - center.x);

    Some(ArcGeometry {
        center,
        radius,
        start_angle,
        sweep: extent,
    })
}

/// Computes the number of line segments needed to approximate an arc
/// within the given chord deviation.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    #[test]
    fn semicircle_ccw_goes_through_bottom() {
        let arc = arc_from_extent(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), PI).unwrap();
        assert_abs_diff_eq!(arc.center.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.center.y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.radius, 1.0, epsilon = TOL);

        let end = arc.point_at(1.0, 0.0);
        assert_abs_diff_eq!(end.x, 2.0, epsilon = TOL);
        assert_abs_diff_eq!(end.y, 0.0, epsilon = TOL);

        let mid = arc.point_at(0.5, 0.0);
        assert_abs_diff_eq!(mid.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(mid.y, -1.0, epsilon = TOL);
    }

    #[test]
    fn semicircle_cw_goes_through_top() {
        let arc = arc_from_extent(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -PI).unwrap();
        let mid = arc.point_at(0.5, 0.0);
        assert_abs_diff_eq!(mid.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(mid.y, 1.0, epsilon = TOL);
    }

    #[test]
    fn quarter_circle_center_and_length() {
        let arc =
            arc_from_extent(&Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), PI / 2.0).unwrap();
        assert_abs_diff_eq!(arc.center.x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.center.y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(arc.length(), PI / 2.0, epsilon = TOL);
        let outer = arc.point_at(0.5, 0.5);
        assert_abs_diff_eq!(outer.x, 1.5 * (PI / 4.0).cos(), epsilon = TOL);
    }

    #[test]
    fn zero_extent_is_not_an_arc() {
        assert!(arc_from_extent(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 0.0).is_none());
        assert!(arc_from_extent(&Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0), PI).is_none());
    }

    #[test]
    fn subdivision_count_grows_with_precision() {
        assert_eq!(arc_subdivision_count(1.0, PI, 10.0), 1);
        assert!(arc_subdivision_count(1.0, PI, 0.001) > 10);
    }
}
