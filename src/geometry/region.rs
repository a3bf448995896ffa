use geo::{BooleanOps, LineString, MultiPolygon, Polygon};

use crate::math::polygon_2d::polygon_area;
use crate::math::Point2;

use super::path::Path2D;

/// A planar area made of one or more closed contours.
///
/// Regions are normalized through the boolean engine on construction, so a
/// self-intersecting outline is resolved into simple contours the same way
/// a boolean result is.
#[derive(Debug, Clone)]
pub struct Region {
    shape: MultiPolygon<f64>,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            shape: MultiPolygon::new(Vec::new()),
        }
    }
}

impl Region {
    /// Returns an empty region.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the region enclosed by a path, treating it as closed.
    ///
    /// Paths with fewer than 3 points enclose nothing.
    #[must_use]
    pub fn from_path(path: &Path2D) -> Self {
        match path.to_polygon() {
            Some(polygon) => Self::from_polygon(polygon),
            None => Self::empty(),
        }
    }

    /// Builds the region enclosed by a closed point outline.
    #[must_use]
    pub fn from_outline(points: &[Point2]) -> Self {
        Self::from_path(&Path2D::from_points(points, true))
    }

    /// Builds a normalized region from a single polygon.
    #[must_use]
    pub fn from_polygon(polygon: Polygon<f64>) -> Self {
        let raw = MultiPolygon::new(vec![polygon]);
        Self {
            shape: raw.union(&MultiPolygon::new(Vec::new())),
        }
    }

    /// Intersection of two regions.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            shape: self.shape.intersection(&other.shape),
        }
    }

    /// Union of two regions.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            shape: self.shape.union(&other.shape),
        }
    }

    /// Returns `true` if the region has no contour.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape.0.is_empty()
    }

    /// Returns `true` if the region is one connected piece bounded by a
    /// single contour (no holes, no separate islands).
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.shape.0.len() == 1 && self.shape.0[0].interiors().is_empty()
    }

    /// Number of closed contours in the region, holes included.
    #[must_use]
    pub fn contour_count(&self) -> usize {
        self.shape
            .0
            .iter()
            .map(|polygon| 1 + polygon.interiors().len())
            .sum()
    }

    /// Sums the unsigned area of every contour independently.
    ///
    /// Hole contours are added, not subtracted. This matches the surface
    /// measure the boundary threshold was calibrated with and is only an
    /// approximation of the true area for regions with holes.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.shape
            .0
            .iter()
            .map(|polygon| {
                ring_area(polygon.exterior())
                    + polygon.interiors().iter().map(ring_area).sum::<f64>()
            })
            .sum()
    }
}

/// Unsigned shoelace area of a closed ring.
fn ring_area(ring: &LineString<f64>) -> f64 {
    let mut points: Vec<Point2> = ring.coords().map(|c| Point2::new(c.x, c.y)).collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    polygon_area(&points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Region {
        Region::from_outline(&[
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    #[test]
    fn default_region_is_empty() {
        let r = Region::default();
        assert!(r.is_empty());
        assert_eq!(r.contour_count(), 0);
        let merged = Region::empty().union(&rect(0.0, 0.0, 4.0, 2.0));
        assert_relative_eq!(merged.total_area(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn rectangle_area() {
        let r = rect(0.0, 0.0, 4.0, 2.0);
        assert!(!r.is_empty());
        assert!(r.is_singular());
        assert_relative_eq!(r.total_area(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn winding_does_not_change_area() {
        let cw = Region::from_outline(&[
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.0, 0.0),
        ]);
        assert_relative_eq!(cw.total_area(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn overlapping_rectangles_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 20.0, 20.0);
        let i = a.intersection(&b);
        assert!(i.is_singular());
        assert_relative_eq!(i.total_area(), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn disjoint_rectangles_have_empty_intersection() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(5.0, 5.0, 6.0, 6.0);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn two_islands_are_not_singular() {
        // A U shape cut by a bar yields two separate pieces.
        let u = Region::from_outline(&[
            Point2::new(0.0, 0.0),
            Point2::new(30.0, 0.0),
            Point2::new(30.0, 30.0),
            Point2::new(20.0, 30.0),
            Point2::new(20.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 30.0),
            Point2::new(0.0, 30.0),
        ]);
        let bar = rect(-5.0, 20.0, 35.0, 25.0);
        let i = u.intersection(&bar);
        assert!(!i.is_empty());
        assert!(!i.is_singular());
        assert_eq!(i.contour_count(), 2);
        assert_relative_eq!(i.total_area(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn hole_area_is_added_not_subtracted() {
        let ring = rect(0.0, 0.0, 10.0, 10.0).union(&rect(20.0, 0.0, 30.0, 10.0));
        assert_eq!(ring.contour_count(), 2);

        let frame = Region::from_polygon(Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            vec![LineString::from(vec![
                (2.0, 2.0),
                (8.0, 2.0),
                (8.0, 8.0),
                (2.0, 8.0),
            ])],
        ));
        assert!(!frame.is_singular());
        assert_relative_eq!(frame.total_area(), 136.0, epsilon = 1e-9);
    }

    #[test]
    fn too_few_points_is_empty() {
        let r = Region::from_outline(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert!(r.is_empty());
        assert_relative_eq!(r.total_area(), 0.0);
    }
}
