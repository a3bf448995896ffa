use geo::{Coord, LineString, Polygon};

use crate::math::polygon_2d::{polyline_length, signed_area_2d};
use crate::math::Point2;

/// An ordered sequence of points joined by straight segments.
///
/// For closed paths, an implicit segment connects the last point back to
/// the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Path2D {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl Path2D {
    /// Builds a path from an ordered point sequence.
    #[must_use]
    pub fn new(points: Vec<Point2>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Builds a path from a point slice.
    #[must_use]
    pub fn from_points(points: &[Point2], closed: bool) -> Self {
        Self::new(points.to_vec(), closed)
    }

    /// Returns the number of segments in this path.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Iterates over the segments of the path, including the closing one.
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..self.segment_count()).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed area enclosed by the path, see [`signed_area_2d`].
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Total length of the path's segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        let mut length = polyline_length(&self.points);
        if self.closed && self.points.len() > 2 {
            length += nalgebra::distance(&self.points[self.points.len() - 1], &self.points[0]);
        }
        length
    }

    /// Converts the path to a polygon outline, treating it as closed.
    ///
    /// Returns `None` when fewer than 3 points are available.
    #[must_use]
    pub fn to_polygon(&self) -> Option<Polygon<f64>> {
        if self.points.len() < 3 {
            return None;
        }
        let ring: LineString<f64> = self
            .points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        Some(Polygon::new(ring, Vec::new()))
    }
}
