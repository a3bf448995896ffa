use geo::{Coord, LineString, Polygon};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::path::Path2D;
use super::region::Region;

/// How the ends of a stroked path are finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// The stroke stops exactly at the end points.
    Butt,
    /// The stroke extends half its width beyond the end points.
    #[default]
    Square,
}

/// Pen used to turn a path into a thin area.
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    width: f64,
    cap: LineCap,
}

impl StrokeStyle {
    /// Creates a new stroke style with square caps.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64) -> Result<Self> {
        if width <= 0.0 || !width.is_finite() {
            return Err(GeometryError::InvalidParameter {
                parameter: "stroke width",
                value: width,
            }
            .into());
        }
        Ok(Self {
            width,
            cap: LineCap::default(),
        })
    }

    /// Sets the line cap.
    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the stroke width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Returns the line cap.
    #[must_use]
    pub fn cap(&self) -> LineCap {
        self.cap
    }

    /// Strokes a path into the area covered by the pen.
    ///
    /// Each segment becomes a ribbon rectangle; ribbons are merged, so
    /// joints between segments are filled by the overlap of the caps.
    /// Zero-length segments contribute nothing.
    #[must_use]
    pub fn stroke(&self, path: &Path2D) -> Region {
        path.segments()
            .filter_map(|(a, b)| self.segment_ribbon(&a, &b))
            .fold(Region::empty(), |acc, ribbon| {
                if acc.is_empty() {
                    ribbon
                } else {
                    acc.union(&ribbon)
                }
            })
    }

    fn segment_ribbon(&self, a: &Point2, b: &Point2) -> Option<Region> {
        let d = b - a;
        let len = d.norm();
        if len < TOLERANCE {
            return None;
        }
        let half = self.half_width();
        let dir: Vector2 = d / len;
        let normal = Vector2::new(-dir.y, dir.x) * half;
        let extension = match self.cap {
            LineCap::Butt => Vector2::zeros(),
            LineCap::Square => dir * half,
        };
        let start = a - extension;
        let end = b + extension;
        let corners = [start + normal, end + normal, end - normal, start - normal];
        let ring: LineString<f64> = corners.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        Some(Region::from_polygon(Polygon::new(ring, Vec::new())))
    }
}

impl Default for StrokeStyle {
    /// The 2-unit square-capped pen used to test wall sides against rooms.
    fn default() -> Self {
        Self {
            width: 2.0,
            cap: LineCap::Square,
        }
    }
}
