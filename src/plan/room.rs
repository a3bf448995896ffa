use crate::geometry::{Path2D, Region};
use crate::math::polygon_2d::polygon_area;
use crate::math::Point2;

use super::level::LevelId;
use super::style::SurfaceFinish;

slotmap::new_key_type! {
    /// Unique identifier for a room in the floor plan.
    pub struct RoomId;
}

/// A closed polygon with floor and ceiling finishes.
///
/// Rooms do not own walls; they only overlap them geometrically.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: Option<String>,
    pub points: Vec<Point2>,
    pub level: Option<LevelId>,
    pub area_visible: bool,
    pub floor: SurfaceFinish,
    pub ceiling: SurfaceFinish,
}

impl Room {
    /// Creates an unnamed room with visible floor and ceiling.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            name: None,
            points,
            level: None,
            area_visible: true,
            floor: SurfaceFinish::default(),
            ceiling: SurfaceFinish::default(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LevelId) -> Self {
        self.level = Some(level);
        self
    }

    /// Outline of the room as a closed path.
    #[must_use]
    pub fn outline(&self) -> Path2D {
        Path2D::from_points(&self.points, true)
    }

    /// Area covered by the room.
    #[must_use]
    pub fn region(&self) -> Region {
        Region::from_path(&self.outline())
    }

    /// Surface of the room's polygon.
    #[must_use]
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn square_room_area_and_region() {
        let room = Room::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(500.0, 0.0),
            Point2::new(500.0, 500.0),
            Point2::new(0.0, 500.0),
        ])
        .with_name("Living");
        assert_eq!(room.name.as_deref(), Some("Living"));
        assert_relative_eq!(room.area(), 250_000.0);
        assert_relative_eq!(room.region().total_area(), 250_000.0, epsilon = 1e-6);
        assert!(room.outline().closed);
    }
}
