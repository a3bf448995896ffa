use crate::error::Result;
use crate::geometry::Path2D;
use crate::math::Point2;

use super::wall::{Join, Side, Wall, WallEnd, WallId};
use super::FloorPlan;

/// One face of one wall, addressable on its own.
///
/// The wall's chain links are cached at construction, because splitting may
/// replace the wall this side was built from; the cache is what lets a
/// snapshot re-thread the chain on undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSide {
    wall: WallId,
    side: Side,
    at_start: Option<Join>,
    at_end: Option<Join>,
}

impl WallSide {
    /// Creates the side of a wall stored in the plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found.
    pub fn new(plan: &FloorPlan, wall: WallId, side: Side) -> Result<Self> {
        Ok(Self::from_wall(wall, plan.wall(wall)?, side))
    }

    /// Creates a side from wall data already at hand.
    #[must_use]
    pub fn from_wall(id: WallId, wall: &Wall, side: Side) -> Self {
        Self {
            wall: id,
            side,
            at_start: wall.join(WallEnd::Start),
            at_end: wall.join(WallEnd::End),
        }
    }

    #[must_use]
    pub fn wall(&self) -> WallId {
        self.wall
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Chain link of the wall at the given end, as cached.
    #[must_use]
    pub fn join(&self, end: WallEnd) -> Option<Join> {
        match end {
            WallEnd::Start => self.at_start,
            WallEnd::End => self.at_end,
        }
    }

    /// Rewrites cached links that pointed at `replaced`, sending its start
    /// to `first` and its end to `second`.
    pub(crate) fn redirect_joins(&mut self, replaced: WallId, first: WallId, second: WallId) {
        for slot in [&mut self.at_start, &mut self.at_end] {
            if let Some(join) = slot {
                if join.wall == replaced {
                    join.wall = match join.end {
                        WallEnd::Start => first,
                        WallEnd::End => second,
                    };
                }
            }
        }
    }

    /// Shape of this side used for geometric tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found.
    pub fn shape(&self, plan: &FloorPlan) -> Result<Path2D> {
        Ok(side_shape(&plan.wall_points(self.wall)?, self.side))
    }
}

/// Extracts one side from a wall outline.
///
/// A four-corner outline gives the straight segment between corners 0-1
/// (left) or 2-3 (right). Longer outlines (round walls) give the first or
/// second half of the corner list as an open polyline.
#[must_use]
pub fn side_shape(points: &[Point2], side: Side) -> Path2D {
    if points.len() == 4 {
        let segment = match side {
            Side::Left => vec![points[0], points[1]],
            Side::Right => vec![points[2], points[3]],
        };
        return Path2D::new(segment, false);
    }
    let half = points.len() / 2;
    let range = match side {
        Side::Left => &points[..half],
        Side::Right => &points[half..half * 2],
    };
    Path2D::from_points(range, false)
}
