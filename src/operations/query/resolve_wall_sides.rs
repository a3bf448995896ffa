use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{Region, StrokeStyle};
use crate::math::Point2;
use crate::plan::wall_side::side_shape;
use crate::plan::{FloorPlan, RoomId, Side, WallSide};

/// Parameters controlling how wall sides are matched against rooms.
#[derive(Debug, Clone, Copy)]
pub struct ResolverParams {
    /// Pen used to thicken a wall side into a testable area.
    pub stroke: StrokeStyle,
    /// Fraction of the stroked side that must fall inside the room.
    pub overlap_ratio: f64,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::default(),
            overlap_ratio: 0.02,
        }
    }
}

/// Finds the wall sides bordering a set of rooms.
///
/// Each side is stroked with a thin pen; it borders a room when the part of
/// the stroke inside the room exceeds a small fraction of the whole stroke,
/// which filters out walls merely touching the room at a corner.
///
/// Candidates are either every wall standing on the room's level (on a
/// viewable level), or an explicit list of sides, typically the result of a
/// previous resolution updated by a split.
#[derive(Debug)]
pub struct ResolveWallSides {
    rooms: Vec<RoomId>,
    candidates: Option<Vec<WallSide>>,
    params: ResolverParams,
}

impl ResolveWallSides {
    /// Creates a query over the plan's walls.
    #[must_use]
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self {
            rooms,
            candidates: None,
            params: ResolverParams::default(),
        }
    }

    /// Restricts the query to the given wall sides.
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<WallSide>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// Sets custom matching parameters.
    #[must_use]
    pub fn with_params(mut self, params: ResolverParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// Sides are listed room by room, in room order; within a room, in wall
    /// (or candidate) order with the left side before the right one. A side
    /// bordering several rooms is listed once per room.
    ///
    /// # Errors
    ///
    /// Returns an error if a room or a candidate's wall is not found.
    pub fn execute(&self, plan: &FloorPlan) -> Result<Vec<WallSide>> {
        let mut sides = Vec::new();
        for &room_id in &self.rooms {
            let room = plan.room(room_id)?;
            let room_area = room.region();
            let before = sides.len();

            if let Some(candidates) = &self.candidates {
                for side in candidates {
                    let points = plan.wall_points(side.wall())?;
                    if self.borders(&points, side.side(), &room_area) {
                        sides.push(*side);
                    }
                }
            } else {
                for (wall_id, wall) in plan.walls() {
                    if !plan.is_viewable(wall.level) || !plan.wall_is_at_level(wall, room.level) {
                        continue;
                    }
                    let points = plan.wall_points(wall_id)?;
                    for side in [Side::Left, Side::Right] {
                        if self.borders(&points, side, &room_area) {
                            sides.push(WallSide::from_wall(wall_id, wall, side));
                        }
                    }
                }
            }
            debug!(
                room = ?room_id,
                sides = sides.len() - before,
                "resolved bordering wall sides"
            );
        }
        Ok(sides)
    }

    fn borders(&self, wall_points: &[Point2], side: Side, room_area: &Region) -> bool {
        let stroked = self.params.stroke.stroke(&side_shape(wall_points, side));
        let side_surface = stroked.total_area();
        let inside = stroked.intersection(room_area);
        if inside.is_empty() {
            return false;
        }
        let inside_surface = inside.total_area();
        trace!(?side, side_surface, inside_surface, "wall side overlap");
        exceeds_ratio(inside_surface, side_surface, self.params.overlap_ratio)
    }
}

/// Returns `true` if `part` is strictly greater than `ratio` of `whole`.
#[must_use]
pub fn exceeds_ratio(part: f64, whole: f64, ratio: f64) -> bool {
    part > whole * ratio
}
