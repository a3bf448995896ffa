use tracing::{debug, info, trace};

use crate::error::{OperationError, Result};
use crate::geometry::Region;
use crate::history::{ensure_chain, ModifiedWall};
use crate::math::intersect_2d::crossing_point;
use crate::math::Point2;
use crate::plan::{FloorPlan, WallEnd, WallId, WallSide};

/// A crossing found between two walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPoint {
    /// The wall to split.
    pub wall: WallId,
    /// Where it gets split.
    pub point: Point2,
    /// The wall crossing it.
    pub crossing: WallId,
}

/// Result of an applied split pass.
#[derive(Debug, Clone, Default)]
pub struct SplitOutcome {
    /// Candidate sides rewritten to reference the split halves.
    pub wall_sides: Vec<WallSide>,
    /// Walls of the plan removed by the pass, in deletion order.
    pub deleted_walls: Vec<ModifiedWall>,
    /// Walls added to the plan by the pass, in insertion order.
    pub added_walls: Vec<ModifiedWall>,
    /// Every split performed: the split wall and its two halves.
    pub replaced: Vec<(WallId, [WallId; 2])>,
}

impl SplitOutcome {
    /// Returns `true` if at least one wall was split.
    #[must_use]
    pub fn did_split(&self) -> bool {
        !self.replaced.is_empty()
    }
}

/// Splits the walls of a set of wall sides where other walls of the set
/// cross them.
///
/// Splitting repeats until no crossing is left, because a split may expose
/// new crossings. Round walls are never split, and never used to split.
#[derive(Debug)]
pub struct SplitWalls {
    wall_sides: Vec<WallSide>,
    iteration_limit: Option<usize>,
}

impl SplitWalls {
    #[must_use]
    pub fn new(wall_sides: Vec<WallSide>) -> Self {
        Self {
            wall_sides,
            iteration_limit: None,
        }
    }

    /// Sets the maximum number of splits a pass may perform. Defaults to the
    /// square of the plan's wall count.
    #[must_use]
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Returns `true` if executing would split at least one wall. The plan
    /// is not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if a side's wall is not found.
    pub fn probe(&self, plan: &FloorPlan) -> Result<bool> {
        Ok(find_split(plan, &self.wall_sides)?.is_some())
    }

    /// Splits crossed walls in the plan: each split wall is replaced by two
    /// halves chained to each other and to the split wall's neighbors.
    /// Selected split walls are replaced by their halves in the selection.
    ///
    /// On error, the plan is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IterationLimit` if splitting does not settle
    /// within the limit, `PlanError::ChainBroken` if the resulting chains
    /// are inconsistent, or an error if a side's wall is not found.
    pub fn execute(&self, plan: &mut FloorPlan) -> Result<SplitOutcome> {
        let backup = plan.clone();
        let result = self.split_all(plan);
        if result.is_err() {
            *plan = backup;
        }
        result
    }

    fn split_all(&self, plan: &mut FloorPlan) -> Result<SplitOutcome> {
        let limit = self
            .iteration_limit
            .unwrap_or_else(|| plan.wall_count().pow(2).max(1));
        let mut sides = self.wall_sides.clone();
        let mut deleted_walls = Vec::new();
        let mut added: Vec<WallId> = Vec::new();
        let mut replaced = Vec::new();

        while let Some(split) = find_split(plan, &sides)? {
            if replaced.len() == limit {
                return Err(OperationError::IterationLimit { limit }.into());
            }
            // Only walls that were in the plan before the pass need undoing.
            let original = !added.contains(&split.wall);
            if original {
                deleted_walls.push(ModifiedWall::capture(plan, split.wall)?);
            }

            let [first, second] = split_wall(plan, split.wall, split.point)?;
            info!(
                wall = ?split.wall,
                crossing = ?split.crossing,
                x = split.point.x,
                y = split.point.y,
                "split wall"
            );

            // A half split again never existed outside this pass.
            plan.delete_wall(split.wall)?;
            if !original {
                added.retain(|id| *id != split.wall);
                plan.discard_wall(split.wall);
            }
            added.extend([first, second]);

            // Later scans see the halves in place of the split wall.
            sides = rewrite_sides(plan, &sides, split.wall, first, second)?;
            plan.replace_selected_wall(split.wall, [first, second]);
            replaced.push((split.wall, [first, second]));
        }

        ensure_chain(plan)?;
        // Capture the halves once their links are final.
        let added_walls = added
            .iter()
            .map(|id| ModifiedWall::capture(plan, *id))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            splits = replaced.len(),
            deleted = deleted_walls.len(),
            added = added_walls.len(),
            "split pass settled"
        );
        Ok(SplitOutcome {
            wall_sides: sides,
            deleted_walls,
            added_walls,
            replaced,
        })
    }
}

/// Scans the sides for the first pair of distinct straight walls whose
/// outlines overlap in a single region and whose center lines cross inside
/// the first wall.
///
/// Round walls are skipped on both sides of the pair, not only as the wall
/// to split: an arc has no straight center line to cross with.
fn find_split(plan: &FloorPlan, sides: &[WallSide]) -> Result<Option<SplitPoint>> {
    // Outlines depend on the current joins, so compute them once per scan.
    let mut areas = Vec::with_capacity(sides.len());
    for side in sides {
        let wall = plan.wall(side.wall())?;
        areas.push(if wall.is_round() {
            None
        } else {
            Some(Region::from_outline(&plan.wall_points(side.wall())?))
        });
    }

    for (side, area) in sides.iter().zip(&areas) {
        let Some(area) = area else {
            continue;
        };
        let wall = plan.wall(side.wall())?;
        for (other_side, other_area) in sides.iter().zip(&areas) {
            if other_side.wall() == side.wall() {
                continue;
            }
            let Some(other_area) = other_area else {
                continue;
            };
            let overlap = other_area.intersection(area);
            if overlap.is_empty() || !overlap.is_singular() {
                continue;
            }
            let other = plan.wall(other_side.wall())?;
            let Some(point) = crossing_point(&wall.start, &wall.end, &other.start, &other.end)
            else {
                continue;
            };
            if !halves_long_enough(&wall.start, &wall.end, &point, other.thickness) {
                trace!(
                    wall = ?side.wall(),
                    crossing = ?other_side.wall(),
                    "split skipped, halves too short"
                );
                continue;
            }
            return Ok(Some(SplitPoint {
                wall: side.wall(),
                point,
                crossing: other_side.wall(),
            }));
        }
    }
    Ok(None)
}

/// Returns `true` if both parts of segment `start`-`end` cut at `point` are
/// longer than half of `crossing_thickness`.
pub(crate) fn halves_long_enough(
    start: &Point2,
    end: &Point2,
    point: &Point2,
    crossing_thickness: f64,
) -> bool {
    let min_length = crossing_thickness / 2.0;
    nalgebra::distance(start, point) > min_length && nalgebra::distance(point, end) > min_length
}

/// Adds the two halves of `id` to the plan and moves the chain over to
/// them. The split wall is left without links; its snapshot keeps them.
fn split_wall(plan: &mut FloorPlan, id: WallId, point: Point2) -> Result<[WallId; 2]> {
    let wall = plan.wall(id)?;
    let (at_start, at_end) = (wall.join(WallEnd::Start), wall.join(WallEnd::End));
    let (first, second) = wall.split_at(point);

    let first = plan.add_wall(first);
    let second = plan.add_wall(second);
    plan.join_walls(first, WallEnd::End, second, WallEnd::Start)?;
    if let Some(join) = at_start {
        plan.join_walls(first, WallEnd::Start, join.wall, join.end)?;
    }
    if let Some(join) = at_end {
        plan.join_walls(second, WallEnd::End, join.wall, join.end)?;
    }
    Ok([first, second])
}

/// Replaces each side of the split wall by the same side of both halves,
/// and points cached links at the halves.
fn rewrite_sides(
    plan: &FloorPlan,
    sides: &[WallSide],
    replaced: WallId,
    first: WallId,
    second: WallId,
) -> Result<Vec<WallSide>> {
    let mut rewritten = Vec::with_capacity(sides.len() + 2);
    for side in sides {
        if side.wall() == replaced {
            rewritten.push(WallSide::new(plan, first, side.side())?);
            rewritten.push(WallSide::new(plan, second, side.side())?);
        } else {
            let mut side = *side;
            side.redirect_joins(replaced, first, second);
            rewritten.push(side);
        }
    }
    Ok(rewritten)
}
