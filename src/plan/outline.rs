use crate::error::Result;
use crate::math::arc_2d::{arc_from_extent, arc_subdivision_count};
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::Point2;

use super::wall::{Wall, WallEnd, WallId};
use super::FloorPlan;

/// Maximum deviation between a round wall's outline and the true arc.
const ARC_TOLERANCE: f64 = 0.5;

impl FloorPlan {
    /// Outline of a wall as an ordered corner list: the left side from start
    /// to end, then the right side from end to start.
    ///
    /// Straight walls have four corners, mitred against the straight walls
    /// joined at their ends. Round walls have an arc outline of more than
    /// four points and are not mitred.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found.
    pub fn wall_points(&self, id: WallId) -> Result<Vec<Point2>> {
        let wall = self.wall(id)?;
        if let Some(points) = round_wall_points(wall) {
            return Ok(points);
        }

        // Start from the square outline, then mitre each joined end.
        let mut p = wall.unjoined_points();
        if let Some(join) = wall.join(WallEnd::Start) {
            if let Some(neighbor) = self.straight_neighbor(join.wall) {
                let n = neighbor.unjoined_points();
                let limit = 2.0 * wall.thickness.max(neighbor.thickness);
                // A neighbor joined by its start runs the other way, so its
                // sides swap.
                match join.end {
                    WallEnd::End => {
                        p[0] = miter(p[0], p[1], n[1], n[0], limit);
                        p[3] = miter(p[3], p[2], n[2], n[3], limit);
                    }
                    WallEnd::Start => {
                        p[0] = miter(p[0], p[1], n[2], n[3], limit);
                        p[3] = miter(p[3], p[2], n[0], n[1], limit);
                    }
                }
            }
        }
        if let Some(join) = wall.join(WallEnd::End) {
            if let Some(neighbor) = self.straight_neighbor(join.wall) {
                let n = neighbor.unjoined_points();
                let limit = 2.0 * wall.thickness.max(neighbor.thickness);
                match join.end {
                    WallEnd::Start => {
                        p[1] = miter(p[1], p[0], n[0], n[1], limit);
                        p[2] = miter(p[2], p[3], n[3], n[2], limit);
                    }
                    WallEnd::End => {
                        p[1] = miter(p[1], p[0], n[3], n[2], limit);
                        p[2] = miter(p[2], p[3], n[0], n[1], limit);
                    }
                }
            }
        }
        Ok(p.to_vec())
    }

    fn straight_neighbor(&self, id: WallId) -> Option<&Wall> {
        self.wall(id).ok().filter(|wall| !wall.is_round())
    }
}

/// Returns where line `(corner, toward)` meets line `(a, b)`, or `corner`
/// itself if the lines are parallel or the meeting point is `limit` or more
/// away from `corner`.
fn miter(corner: Point2, toward: Point2, a: Point2, b: Point2, limit: f64) -> Point2 {
    match line_line_intersect_2d(&corner, &toward, &a, &b) {
        Some(point) if nalgebra::distance_squared(&corner, &point) < limit * limit => point,
        _ => corner,
    }
}

fn round_wall_points(wall: &Wall) -> Option<Vec<Point2>> {
    if !wall.is_round() {
        return None;
    }
    let arc = arc_from_extent(&wall.start, &wall.end, wall.arc_extent?)?;
    let half = wall.thickness * 0.5;
    let count = arc_subdivision_count(arc.radius + half, arc.sweep.abs(), ARC_TOLERANCE).max(2);
    // The left side lies outside the circle for counter-clockwise arcs.
    let left_offset = if arc.sweep > 0.0 { half } else { -half };

    let mut points = Vec::with_capacity(2 * (count as usize + 1));
    for i in 0..=count {
        points.push(arc.point_at(f64::from(i) / f64::from(count), left_offset));
    }
    for i in (0..=count).rev() {
        points.push(arc.point_at(f64::from(i) / f64::from(count), -left_offset));
    }
    Some(points)
}
