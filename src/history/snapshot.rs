use crate::error::Result;
use crate::plan::{
    FloorPlan, Join, LevelId, Room, RoomId, SideFinish, SurfaceFinish, WallEnd, WallId, WallSide,
};

/// Visual attributes of a room before an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifiedRoom {
    room: RoomId,
    name: Option<String>,
    area_visible: bool,
    floor: SurfaceFinish,
    ceiling: SurfaceFinish,
}

impl ModifiedRoom {
    /// Captures the current attributes of a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not found.
    pub fn capture(plan: &FloorPlan, id: RoomId) -> Result<Self> {
        let Room {
            name,
            area_visible,
            floor,
            ceiling,
            ..
        } = plan.room(id)?;
        Ok(Self {
            room: id,
            name: name.clone(),
            area_visible: *area_visible,
            floor: floor.clone(),
            ceiling: ceiling.clone(),
        })
    }

    #[must_use]
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Writes the captured attributes back.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not found.
    pub fn reset(&self, plan: &mut FloorPlan) -> Result<()> {
        let room = plan.room_mut(self.room)?;
        room.name.clone_from(&self.name);
        room.area_visible = self.area_visible;
        room.floor = self.floor.clone();
        room.ceiling = self.ceiling.clone();
        Ok(())
    }
}

/// Finish of a wall side before an edit, with the chain links cached by
/// the side.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifiedWallSide {
    side: WallSide,
    finish: SideFinish,
}

impl ModifiedWallSide {
    /// Captures the current finish of a wall side.
    ///
    /// # Errors
    ///
    /// Returns an error if the side's wall is not found.
    pub fn capture(plan: &FloorPlan, side: WallSide) -> Result<Self> {
        let finish = plan.wall(side.wall())?.side(side.side()).clone();
        Ok(Self { side, finish })
    }

    #[must_use]
    pub fn wall_side(&self) -> WallSide {
        self.side
    }

    /// Restores the finish, then re-threads the cached links whose walls
    /// are both part of the plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the side's wall is not found.
    pub fn reset(&self, plan: &mut FloorPlan) -> Result<()> {
        let id = self.side.wall();
        *plan.wall_mut(id)?.side_mut(self.side.side()) = self.finish.clone();
        if !plan.contains_wall(id) {
            return Ok(());
        }
        for end in [WallEnd::Start, WallEnd::End] {
            if let Some(join) = self.side.join(end) {
                if plan.contains_wall(join.wall) {
                    plan.join_walls(id, end, join.wall, join.end)?;
                }
            }
        }
        Ok(())
    }
}

/// A wall deleted or added by splitting, with its place in the plan and
/// its chain links at capture time.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifiedWall {
    wall: WallId,
    level: Option<LevelId>,
    index: Option<usize>,
    at_start: Option<Join>,
    at_end: Option<Join>,
}

impl ModifiedWall {
    /// Captures a wall as it currently stands.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found.
    pub fn capture(plan: &FloorPlan, id: WallId) -> Result<Self> {
        let wall = plan.wall(id)?;
        Ok(Self {
            wall: id,
            level: wall.level,
            index: plan.wall_index(id),
            at_start: wall.join(WallEnd::Start),
            at_end: wall.join(WallEnd::End),
        })
    }

    #[must_use]
    pub fn wall(&self) -> WallId {
        self.wall
    }

    /// Position the wall had in the plan's wall collection.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Captured link at the given end.
    #[must_use]
    pub fn join(&self, end: WallEnd) -> Option<Join> {
        match end {
            WallEnd::Start => self.at_start,
            WallEnd::End => self.at_end,
        }
    }

    /// Puts the wall back into the plan, at its captured index when
    /// `at_index` is set or at the end otherwise, and re-threads its links.
    pub(crate) fn restore(&self, plan: &mut FloorPlan, at_index: bool) -> Result<()> {
        plan.reinsert_wall(self.wall, if at_index { self.index } else { None })?;
        plan.wall_mut(self.wall)?.level = self.level;
        self.reset_joins(plan)
    }

    /// Re-threads the captured links. Links to walls that are not part of
    /// the plan are cleared on this wall only; they get written again when
    /// the neighbor comes back.
    pub(crate) fn reset_joins(&self, plan: &mut FloorPlan) -> Result<()> {
        for end in [WallEnd::Start, WallEnd::End] {
            match self.join(end) {
                Some(join) if plan.contains_wall(join.wall) => {
                    plan.join_walls(self.wall, end, join.wall, join.end)?;
                }
                _ => plan.set_join(self.wall, end, None)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::plan::{Paint, Side, Wall};

    fn wall(x0: f64, y0: f64, x1: f64, y1: f64) -> Wall {
        Wall::new(Point2::new(x0, y0), Point2::new(x1, y1), 10.0)
    }

    #[test]
    fn room_reset_restores_attributes() {
        let mut plan = FloorPlan::new();
        let id = plan.add_room(
            Room::new(vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
            ])
            .with_name("Hall"),
        );
        let before = plan.room(id).unwrap().clone();
        let snapshot = ModifiedRoom::capture(&plan, id).unwrap();

        let room = plan.room_mut(id).unwrap();
        room.name = Some("Kitchen".into());
        room.area_visible = false;
        room.floor.set_paint(&Paint::Color(0xFF));
        room.ceiling.visible = false;

        snapshot.reset(&mut plan).unwrap();
        assert_eq!(plan.room(id).unwrap(), &before);
    }

    #[test]
    fn wall_side_reset_restores_finish_of_that_side_only() {
        let mut plan = FloorPlan::new();
        let id = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let side = WallSide::new(&plan, id, Side::Left).unwrap();
        let snapshot = ModifiedWallSide::capture(&plan, side).unwrap();

        let w = plan.wall_mut(id).unwrap();
        w.left_side.set_paint(&Paint::Color(0x10));
        w.left_side.shininess = 0.5;
        w.right_side.set_paint(&Paint::Color(0x20));

        snapshot.reset(&mut plan).unwrap();
        let w = plan.wall(id).unwrap();
        assert_eq!(w.left_side, SideFinish::default());
        assert_eq!(w.right_side.paint(), Paint::Color(0x20));
    }

    #[test]
    fn wall_side_reset_rethreads_live_links() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        plan.join_walls(a, WallEnd::End, b, WallEnd::Start).unwrap();
        let snapshot = ModifiedWallSide::capture(&plan, WallSide::new(&plan, a, Side::Right).unwrap())
            .unwrap();

        plan.set_join(a, WallEnd::End, None).unwrap();
        plan.set_join(b, WallEnd::Start, None).unwrap();
        snapshot.reset(&mut plan).unwrap();
        assert_eq!(plan.wall(a).unwrap().wall_at_end(), Some(b));
        plan.check_chain().unwrap();
    }

    #[test]
    fn restore_puts_wall_back_at_its_index_with_links() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        let c = plan.add_wall(wall(100.0, 100.0, 0.0, 100.0));
        plan.join_walls(a, WallEnd::End, b, WallEnd::Start).unwrap();
        plan.join_walls(b, WallEnd::End, c, WallEnd::Start).unwrap();

        let snapshot = ModifiedWall::capture(&plan, b).unwrap();
        assert_eq!(snapshot.index(), Some(1));
        plan.delete_wall(b).unwrap();

        snapshot.restore(&mut plan, true).unwrap();
        let order: Vec<WallId> = plan.walls().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, b, c]);
        assert_eq!(plan.wall(a).unwrap().wall_at_end(), Some(b));
        assert_eq!(plan.wall(c).unwrap().wall_at_start(), Some(b));
        plan.check_chain().unwrap();
    }

    #[test]
    fn reset_joins_clears_links_to_detached_walls() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        plan.join_walls(a, WallEnd::End, b, WallEnd::Start).unwrap();
        let snapshot = ModifiedWall::capture(&plan, a).unwrap();
        plan.delete_wall(a).unwrap();
        plan.delete_wall(b).unwrap();

        snapshot.restore(&mut plan, false).unwrap();
        assert!(plan.wall(a).unwrap().wall_at_end().is_none());
        plan.check_chain().unwrap();
    }
}
