pub mod level;
mod outline;
pub mod room;
pub mod style;
pub mod wall;
pub mod wall_side;

pub use level::{Level, LevelId};
pub use room::{Room, RoomId};
pub use style::{Baseboard, Paint, SideFinish, SurfaceFinish, TextureRef};
pub use wall::{Join, Side, Wall, WallEnd, WallId};
pub use wall_side::WallSide;

use slotmap::SlotMap;

use crate::error::{PlanError, Result};

/// Default height given to walls without an explicit height.
pub const DEFAULT_WALL_HEIGHT: f64 = 250.0;

/// An item that can be part of the plan's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selectable {
    Wall(WallId),
    Room(RoomId),
}

/// The floor-plan document: central arena owning walls, rooms and levels.
///
/// Entities reference each other via typed IDs (generational indices).
/// Walls deleted from the plan stay in the arena, detached, so that undo
/// records can bring them back under the same ID; only walls listed in the
/// plan's wall collection are part of the document.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    walls: SlotMap<WallId, Wall>,
    wall_order: Vec<WallId>,
    rooms: SlotMap<RoomId, Room>,
    room_order: Vec<RoomId>,
    levels: SlotMap<LevelId, Level>,
    selection: Vec<Selectable>,
    /// Height used for walls whose height is unset.
    pub default_wall_height: f64,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self {
            walls: SlotMap::default(),
            wall_order: Vec::new(),
            rooms: SlotMap::default(),
            room_order: Vec::new(),
            levels: SlotMap::default(),
            selection: Vec::new(),
            default_wall_height: DEFAULT_WALL_HEIGHT,
        }
    }
}

impl FloorPlan {
    /// Creates a new, empty floor plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Level operations ---

    /// Inserts a level and returns its ID.
    pub fn add_level(&mut self, level: Level) -> LevelId {
        self.levels.insert(level)
    }

    /// Returns a reference to the level, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn level(&self, id: LevelId) -> Result<&Level> {
        Ok(self
            .levels
            .get(id)
            .ok_or(PlanError::EntityNotFound("level"))?)
    }

    /// Returns a mutable reference to the level, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn level_mut(&mut self, id: LevelId) -> Result<&mut Level> {
        Ok(self
            .levels
            .get_mut(id)
            .ok_or(PlanError::EntityNotFound("level"))?)
    }

    /// Returns `true` if items on `level` are shown. Items without a level
    /// are always viewable.
    #[must_use]
    pub fn is_viewable(&self, level: Option<LevelId>) -> bool {
        level
            .and_then(|id| self.levels.get(id))
            .map_or(true, |level| level.viewable)
    }

    /// Returns `true` if the wall stands on `level`, either because it
    /// belongs to it or because it rises from a lower level through the
    /// elevation of `level`.
    #[must_use]
    pub fn wall_is_at_level(&self, wall: &Wall, level: Option<LevelId>) -> bool {
        if wall.level == level {
            return true;
        }
        let (Some(wall_level), Some(level)) = (
            wall.level.and_then(|id| self.levels.get(id)),
            level.and_then(|id| self.levels.get(id)),
        ) else {
            return false;
        };
        let top = wall
            .height
            .unwrap_or(self.default_wall_height)
            .max(wall.height_at_end.unwrap_or(f64::MIN));
        wall_level.elevation < level.elevation && wall_level.elevation + top > level.elevation
    }

    // --- Wall operations ---

    /// Inserts a wall at the end of the plan's wall collection and returns
    /// its ID.
    pub fn add_wall(&mut self, wall: Wall) -> WallId {
        let id = self.walls.insert(wall);
        self.wall_order.push(id);
        id
    }

    /// Stores a wall in the arena without making it part of the plan.
    pub(crate) fn insert_detached_wall(&mut self, wall: Wall) -> WallId {
        self.walls.insert(wall)
    }

    /// Returns a reference to the wall data, or an error if not found.
    ///
    /// Detached walls are still found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall(&self, id: WallId) -> Result<&Wall> {
        Ok(self
            .walls
            .get(id)
            .ok_or(PlanError::EntityNotFound("wall"))?)
    }

    /// Returns a mutable reference to the wall data, or an error if not found.
    ///
    /// Chain links cannot be changed through this reference; use
    /// [`join_walls`](Self::join_walls) instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall_mut(&mut self, id: WallId) -> Result<&mut Wall> {
        Ok(self
            .walls
            .get_mut(id)
            .ok_or(PlanError::EntityNotFound("wall"))?)
    }

    /// Returns `true` if the wall is part of the plan.
    #[must_use]
    pub fn contains_wall(&self, id: WallId) -> bool {
        self.wall_order.contains(&id)
    }

    /// Position of the wall in the plan's wall collection.
    #[must_use]
    pub fn wall_index(&self, id: WallId) -> Option<usize> {
        self.wall_order.iter().position(|w| *w == id)
    }

    /// Iterates over the walls of the plan, in collection order.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &Wall)> + '_ {
        self.wall_order
            .iter()
            .filter_map(|id| self.walls.get(*id).map(|wall| (*id, wall)))
    }

    /// Number of walls in the plan.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.wall_order.len()
    }

    /// Removes a wall from the plan and clears every link pointing at it.
    ///
    /// The wall keeps its own links and stays in the arena, detached.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not part of the plan.
    pub fn delete_wall(&mut self, id: WallId) -> Result<()> {
        let index = self.wall_index(id).ok_or(PlanError::WallDetached(id))?;
        self.wall_order.remove(index);
        for other in &self.wall_order {
            if let Some(wall) = self.walls.get_mut(*other) {
                for end in [WallEnd::Start, WallEnd::End] {
                    let slot = wall.join_slot_mut(end);
                    if slot.is_some_and(|join| join.wall == id) {
                        *slot = None;
                    }
                }
            }
        }
        Ok(())
    }

    /// Puts a detached wall back into the plan, at `index` if given (clamped
    /// to the collection size) or at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found in the arena.
    pub fn reinsert_wall(&mut self, id: WallId, index: Option<usize>) -> Result<()> {
        self.wall(id)?;
        if self.contains_wall(id) {
            return Ok(());
        }
        match index {
            Some(i) => self.wall_order.insert(i.min(self.wall_order.len()), id),
            None => self.wall_order.push(id),
        }
        Ok(())
    }

    /// Drops a detached wall from the arena for good.
    pub(crate) fn discard_wall(&mut self, id: WallId) {
        if !self.contains_wall(id) {
            self.walls.remove(id);
        }
    }

    /// Joins end `end_a` of wall `a` to end `end_b` of wall `b`, in both
    /// directions.
    ///
    /// Walls previously joined at either end lose their link back to it, so
    /// re-joining an end never leaves a one-way link behind.
    ///
    /// # Errors
    ///
    /// Returns an error if either wall is not found or `a == b`.
    pub fn join_walls(&mut self, a: WallId, end_a: WallEnd, b: WallId, end_b: WallEnd) -> Result<()> {
        if a == b {
            return Err(PlanError::SelfJoin(a).into());
        }
        let to_b = Join::new(b, end_b);
        let to_a = Join::new(a, end_a);
        if self.wall(a)?.join(end_a) != Some(to_b) {
            self.unlink_partner(a, end_a);
        }
        if self.wall(b)?.join(end_b) != Some(to_a) {
            self.unlink_partner(b, end_b);
        }
        self.set_join(a, end_a, Some(to_b))?;
        self.set_join(b, end_b, Some(to_a))
    }

    /// Clears the link pointing back at end `end` of wall `id` from the wall
    /// currently joined there, if that link is mutual.
    fn unlink_partner(&mut self, id: WallId, end: WallEnd) {
        let Some(old) = self.walls.get(id).and_then(|wall| wall.join(end)) else {
            return;
        };
        if let Some(partner) = self.walls.get_mut(old.wall) {
            let slot = partner.join_slot_mut(old.end);
            if *slot == Some(Join::new(id, end)) {
                *slot = None;
            }
        }
    }

    /// Writes one direction of a chain link.
    pub(crate) fn set_join(&mut self, id: WallId, end: WallEnd, join: Option<Join>) -> Result<()> {
        *self.wall_mut(id)?.join_slot_mut(end) = join;
        Ok(())
    }

    /// Checks that every link between walls of the plan is mutual.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::ChainBroken` for the first link that points at a
    /// detached wall or is not mirrored by the neighbor, and
    /// `PlanError::SelfJoin` for a wall linked to itself.
    pub fn check_chain(&self) -> Result<()> {
        for (id, wall) in self.walls() {
            for end in [WallEnd::Start, WallEnd::End] {
                let Some(join) = wall.join(end) else {
                    continue;
                };
                if join.wall == id {
                    return Err(PlanError::SelfJoin(id).into());
                }
                let mirrored = self.contains_wall(join.wall)
                    && self
                        .walls
                        .get(join.wall)
                        .is_some_and(|neighbor| neighbor.join(join.end) == Some(Join::new(id, end)));
                if !mirrored {
                    return Err(PlanError::ChainBroken {
                        wall: id,
                        neighbor: join.wall,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    // --- Room operations ---

    /// Inserts a room at the end of the plan's room collection.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = self.rooms.insert(room);
        self.room_order.push(id);
        id
    }

    /// Returns a reference to the room data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        Ok(self
            .rooms
            .get(id)
            .ok_or(PlanError::EntityNotFound("room"))?)
    }

    /// Returns a mutable reference to the room data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        Ok(self
            .rooms
            .get_mut(id)
            .ok_or(PlanError::EntityNotFound("room"))?)
    }

    /// Iterates over the rooms of the plan, in collection order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.room_order
            .iter()
            .filter_map(|id| self.rooms.get(*id).map(|room| (*id, room)))
    }

    // --- Selection ---

    /// Returns the selected items, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[Selectable] {
        &self.selection
    }

    /// Replaces the selection.
    pub fn set_selection(&mut self, items: Vec<Selectable>) {
        self.selection = items;
    }

    /// Rooms among the selected items.
    #[must_use]
    pub fn selected_rooms(&self) -> Vec<RoomId> {
        self.selection
            .iter()
            .filter_map(|item| match item {
                Selectable::Room(id) => Some(*id),
                Selectable::Wall(_) => None,
            })
            .collect()
    }

    /// Replaces a selected wall by the walls it was split into.
    ///
    /// Returns `false` if the wall was not selected.
    pub(crate) fn replace_selected_wall(&mut self, wall: WallId, halves: [WallId; 2]) -> bool {
        let before = self.selection.len();
        self.selection.retain(|item| *item != Selectable::Wall(wall));
        if self.selection.len() == before {
            return false;
        }
        self.selection
            .extend(halves.iter().map(|half| Selectable::Wall(*half)));
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::WallsideError;
    use crate::math::Point2;

    fn wall(x0: f64, y0: f64, x1: f64, y1: f64) -> Wall {
        Wall::new(Point2::new(x0, y0), Point2::new(x1, y1), 10.0)
    }

    #[test]
    fn join_is_mutual() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        plan.join_walls(a, WallEnd::End, b, WallEnd::Start).unwrap();
        assert_eq!(plan.wall(a).unwrap().wall_at_end(), Some(b));
        assert_eq!(plan.wall(b).unwrap().wall_at_start(), Some(a));
        plan.check_chain().unwrap();
    }

    #[test]
    fn self_join_is_rejected() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let err = plan
            .join_walls(a, WallEnd::Start, a, WallEnd::End)
            .unwrap_err();
        assert!(matches!(err, WallsideError::Plan(PlanError::SelfJoin(_))));
    }

    #[test]
    fn folded_chain_of_two_walls() {
        // Two walls joined at both ends, the second running backwards.
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0).with_arc_extent(1.0));
        plan.join_walls(a, WallEnd::Start, b, WallEnd::Start).unwrap();
        plan.join_walls(a, WallEnd::End, b, WallEnd::End).unwrap();
        plan.check_chain().unwrap();
        assert_eq!(
            plan.wall(b).unwrap().join(WallEnd::End),
            Some(Join::new(a, WallEnd::End))
        );
    }

    #[test]
    fn rejoining_an_end_detaches_the_previous_neighbor() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        let c = plan.add_wall(wall(100.0, 0.0, 100.0, -100.0));
        plan.join_walls(a, WallEnd::End, b, WallEnd::Start).unwrap();
        plan.join_walls(a, WallEnd::End, c, WallEnd::Start).unwrap();

        plan.check_chain().unwrap();
        assert_eq!(plan.wall(a).unwrap().wall_at_end(), Some(c));
        assert_eq!(plan.wall(c).unwrap().wall_at_start(), Some(a));
        assert!(plan.wall(b).unwrap().wall_at_start().is_none());
    }

    #[test]
    fn rejoining_a_neighbor_at_another_end_moves_the_link() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        let c = plan.add_wall(wall(0.0, 0.0, 0.0, 100.0));
        plan.join_walls(a, WallEnd::End, b, WallEnd::Start).unwrap();
        plan.join_walls(c, WallEnd::Start, a, WallEnd::Start).unwrap();
        // b's start goes to c's start: both a's end and a's start lose their links.
        plan.join_walls(b, WallEnd::Start, c, WallEnd::Start).unwrap();

        plan.check_chain().unwrap();
        assert!(plan.wall(a).unwrap().wall_at_end().is_none());
        assert!(plan.wall(a).unwrap().wall_at_start().is_none());
        assert_eq!(
            plan.wall(c).unwrap().join(WallEnd::Start),
            Some(Join::new(b, WallEnd::Start))
        );
    }

    #[test]
    fn joining_twice_keeps_the_link() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        plan.join_walls(a, WallEnd::End, b, WallEnd::Start).unwrap();
        plan.join_walls(b, WallEnd::Start, a, WallEnd::End).unwrap();
        plan.check_chain().unwrap();
        assert_eq!(plan.wall(a).unwrap().wall_at_end(), Some(b));
    }

    #[test]
    fn one_sided_link_breaks_chain() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        plan.set_join(a, WallEnd::End, Some(Join::new(b, WallEnd::Start)))
            .unwrap();
        let err = plan.check_chain().unwrap_err();
        assert!(matches!(
            err,
            WallsideError::Plan(PlanError::ChainBroken { wall, neighbor }) if wall == a && neighbor == b
        ));
    }

    #[test]
    fn delete_detaches_neighbors_and_reinsert_restores_order() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        let c = plan.add_wall(wall(100.0, 100.0, 0.0, 100.0));
        plan.join_walls(a, WallEnd::End, b, WallEnd::Start).unwrap();
        plan.join_walls(b, WallEnd::End, c, WallEnd::Start).unwrap();

        plan.delete_wall(b).unwrap();
        assert!(!plan.contains_wall(b));
        assert_eq!(plan.wall_count(), 2);
        assert!(plan.wall(a).unwrap().wall_at_end().is_none());
        assert!(plan.wall(c).unwrap().wall_at_start().is_none());
        // The detached wall keeps its own links.
        assert_eq!(plan.wall(b).unwrap().wall_at_start(), Some(a));
        plan.check_chain().unwrap();

        plan.reinsert_wall(b, Some(1)).unwrap();
        let order: Vec<WallId> = plan.walls().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn deleting_a_detached_wall_fails() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        plan.delete_wall(a).unwrap();
        assert!(plan.delete_wall(a).is_err());
    }

    #[test]
    fn levels_and_viewability() {
        let mut plan = FloorPlan::new();
        let ground = plan.add_level(Level::new("Ground", 0.0, 250.0));
        let upper = plan.add_level(Level::new("Upper", 250.0, 250.0));
        let tall = wall(0.0, 0.0, 100.0, 0.0).with_level(ground).with_height(400.0);
        let short = wall(0.0, 0.0, 100.0, 0.0).with_level(ground);
        assert!(plan.wall_is_at_level(&tall, Some(upper)));
        assert!(!plan.wall_is_at_level(&short, Some(upper)));
        assert!(plan.wall_is_at_level(&short, Some(ground)));
        assert!(!plan.wall_is_at_level(&short, None));

        assert!(plan.is_viewable(Some(upper)));
        plan.level_mut(upper).unwrap().viewable = false;
        assert!(!plan.is_viewable(Some(upper)));
        assert!(plan.is_viewable(None));
    }

    #[test]
    fn replace_selected_wall() {
        let mut plan = FloorPlan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let h1 = plan.add_wall(wall(0.0, 0.0, 50.0, 0.0));
        let h2 = plan.add_wall(wall(50.0, 0.0, 100.0, 0.0));
        assert!(!plan.replace_selected_wall(a, [h1, h2]));
        plan.set_selection(vec![Selectable::Wall(a)]);
        assert!(plan.replace_selected_wall(a, [h1, h2]));
        assert_eq!(
            plan.selection(),
            &[Selectable::Wall(h1), Selectable::Wall(h2)]
        );
    }
}
