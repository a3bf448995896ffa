use tracing::debug;

use crate::error::{OperationError, Result};
use crate::history::{EditState, ModifiedRoom, ModifiedWallSide, RoomsEdit};
use crate::operations::modification::SplitWalls;
use crate::operations::query::ResolveWallSides;
use crate::plan::{Baseboard, FloorPlan, Paint, RoomId, SideFinish, WallSide};

/// Attributes to set on rooms and on the wall sides bordering them.
///
/// `None` leaves an attribute unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomModification {
    pub name: Option<String>,
    pub area_visible: Option<bool>,
    pub floor_visible: Option<bool>,
    pub floor_paint: Option<Paint>,
    pub floor_shininess: Option<f64>,
    pub ceiling_visible: Option<bool>,
    pub ceiling_paint: Option<Paint>,
    pub ceiling_shininess: Option<f64>,
    pub wall_sides_paint: Option<Paint>,
    pub wall_sides_shininess: Option<f64>,
    /// `Some(None)` removes the baseboards.
    pub wall_sides_baseboard: Option<Option<Baseboard>>,
    /// Split the walls crossing the rooms' borders first, so that only the
    /// parts of walls facing the rooms get painted.
    pub split_surrounding_walls: bool,
}

impl RoomModification {
    /// Writes the attributes to the rooms and wall sides.
    pub(crate) fn apply(
        &self,
        plan: &mut FloorPlan,
        rooms: &[RoomId],
        sides: &[WallSide],
    ) -> Result<()> {
        for &id in rooms {
            let room = plan.room_mut(id)?;
            if let Some(name) = &self.name {
                room.name = Some(name.clone());
            }
            if let Some(visible) = self.area_visible {
                room.area_visible = visible;
            }
            if let Some(visible) = self.floor_visible {
                room.floor.visible = visible;
            }
            if let Some(paint) = &self.floor_paint {
                room.floor.set_paint(paint);
            }
            if let Some(shininess) = self.floor_shininess {
                room.floor.shininess = shininess;
            }
            if let Some(visible) = self.ceiling_visible {
                room.ceiling.visible = visible;
            }
            if let Some(paint) = &self.ceiling_paint {
                room.ceiling.set_paint(paint);
            }
            if let Some(shininess) = self.ceiling_shininess {
                room.ceiling.shininess = shininess;
            }
        }

        for side in sides {
            let finish = plan.wall_mut(side.wall())?.side_mut(side.side());
            if let Some(paint) = &self.wall_sides_paint {
                finish.set_paint(paint);
            }
            if let Some(shininess) = self.wall_sides_shininess {
                finish.shininess = shininess;
            }
            if let Some(baseboard) = &self.wall_sides_baseboard {
                finish.baseboard.clone_from(baseboard);
            }
        }
        Ok(())
    }
}

/// Applies a [`RoomModification`] to rooms and their bordering wall sides,
/// splitting surrounding walls first when asked to.
#[derive(Debug)]
pub struct ModifyRooms {
    rooms: Vec<RoomId>,
    modification: RoomModification,
}

impl ModifyRooms {
    #[must_use]
    pub fn new(rooms: Vec<RoomId>, modification: RoomModification) -> Self {
        Self { rooms, modification }
    }

    /// Wall sides bordering the rooms, each listed once.
    ///
    /// # Errors
    ///
    /// Returns an error if a room is not found.
    pub fn bordering_wall_sides(plan: &FloorPlan, rooms: &[RoomId]) -> Result<Vec<WallSide>> {
        Ok(unique_sides(
            ResolveWallSides::new(rooms.to_vec()).execute(plan)?,
        ))
    }

    /// Returns `true` if splitting the walls around the rooms would change
    /// the plan. Nothing is modified.
    ///
    /// # Errors
    ///
    /// Returns an error if a room is not found.
    pub fn split_available(plan: &FloorPlan, rooms: &[RoomId]) -> Result<bool> {
        SplitWalls::new(Self::bordering_wall_sides(plan, rooms)?).probe(plan)
    }

    /// Executes the modification and returns the record undoing it.
    ///
    /// On error, the plan is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if no room is given, and the
    /// errors of [`SplitWalls::execute`] when splitting.
    pub fn execute(&self, plan: &mut FloorPlan) -> Result<RoomsEdit> {
        if self.rooms.is_empty() {
            return Err(OperationError::InvalidInput("no room to modify".into()).into());
        }
        let backup = plan.clone();
        let result = self.modify(plan);
        if result.is_err() {
            *plan = backup;
        }
        result
    }

    fn modify(&self, plan: &mut FloorPlan) -> Result<RoomsEdit> {
        let old_selection = plan.selection().to_vec();
        let mut wall_sides = Self::bordering_wall_sides(plan, &self.rooms)?;

        let (deleted_walls, added_walls) = if self.modification.split_surrounding_walls {
            let outcome = SplitWalls::new(wall_sides).execute(plan)?;
            // Halves on the far side of a crossing no longer border the rooms.
            wall_sides = unique_sides(
                ResolveWallSides::new(self.rooms.clone())
                    .with_candidates(unique_sides(outcome.wall_sides))
                    .execute(plan)?,
            );
            (outcome.deleted_walls, outcome.added_walls)
        } else {
            (Vec::new(), Vec::new())
        };

        // Snapshots are taken after the split so undo sees the halves.
        let modified_rooms = self
            .rooms
            .iter()
            .map(|id| ModifiedRoom::capture(plan, *id))
            .collect::<Result<Vec<_>>>()?;
        let modified_sides = wall_sides
            .iter()
            .map(|side| ModifiedWallSide::capture(plan, *side))
            .collect::<Result<Vec<_>>>()?;

        self.modification.apply(plan, &self.rooms, &wall_sides)?;
        debug!(
            rooms = self.rooms.len(),
            wall_sides = wall_sides.len(),
            split = !added_walls.is_empty(),
            "modified rooms"
        );

        Ok(RoomsEdit {
            rooms: self.rooms.clone(),
            modification: self.modification.clone(),
            modified_rooms,
            modified_sides,
            deleted_walls,
            added_walls,
            old_selection,
            new_selection: plan.selection().to_vec(),
            state: EditState::Done,
        })
    }
}

/// Paint, shininess and baseboard shared by a set of wall sides, used to
/// pre-fill an editor. A field is `None` when the sides disagree on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WallSidesDefaults {
    pub paint: Option<Paint>,
    pub shininess: Option<f64>,
    /// `Some(None)` when no side has a baseboard.
    pub baseboard: Option<Option<Baseboard>>,
}

impl WallSidesDefaults {
    /// Collects the values shared by all sides.
    ///
    /// # Errors
    ///
    /// Returns an error if a side's wall is not found.
    pub fn collect(plan: &FloorPlan, sides: &[WallSide]) -> Result<Self> {
        let finishes = sides
            .iter()
            .map(|side| -> Result<&SideFinish> { Ok(plan.wall(side.wall())?.side(side.side())) })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            paint: shared(finishes.iter().map(|finish| finish.paint())),
            shininess: shared(finishes.iter().map(|finish| finish.shininess)),
            baseboard: shared(finishes.iter().map(|finish| finish.baseboard.clone())),
        })
    }
}

fn shared<T: PartialEq>(mut values: impl Iterator<Item = T>) -> Option<T> {
    let first = values.next()?;
    values.all(|value| value == first).then_some(first)
}

/// Drops repeated sides of the same wall, keeping the first occurrence.
fn unique_sides(sides: Vec<WallSide>) -> Vec<WallSide> {
    let mut unique: Vec<WallSide> = Vec::with_capacity(sides.len());
    for side in sides {
        if !unique
            .iter()
            .any(|kept| kept.wall() == side.wall() && kept.side() == side.side())
        {
            unique.push(side);
        }
    }
    unique
}
