use tracing::debug;

use crate::error::{OperationError, Result};
use crate::operations::modification::RoomModification;
use crate::plan::{FloorPlan, RoomId, Selectable, WallSide};

use super::snapshot::{ModifiedRoom, ModifiedWall, ModifiedWallSide};
use super::{ensure_chain, UndoableEdit};

/// Whether an edit is currently applied to the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Done,
    Undone,
}

/// Undo record of a room modification, including the walls it split.
#[derive(Debug, Clone)]
pub struct RoomsEdit {
    pub(crate) rooms: Vec<RoomId>,
    pub(crate) modification: RoomModification,
    pub(crate) modified_rooms: Vec<ModifiedRoom>,
    pub(crate) modified_sides: Vec<ModifiedWallSide>,
    pub(crate) deleted_walls: Vec<ModifiedWall>,
    pub(crate) added_walls: Vec<ModifiedWall>,
    pub(crate) old_selection: Vec<Selectable>,
    pub(crate) new_selection: Vec<Selectable>,
    pub(crate) state: EditState,
}

impl RoomsEdit {
    #[must_use]
    pub fn state(&self) -> EditState {
        self.state
    }

    /// Wall sides the modification was applied to.
    #[must_use]
    pub fn wall_sides(&self) -> Vec<WallSide> {
        self.modified_sides
            .iter()
            .map(ModifiedWallSide::wall_side)
            .collect()
    }

    /// Walls removed from the plan by splitting, in deletion order.
    #[must_use]
    pub fn deleted_walls(&self) -> &[ModifiedWall] {
        &self.deleted_walls
    }

    /// Walls added to the plan by splitting, in insertion order.
    #[must_use]
    pub fn added_walls(&self) -> &[ModifiedWall] {
        &self.added_walls
    }

    fn revert(&self, plan: &mut FloorPlan) -> Result<()> {
        for room in &self.modified_rooms {
            room.reset(plan)?;
        }
        // Deleting the halves clears their neighbors' links to them.
        for added in &self.added_walls {
            plan.delete_wall(added.wall())?;
        }
        // Each wall comes back at the index it had when it was deleted, so
        // the latest deletion is restored first.
        for deleted in self.deleted_walls.iter().rev() {
            deleted.restore(plan, true)?;
        }
        // Finishes last, once every side's wall is back.
        for side in &self.modified_sides {
            side.reset(plan)?;
        }
        plan.set_selection(self.old_selection.clone());
        ensure_chain(plan)
    }

    fn reapply(&self, plan: &mut FloorPlan) -> Result<()> {
        // The halves take the chain over before the walls they replace go.
        for added in &self.added_walls {
            added.restore(plan, false)?;
        }
        for deleted in &self.deleted_walls {
            plan.delete_wall(deleted.wall())?;
        }
        self.modification
            .apply(plan, &self.rooms, &self.wall_sides())?;
        plan.set_selection(self.new_selection.clone());
        ensure_chain(plan)
    }

    /// Runs `step` on the plan, restoring it if the step fails.
    fn transact(
        &self,
        plan: &mut FloorPlan,
        step: fn(&Self, &mut FloorPlan) -> Result<()>,
    ) -> Result<()> {
        let backup = plan.clone();
        let result = step(self, plan);
        if result.is_err() {
            *plan = backup;
        }
        result
    }
}

impl UndoableEdit for RoomsEdit {
    fn undo(&mut self, plan: &mut FloorPlan) -> Result<()> {
        if self.state != EditState::Done {
            return Err(OperationError::InvalidState("edit already undone").into());
        }
        self.transact(plan, Self::revert)?;
        self.state = EditState::Undone;
        debug!(
            rooms = self.rooms.len(),
            restored_walls = self.deleted_walls.len(),
            "undid room modification"
        );
        Ok(())
    }

    fn redo(&mut self, plan: &mut FloorPlan) -> Result<()> {
        if self.state != EditState::Undone {
            return Err(OperationError::InvalidState("edit not undone").into());
        }
        self.transact(plan, Self::reapply)?;
        self.state = EditState::Done;
        debug!(
            rooms = self.rooms.len(),
            added_walls = self.added_walls.len(),
            "redid room modification"
        );
        Ok(())
    }

    fn presentation_name(&self) -> &'static str {
        "Modify rooms"
    }
}
