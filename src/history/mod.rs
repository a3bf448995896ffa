pub mod rooms_edit;
pub mod snapshot;

pub use rooms_edit::{EditState, RoomsEdit};
pub use snapshot::{ModifiedRoom, ModifiedWall, ModifiedWallSide};

use tracing::warn;

use crate::error::Result;
use crate::plan::FloorPlan;

/// An edit that can be reverted and replayed on the plan it was made on.
pub trait UndoableEdit {
    /// Reverts the edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit is not currently applied, or if the plan
    /// no longer matches the edit. The plan is left unchanged on error.
    fn undo(&mut self, plan: &mut FloorPlan) -> Result<()>;

    /// Applies the edit again after [`undo`](Self::undo).
    ///
    /// # Errors
    ///
    /// Returns an error if the edit is not currently undone, or if the plan
    /// no longer matches the edit. The plan is left unchanged on error.
    fn redo(&mut self, plan: &mut FloorPlan) -> Result<()>;

    /// Short label for menus.
    fn presentation_name(&self) -> &'static str;
}

/// Checks the plan's wall chains after a structural change. A broken chain
/// is a bug in the engine, so debug builds stop right there.
pub(crate) fn ensure_chain(plan: &FloorPlan) -> Result<()> {
    let result = plan.check_chain();
    if let Err(err) = &result {
        warn!(%err, "wall chain corrupted");
    }
    debug_assert!(result.is_ok(), "wall chain corrupted: {result:?}");
    result
}
