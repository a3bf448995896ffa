pub mod error;
pub mod geometry;
pub mod history;
pub mod math;
pub mod operations;
pub mod plan;

pub use error::{Result, WallsideError};
pub use history::{RoomsEdit, UndoableEdit};
pub use operations::modification::{ModifyRooms, RoomModification, SplitWalls};
pub use operations::query::ResolveWallSides;
pub use plan::{FloorPlan, Room, RoomId, Side, Wall, WallEnd, WallId, WallSide};
