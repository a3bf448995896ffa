mod modify_rooms;
mod split_walls;

pub use modify_rooms::{ModifyRooms, RoomModification, WallSidesDefaults};
pub use split_walls::{SplitOutcome, SplitPoint, SplitWalls};
