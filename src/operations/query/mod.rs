mod resolve_wall_sides;

pub use resolve_wall_sides::{exceeds_ratio, ResolveWallSides, ResolverParams};
