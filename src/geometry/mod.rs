pub mod path;
pub mod region;
pub mod stroke;

pub use path::Path2D;
pub use region::Region;
pub use stroke::{LineCap, StrokeStyle};
