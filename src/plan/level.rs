slotmap::new_key_type! {
    /// Unique identifier for a level in the floor plan.
    pub struct LevelId;
}

/// A storey of the building.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    /// Elevation of the level's floor.
    pub elevation: f64,
    /// Default height of the level.
    pub height: f64,
    /// Whether items on this level are shown (and thus editable).
    pub viewable: bool,
}

impl Level {
    /// Creates a viewable level.
    #[must_use]
    pub fn new(name: impl Into<String>, elevation: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            elevation,
            height,
            viewable: true,
        }
    }
}
