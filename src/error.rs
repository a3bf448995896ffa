use thiserror::Error;

use crate::plan::WallId;

/// Top-level error type for the wall-side engine.
#[derive(Debug, Error)]
pub enum WallsideError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid parameter {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Errors related to the floor-plan store and its wall chains.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("wall {0:?} is not part of the floor plan")]
    WallDetached(WallId),

    #[error("wall {0:?} cannot be joined to itself")]
    SelfJoin(WallId),

    #[error("wall chain broken: {wall:?} references {neighbor:?} which does not reference it back")]
    ChainBroken { wall: WallId, neighbor: WallId },
}

/// Errors related to engine operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("wall splitting did not settle after {limit} splits")]
    IterationLimit { limit: usize },
}

/// Convenience type alias for results using [`WallsideError`].
pub type Result<T> = std::result::Result<T, WallsideError>;
