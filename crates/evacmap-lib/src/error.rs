use thiserror::Error;

/// Convenient result alias for the evacmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// A route that cannot be found is deliberately *not* an error: "no passable
/// route to an exit" is an expected outcome of hazard simulation and is
/// modeled as plan data instead (see [`crate::routing::EvacuationPlan`]).
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when attempting to mark the designated start node as hazardous.
    #[error("the start node '{id}' cannot be marked hazardous")]
    ProtectedStartNode { id: String },

    /// Raised when the dataset references a node id that was never declared.
    #[error("unknown node id '{id}' referenced by {context}")]
    UnknownNode { id: String, context: String },

    /// Raised when the dataset declares the same node id twice.
    #[error("duplicate node id '{id}' in dataset")]
    DuplicateNode { id: String },

    /// Raised when the dataset declares no exit nodes.
    #[error("dataset declares no exits")]
    NoExits,

    /// Raised when a listed exit is not a node of kind `exit`.
    #[error("node '{id}' is listed as an exit but is not of kind 'exit'")]
    InvalidExit { id: String },

    /// Raised when parsing an unrecognized hazard kind name.
    #[error("unknown hazard kind '{value}' (expected fire, smoke, flood, or collapse)")]
    UnknownHazardKind { value: String },

    /// Raised when a named preset does not exist in the dataset.
    #[error("unknown preset '{name}'")]
    UnknownPreset { name: String },

    /// Wrapper for dataset JSON parsing errors.
    #[error(transparent)]
    DatasetParse(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
