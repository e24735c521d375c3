//! Error taxonomy for the road network core.

use thiserror::Error;

/// Failures raised by the containers and the graph.
///
/// All of them are local and synchronous: an operation that returns an error
/// has left its receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A required name was absent (empty).
    #[error("missing {0}")]
    NullArgument(&'static str),
    /// A named town is not a member of the graph.
    #[error("town '{0}' is not in the graph")]
    UnknownTown(String),
    /// A parameter failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Positional access beyond the bounds of a list.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Cursor mutation called out of sequence.
    #[error("illegal cursor state: {0}")]
    InvalidState(&'static str),
    /// `pop`/`peek` on an empty stack.
    #[error("stack is empty")]
    EmptyCollection,
    /// Connecting two towns failed (self-loop or an existing road).
    #[error("road '{road}' could not connect '{source_town}' and '{destination}'")]
    ConnectFailed {
        road: String,
        source_town: String,
        destination: String,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
