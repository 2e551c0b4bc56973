use thiserror::Error;

/// Convenient result alias for grid edits.
pub type Result<T> = std::result::Result<T, GridError>;

/// Precondition violations rejected by the checked editing operations of
/// [GridGraph](crate::grid_graph::GridGraph). An unreachable goal is not an error, see
/// [SearchStatus::Exhausted](crate::solver::SearchStatus::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The node index does not address a cell of the grid.
    #[error("node {node} is outside a grid of {len} cells")]
    OutOfBounds { node: usize, len: usize },

    /// Start and end have to be open cells.
    #[error("node {node} is a wall and cannot be used as start or end")]
    WallEndpoint { node: usize },

    /// The cell is the current start or end and cannot be edited or moved onto.
    #[error("node {node} is occupied by the start or end")]
    EndpointLocked { node: usize },

    /// Grids need at least one row and one column.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}
