//! # grid_search
//!
//! A grid of cells treated as a weighted graph for visualizing search algorithms. Cells are
//! connected to their four orthogonal neighbours, can be turned into walls (removing their
//! edges) or given a weight (the cost of entering them). Four searches are available:
//! [breadth-first](solver::bfs::BfsSolver), [depth-first](solver::dfs::DfsSolver),
//! [Dijkstra](solver::dijkstra::DijkstraSolver) and [A*](solver::astar::AstarSolver).
//! Each returns the path it found together with the order in which it explored the grid,
//! which is what an animation of the search needs.
//!
//! Wall edits patch the adjacency list of the edited cell and its neighbours directly, so the
//! graph is never rebuilt after construction.
//!
//! ```
//! use grid_search::{Algorithm, GridGraph, SearchStatus};
//!
//! let mut graph = GridGraph::new(3, 3);
//! graph.set_wall(4, true).unwrap();
//! let result = graph.search(Algorithm::AStar);
//! assert_eq!(result.status(), SearchStatus::Found);
//! assert_eq!(result.path.unwrap().len(), 5);
//! ```
pub mod brush;
pub mod coord;
pub mod error;
pub mod frontier;
pub mod grid_graph;
pub mod solver;

pub use brush::Brush;
pub use coord::Coord;
pub use error::{GridError, Result};
pub use grid_graph::GridGraph;
pub use solver::{run_search, Algorithm, GridSolver, SearchResult, SearchStatus};

/// Inline capacity of neighbour lists; a cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
