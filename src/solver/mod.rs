use crate::grid_graph::GridGraph;
use core::fmt;
use log::{debug, warn};
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// Marks a node whose distance has not been discovered yet.
pub(crate) const UNDISCOVERED: u64 = u64::MAX;

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The end was reached and a path is available.
    Found,
    /// The frontier ran empty without reaching the end.
    Exhausted,
}

/// The outcome of a single search: the path from start to end (inclusive) if one was found,
/// and the order in which nodes were explored. The exploration trace never contains the start
/// or the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub path: Option<Vec<usize>>,
    pub explored: Vec<usize>,
}

impl SearchResult {
    pub fn status(&self) -> SearchStatus {
        match self.path {
            Some(_) => SearchStatus::Found,
            None => SearchStatus::Exhausted,
        }
    }
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
    /// Cost of the found path under the destination-weight cost model.
    pub fn path_cost(&self, graph: &GridGraph) -> Option<u64> {
        self.path.as_deref().map(|p| graph.path_cost(p))
    }

    /// Builds the result of a finished search from its predecessor array.
    pub(crate) fn from_predecessors(
        previous: &[Option<usize>],
        end: usize,
        explored: Vec<usize>,
        found: bool,
    ) -> SearchResult {
        SearchResult {
            path: found.then(|| reconstruct_path(previous, end)),
            explored,
        }
    }
}

/// Walks the predecessor chain back from `end` until a node without predecessor (the start)
/// and returns it in start to end order.
pub fn reconstruct_path(previous: &[Option<usize>], end: usize) -> Vec<usize> {
    let mut path: Vec<usize> = std::iter::successors(Some(end), |&n| previous[n]).collect();
    path.reverse();
    path
}

/// A search strategy over a [GridGraph]. Implementors only provide [solve](Self::solve),
/// which may assume that `start` and `end` are distinct open cells.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    fn solve(&self, graph: &GridGraph, start: usize, end: usize) -> SearchResult;

    /// Searches from the graph's start to its end.
    fn search(&self, graph: &GridGraph) -> SearchResult {
        let (start, end) = (graph.start(), graph.end());
        debug!("{}: running from {} to {}", self.name(), start, end);
        let result = if start == end {
            SearchResult {
                path: Some(vec![start]),
                explored: Vec::new(),
            }
        } else {
            self.solve(graph, start, end)
        };
        debug!(
            "{}: {:?} after exploring {} nodes",
            self.name(),
            result.status(),
            result.explored.len()
        );
        if !result.is_found() && !graph.components_dirty && graph.reachable(start, end) {
            warn!(
                "{}: exhausted although {} and {} share a component, are the components correct?",
                self.name(),
                start,
                end
            );
        }
        result
    }
}

/// The search strategies available to [run_search].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Whether the algorithm takes cell weights into account and returns least-cost paths.
    pub fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Algorithm::BreadthFirst => "Breadth First Search",
            Algorithm::DepthFirst => "Depth First Search",
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::AStar => "A* Search Algorithm",
        };
        f.write_str(label)
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Algorithm::ALL
                .into_iter()
                .find(|a| a.to_string().eq_ignore_ascii_case(s))
                .ok_or_else(|| format!("unknown search algorithm: {s}")),
        }
    }
}

/// Runs `algorithm` on the current state of `graph` with default solver settings.
pub fn run_search(graph: &GridGraph, algorithm: Algorithm) -> SearchResult {
    match algorithm {
        Algorithm::BreadthFirst => BfsSolver.search(graph),
        Algorithm::DepthFirst => DfsSolver.search(graph),
        Algorithm::Dijkstra => DijkstraSolver.search(graph),
        Algorithm::AStar => AstarSolver::new().search(graph),
    }
}

impl GridGraph {
    pub fn search(&self, algorithm: Algorithm) -> SearchResult {
        run_search(self, algorithm)
    }
}
