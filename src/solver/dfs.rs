use crate::frontier::Stack;
use crate::grid_graph::GridGraph;
use crate::solver::{GridSolver, SearchResult};

/// Depth-first search. Finds some path, usually not a short one.
///
/// A node counts as explored only once it is popped, so it may be pushed several times and
/// skipped later. Predecessors are recorded at push time; the last push wins. The search stops
/// when the end is seen as a neighbour of a popped node.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn solve(&self, graph: &GridGraph, start: usize, end: usize) -> SearchResult {
        let mut is_explored = vec![false; graph.len()];
        let mut previous = vec![None; graph.len()];
        let mut explored = Vec::new();
        let mut frontier = Stack::new();
        frontier.push(start);

        let mut found = false;
        'search: while let Some(node) = frontier.pop() {
            if is_explored[node] {
                continue;
            }
            if node != start {
                explored.push(node);
            }
            is_explored[node] = true;
            for &neighbour in graph.neighbours(node) {
                if is_explored[neighbour] {
                    continue;
                }
                previous[neighbour] = Some(node);
                if neighbour == end {
                    found = true;
                    break 'search;
                }
                frontier.push(neighbour);
            }
        }
        SearchResult::from_predecessors(&previous, end, explored, found)
    }
}
