use crate::frontier::Queue;
use crate::grid_graph::GridGraph;
use crate::solver::{GridSolver, SearchResult};

/// Breadth-first search. Ignores weights and finds a path with the fewest steps.
///
/// Nodes are marked as explored the moment they are discovered and the search stops as soon
/// as the end shows up as a neighbour, without dequeuing it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn solve(&self, graph: &GridGraph, start: usize, end: usize) -> SearchResult {
        let mut is_explored = vec![false; graph.len()];
        let mut previous = vec![None; graph.len()];
        let mut explored = Vec::new();
        let mut frontier = Queue::new();
        frontier.enqueue(start);
        is_explored[start] = true;

        let mut found = false;
        'search: while let Some(node) = frontier.dequeue() {
            for &neighbour in graph.neighbours(node) {
                if is_explored[neighbour] {
                    continue;
                }
                previous[neighbour] = Some(node);
                if neighbour == end {
                    found = true;
                    break 'search;
                }
                explored.push(neighbour);
                is_explored[neighbour] = true;
                frontier.enqueue(neighbour);
            }
        }
        SearchResult::from_predecessors(&previous, end, explored, found)
    }
}
