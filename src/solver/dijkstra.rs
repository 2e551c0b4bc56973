use crate::frontier::ScanFrontier;
use crate::grid_graph::GridGraph;
use crate::solver::{GridSolver, SearchResult, UNDISCOVERED};

/// Dijkstra's algorithm over cell weights.
///
/// Moving onto a cell costs that cell's weight, so the cost of an edge is the weight of its
/// destination. Painting a cell is therefore enough to make passing through it expensive.
/// The search ends once the end is selected as the cheapest frontier node, i.e. when it is
/// settled rather than when it is first discovered. Ties go to the node discovered first.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve(&self, graph: &GridGraph, start: usize, end: usize) -> SearchResult {
        let mut distance = vec![UNDISCOVERED; graph.len()];
        let mut previous = vec![None; graph.len()];
        let mut explored = Vec::new();
        let mut frontier = ScanFrontier::new();
        frontier.insert(start);
        distance[start] = 0;

        let mut found = false;
        while let Some(node) = frontier.min_by_key(|n| distance[n]) {
            if node == end {
                found = true;
                break;
            }
            frontier.remove(node);
            if node != start {
                explored.push(node);
            }

            for &neighbour in graph.neighbours(node) {
                let candidate = distance[node] + graph.weight(neighbour) as u64;
                if distance[neighbour] == UNDISCOVERED {
                    distance[neighbour] = candidate;
                    previous[neighbour] = Some(node);
                    frontier.insert(neighbour);
                } else if candidate < distance[neighbour] {
                    distance[neighbour] = candidate;
                    previous[neighbour] = Some(node);
                }
            }
        }
        SearchResult::from_predecessors(&previous, end, explored, found)
    }
}
