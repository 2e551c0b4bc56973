use crate::frontier::ScanFrontier;
use crate::grid_graph::GridGraph;
use crate::solver::{GridSolver, SearchResult, UNDISCOVERED};

/// A* search using the Manhattan distance to the end as heuristic and the same
/// destination-weight costs as [DijkstraSolver](crate::solver::dijkstra::DijkstraSolver).
///
/// The frontier is ordered by `g + h`; among equal values the node closer to the end (smaller
/// `h`) wins, then the one discovered first. A node enters the frontier once, on discovery, and
/// later improvements only update its values in place. The search ends when the end is selected.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Manhattan distance times the heuristic factor. Since every step costs at least 1 this
    /// never overestimates for factors up to 1.
    pub fn heuristic(&self, graph: &GridGraph, node: usize, end: usize) -> u32 {
        (graph.manhattan_distance(node, end) as f32 * self.heuristic_factor) as u32
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn solve(&self, graph: &GridGraph, start: usize, end: usize) -> SearchResult {
        let mut g_values = vec![UNDISCOVERED; graph.len()];
        let mut h_values = vec![0u32; graph.len()];
        let mut previous = vec![None; graph.len()];
        let mut explored = Vec::new();
        let mut frontier = ScanFrontier::new();
        frontier.insert(start);
        g_values[start] = 0;
        h_values[start] = self.heuristic(graph, start, end);

        let mut found = false;
        while let Some(node) =
            frontier.min_by_key(|n| (g_values[n] + h_values[n] as u64, h_values[n]))
        {
            if node == end {
                found = true;
                break;
            }
            frontier.remove(node);
            if node != start {
                explored.push(node);
            }

            for &neighbour in graph.neighbours(node) {
                let new_g = g_values[node] + graph.weight(neighbour) as u64;
                let new_h = self.heuristic(graph, neighbour, end);
                let undiscovered = g_values[neighbour] == UNDISCOVERED;
                if undiscovered {
                    frontier.insert(neighbour);
                }
                if undiscovered
                    || new_g + (new_h as u64) < g_values[neighbour] + h_values[neighbour] as u64
                {
                    g_values[neighbour] = new_g;
                    h_values[neighbour] = new_h;
                    previous[neighbour] = Some(node);
                }
            }
        }
        SearchResult::from_predecessors(&previous, end, explored, found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::dijkstra::DijkstraSolver;
    use crate::solver::SearchStatus;

    #[test]
    fn goes_straight_on_open_grid() {
        // Ties on g + h are broken towards the goal, so only the path itself is explored.
        let mut graph = GridGraph::new(5, 1);
        graph.set_end(4).unwrap();
        let result = AstarSolver::new().search(&graph);
        assert_eq!(result.path, Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(result.explored, vec![1, 2, 3]);
    }

    #[test]
    fn prefers_smaller_heuristic_on_ties() {
        let graph = GridGraph::new(3, 3);
        let result = AstarSolver::new().search(&graph);
        assert_eq!(result.path.as_ref().map(Vec::len), Some(5));
        assert_eq!(result.explored, vec![1, 2, 5]);
    }

    #[test]
    fn matches_dijkstra_cost() {
        // |S..5.|
        // |.#+#.|
        // |.9..E|
        let mut graph = GridGraph::new(5, 3);
        graph.set_weight(3, 5).unwrap();
        graph.set_wall(6, true).unwrap();
        graph.set_weight(7, 15).unwrap();
        graph.set_wall(8, true).unwrap();
        graph.set_weight(11, 9).unwrap();
        let astar = AstarSolver::new().search(&graph);
        let dijkstra = DijkstraSolver.search(&graph);
        assert_eq!(astar.path_cost(&graph), dijkstra.path_cost(&graph));
        assert!(astar.explored.len() <= dijkstra.explored.len());
    }

    #[test]
    fn exhausted_when_walled_off() {
        let mut graph = GridGraph::new(3, 3);
        for node in [1, 4, 7] {
            graph.set_wall(node, true).unwrap();
        }
        let result = AstarSolver::new().search(&graph);
        assert_eq!(result.status(), SearchStatus::Exhausted);
        assert_eq!(result.path, None);
    }
}
