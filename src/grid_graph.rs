use crate::brush::{Brush, DEFAULT_WEIGHT};
use crate::coord::{self, Coord};
use crate::error::{GridError, Result};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

pub type Neighbours = SmallVec<[usize; N_SMALLVEC_SIZE]>;

/// [GridGraph] owns a `width` x `height` grid of cells addressed by node index
/// (`x + y * width`) and the 4-directional adjacency list between open cells. Every cell
/// carries a weight, which is the cost of entering it. Walls keep their weight but have no
/// edges. Wall edits patch the adjacency of the affected cell and its neighbours in place,
/// keeping the adjacency symmetric without rebuilding the graph.
///
/// In addition, connected components of open cells are tracked using a [UnionFind]
/// structure. Clearing a wall joins components directly, placing one flags the components as
/// dirty since a component may have been split.
#[derive(Clone, Debug)]
pub struct GridGraph {
    width: usize,
    height: usize,
    weights: Vec<u32>,
    walls: Vec<bool>,
    adjacency: Vec<Neighbours>,
    start: usize,
    end: usize,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl GridGraph {
    /// Creates a fully open grid with all weights set to [DEFAULT_WEIGHT], start in the top
    /// left corner and end in the bottom right corner.
    ///
    /// Panics if either dimension is zero, see [try_new](Self::try_new) for a checked variant.
    pub fn new(width: usize, height: usize) -> GridGraph {
        match GridGraph::try_new(width, height) {
            Ok(graph) => graph,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(width: usize, height: usize) -> Result<GridGraph> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let len = width * height;
        let adjacency = (0..len)
            .map(|node| {
                let c = coord::index_to_coord(node, width);
                coord::neumann_neighbours(&c, width, height)
                    .map(|n| coord::coord_to_index(&n, width))
                    .collect::<Neighbours>()
            })
            .collect();
        let mut graph = GridGraph {
            width,
            height,
            weights: vec![DEFAULT_WEIGHT; len],
            walls: vec![false; len],
            adjacency,
            start: 0,
            end: len - 1,
            components: UnionFind::new(len),
            components_dirty: false,
        };
        graph.generate_components();
        Ok(graph)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.weights.len()
    }
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
    pub fn start(&self) -> usize {
        self.start
    }
    pub fn end(&self) -> usize {
        self.end
    }
    pub fn weight(&self, node: usize) -> u32 {
        self.weights[node]
    }
    pub fn is_wall(&self, node: usize) -> bool {
        self.walls[node]
    }
    /// Open cells adjacent to `node`. Empty for walls.
    pub fn neighbours(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }
    pub fn in_bounds(&self, node: usize) -> bool {
        node < self.len()
    }

    /// Node index of `coord`, or [None] if it lies outside the grid.
    pub fn coord_to_index(&self, point: &Coord) -> Option<usize> {
        coord::coord_in_bounds(point, self.width, self.height)
            .then(|| coord::coord_to_index(point, self.width))
    }
    pub fn index_to_coord(&self, node: usize) -> Coord {
        coord::index_to_coord(node, self.width)
    }
    /// Manhattan distance between two cells, the A* heuristic.
    pub fn manhattan_distance(&self, a: usize, b: usize) -> u32 {
        coord::manhattan_distance(&self.index_to_coord(a), &self.index_to_coord(b))
    }

    fn check_bounds(&self, node: usize) -> Result<()> {
        if self.in_bounds(node) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                node,
                len: self.len(),
            })
        }
    }
    fn is_endpoint(&self, node: usize) -> bool {
        node == self.start || node == self.end
    }

    /// Overwrites the weight of `node` without touching its wall state. Weights are expected to
    /// be at least 1: searches assume positive costs and lose optimality otherwise.
    pub fn set_weight(&mut self, node: usize, weight: u32) -> Result<()> {
        self.check_bounds(node)?;
        debug_assert!(weight >= 1, "cell weights must be positive");
        self.weights[node] = weight;
        Ok(())
    }

    /// Places or removes a wall. The start and end cannot be walled.
    pub fn set_wall(&mut self, node: usize, wall: bool) -> Result<()> {
        self.check_bounds(node)?;
        if wall {
            if self.is_endpoint(node) {
                return Err(GridError::EndpointLocked { node });
            }
            self.mark_wall(node);
        } else {
            self.clear_wall(node);
        }
        Ok(())
    }

    pub fn set_start(&mut self, node: usize) -> Result<()> {
        self.check_endpoint_target(node, self.end)?;
        debug!("Moving start from {} to {}", self.start, node);
        self.start = node;
        Ok(())
    }

    pub fn set_end(&mut self, node: usize) -> Result<()> {
        self.check_endpoint_target(node, self.start)?;
        debug!("Moving end from {} to {}", self.end, node);
        self.end = node;
        Ok(())
    }

    /// Moves start and end together, which also allows swapping them.
    pub fn set_endpoints(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_endpoint_target(start, end)?;
        self.check_endpoint_target(end, start)?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    fn check_endpoint_target(&self, node: usize, other: usize) -> Result<()> {
        self.check_bounds(node)?;
        if self.walls[node] {
            Err(GridError::WallEndpoint { node })
        } else if node == other {
            Err(GridError::EndpointLocked { node })
        } else {
            Ok(())
        }
    }

    /// Turns `node` into a wall, removing all of its edges in both directions. Does nothing if
    /// it already is one.
    ///
    /// Panics if `node` is out of bounds.
    pub fn mark_wall(&mut self, node: usize) {
        if self.walls[node] {
            return;
        }
        self.walls[node] = true;
        for neighbour in std::mem::take(&mut self.adjacency[node]) {
            self.adjacency[neighbour].retain(|n| *n != node);
        }
        self.components_dirty = true;
    }

    /// Opens `node` again, linking it to every open in-bounds grid neighbour in both
    /// directions. Does nothing if it is not a wall.
    ///
    /// Panics if `node` is out of bounds.
    pub fn clear_wall(&mut self, node: usize) {
        if !self.walls[node] {
            return;
        }
        self.walls[node] = false;
        let c = self.index_to_coord(node);
        for n in coord::neumann_neighbours(&c, self.width, self.height) {
            let neighbour = coord::coord_to_index(&n, self.width);
            if !self.walls[neighbour] {
                self.adjacency[node].push(neighbour);
                self.adjacency[neighbour].push(node);
                self.components.union(node, neighbour);
            }
        }
    }

    /// Applies `brush` to `node`. Painting a cell with the brush it already carries erases it
    /// back to an open cell of default weight. The wall brush resets the weight to the
    /// default, the weight brushes remove any wall.
    pub fn paint(&mut self, node: usize, brush: Brush) -> Result<()> {
        self.check_bounds(node)?;
        if self.is_endpoint(node) {
            return Err(GridError::EndpointLocked { node });
        }
        if self.brush_at(node) == Some(brush) {
            self.weights[node] = DEFAULT_WEIGHT;
            self.clear_wall(node);
            return Ok(());
        }
        self.weights[node] = brush.weight();
        match brush {
            Brush::Wall => self.mark_wall(node),
            _ => self.clear_wall(node),
        }
        Ok(())
    }

    /// The brush `node` appears to be painted with, [None] for a plain open cell.
    pub fn brush_at(&self, node: usize) -> Option<Brush> {
        if self.walls[node] {
            Some(Brush::Wall)
        } else {
            Brush::from_weight(self.weights[node])
        }
    }

    /// Total cost of following `path`: the sum of the weights of every cell entered after the
    /// first one.
    pub fn path_cost(&self, path: &[usize]) -> u64 {
        path.iter().skip(1).map(|&n| self.weights[n] as u64).sum()
    }

    /// Checks if `a` and `b` are open cells on the same connected component. Only meaningful
    /// when the components are not dirty, see [update](Self::update).
    pub fn reachable(&self, a: usize, b: usize) -> bool {
        self.in_bounds(a)
            && self.in_bounds(b)
            && !self.walls[a]
            && !self.walls[b]
            && self.components.equiv(a, b)
    }

    pub fn unreachable(&self, a: usize, b: usize) -> bool {
        !self.reachable(a, b)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up adjacent open cells.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.width, self.height
        );
        self.components = UnionFind::new(self.len());
        self.components_dirty = false;
        for (node, neighbours) in self.adjacency.iter().enumerate() {
            for &n in neighbours {
                self.components.union(node, n);
            }
        }
    }
}

impl fmt::Display for GridGraph {
    /// Renders the grid row by row: `S` start, `E` end, `#` wall, `.` default weight, the
    /// digit for weights below 10 and `+` for heavier cells.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            let row = (0..self.width)
                .map(|x| {
                    let node = x + y * self.width;
                    if node == self.start {
                        'S'
                    } else if node == self.end {
                        'E'
                    } else if self.walls[node] {
                        '#'
                    } else {
                        match self.weights[node] {
                            DEFAULT_WEIGHT => '.',
                            w @ 0..=9 => char::from_digit(w, 10).unwrap_or('?'),
                            _ => '+',
                        }
                    }
                })
                .collect::<String>();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::point::Point;

    fn assert_symmetric(graph: &GridGraph) {
        for u in 0..graph.len() {
            for &v in graph.neighbours(u) {
                assert_ne!(u, v, "self loop at {u}");
                assert!(graph.neighbours(v).contains(&u), "{u} -> {v} is one-sided");
                assert!(!graph.is_wall(u) && !graph.is_wall(v));
            }
        }
    }

    #[test]
    fn initial_degrees() {
        let graph = GridGraph::new(4, 3);
        for node in 0..graph.len() {
            let c = graph.index_to_coord(node);
            let on_x_edge = c.x == 0 || c.x == 3;
            let on_y_edge = c.y == 0 || c.y == 2;
            let expected = match (on_x_edge, on_y_edge) {
                (true, true) => 2,
                (true, false) | (false, true) => 3,
                (false, false) => 4,
            };
            assert_eq!(graph.neighbours(node).len(), expected, "node {node}");
            assert_eq!(graph.weight(node), 1);
        }
        assert_eq!(graph.start(), 0);
        assert_eq!(graph.end(), 11);
        assert_symmetric(&graph);
    }

    #[test]
    fn neighbour_order_is_up_right_down_left() {
        let graph = GridGraph::new(3, 3);
        assert_eq!(graph.neighbours(4), &[1, 5, 7, 3]);
        assert_eq!(graph.neighbours(0), &[1, 3]);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            GridGraph::try_new(0, 3).unwrap_err(),
            GridError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn wall_round_trip_restores_adjacency() {
        let mut graph = GridGraph::new(3, 3);
        let mut before: Vec<usize> = graph.neighbours(4).to_vec();
        graph.mark_wall(4);
        assert!(graph.neighbours(4).is_empty());
        for n in [1, 3, 5, 7] {
            assert!(!graph.neighbours(n).contains(&4));
        }
        assert_symmetric(&graph);
        graph.clear_wall(4);
        let mut after = graph.neighbours(4).to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert_symmetric(&graph);
    }

    #[test]
    fn clear_wall_skips_wall_neighbours() {
        let mut graph = GridGraph::new(3, 3);
        graph.mark_wall(1);
        graph.mark_wall(4);
        graph.clear_wall(4);
        assert_eq!(graph.neighbours(4), &[5, 7, 3]);
        assert!(graph.neighbours(1).is_empty());
        assert_symmetric(&graph);
    }

    #[test]
    fn wall_edits_are_idempotent() {
        let mut graph = GridGraph::new(3, 3);
        graph.mark_wall(4);
        let snapshot: Vec<Vec<usize>> = (0..9).map(|n| graph.neighbours(n).to_vec()).collect();
        graph.mark_wall(4);
        let again: Vec<Vec<usize>> = (0..9).map(|n| graph.neighbours(n).to_vec()).collect();
        assert_eq!(snapshot, again);

        graph.clear_wall(4);
        let open: Vec<Vec<usize>> = (0..9).map(|n| graph.neighbours(n).to_vec()).collect();
        graph.clear_wall(4);
        let open_again: Vec<Vec<usize>> = (0..9).map(|n| graph.neighbours(n).to_vec()).collect();
        assert_eq!(open, open_again);
    }

    #[test]
    fn walls_keep_their_weight() {
        let mut graph = GridGraph::new(2, 2);
        graph.set_weight(1, 7).unwrap();
        graph.set_wall(1, true).unwrap();
        assert_eq!(graph.weight(1), 7);
        graph.set_wall(1, false).unwrap();
        assert_eq!(graph.weight(1), 7);
    }

    #[test]
    fn endpoint_preconditions() {
        let mut graph = GridGraph::new(3, 3);
        assert_eq!(
            graph.set_wall(0, true),
            Err(GridError::EndpointLocked { node: 0 })
        );
        assert_eq!(
            graph.set_weight(9, 2),
            Err(GridError::OutOfBounds { node: 9, len: 9 })
        );
        graph.set_wall(4, true).unwrap();
        assert_eq!(graph.set_start(4), Err(GridError::WallEndpoint { node: 4 }));
        assert_eq!(graph.set_end(0), Err(GridError::EndpointLocked { node: 0 }));
        graph.set_end(2).unwrap();
        assert_eq!(graph.end(), 2);
        graph.set_start(6).unwrap();
        assert_eq!(graph.start(), 6);
        graph.set_endpoints(2, 6).unwrap();
        assert_eq!((graph.start(), graph.end()), (2, 6));
        assert_eq!(
            graph.set_endpoints(3, 3),
            Err(GridError::EndpointLocked { node: 3 })
        );
    }

    #[test]
    fn painting_toggles() {
        let mut graph = GridGraph::new(3, 3);
        graph.paint(4, Brush::HeavyWeight).unwrap();
        assert_eq!(graph.weight(4), 15);
        assert_eq!(graph.brush_at(4), Some(Brush::HeavyWeight));

        graph.paint(4, Brush::Wall).unwrap();
        assert!(graph.is_wall(4));
        assert_eq!(graph.weight(4), 1);

        graph.paint(4, Brush::LightWeight).unwrap();
        assert!(!graph.is_wall(4));
        assert_eq!(graph.neighbours(4).len(), 4);
        assert_eq!(graph.weight(4), 5);

        graph.paint(4, Brush::LightWeight).unwrap();
        assert_eq!(graph.brush_at(4), None);
        assert_eq!(graph.weight(4), 1);

        assert_eq!(
            graph.paint(8, Brush::Wall),
            Err(GridError::EndpointLocked { node: 8 })
        );
    }

    #[test]
    fn components_follow_walls() {
        // |S#.|
        // |.#.|
        // |.#E|
        let mut graph = GridGraph::new(3, 3);
        for node in [1, 4, 7] {
            graph.set_wall(node, true).unwrap();
        }
        assert!(graph.components_dirty);
        graph.update();
        assert!(graph.unreachable(0, 8));
        assert!(graph.reachable(0, 6));
        assert!(graph.unreachable(0, 4));

        graph.set_wall(4, false).unwrap();
        assert!(graph.reachable(0, 8));
    }

    #[test]
    fn coord_lookup() {
        let graph = GridGraph::new(4, 2);
        assert_eq!(graph.coord_to_index(&Point::new(3, 1)), Some(7));
        assert_eq!(graph.coord_to_index(&Point::new(4, 0)), None);
        assert_eq!(graph.coord_to_index(&Point::new(0, -1)), None);
        assert_eq!(graph.manhattan_distance(0, 7), 4);
    }

    #[test]
    fn path_cost_uses_destination_weights() {
        let mut graph = GridGraph::new(3, 1);
        graph.set_weight(0, 9).unwrap();
        graph.set_weight(1, 10).unwrap();
        assert_eq!(graph.path_cost(&[0, 1, 2]), 11);
        assert_eq!(graph.path_cost(&[0]), 0);
    }

    #[test]
    fn display() {
        let mut graph = GridGraph::new(3, 2);
        graph.set_wall(1, true).unwrap();
        graph.set_weight(3, 5).unwrap();
        graph.set_weight(4, 15).unwrap();
        assert_eq!(graph.to_string(), "S#.\n5+E\n");
    }
}
