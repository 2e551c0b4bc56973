//! Mapping between 2-D grid coordinates and the linear node indices used everywhere else.
use grid_util::point::Point;

/// Grid coordinates reuse [Point] from [grid_util].
pub type Coord = Point;

/// Four-directional moves in the order in which neighbours are generated: up, right, down, left.
/// Exploration order of every search depends on this order.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Converts `coord` to its node index on a grid of the given width.
#[inline]
pub fn coord_to_index(coord: &Coord, width: usize) -> usize {
    coord.x as usize + coord.y as usize * width
}

/// Inverse of [coord_to_index].
#[inline]
pub fn index_to_coord(node: usize, width: usize) -> Coord {
    Point::new((node % width) as i32, (node / width) as i32)
}

#[inline]
pub fn manhattan_distance(a: &Coord, b: &Coord) -> u32 {
    (a.x - b.x).unsigned_abs() + (a.y - b.y).unsigned_abs()
}

/// Whether `coord` lies on a `width` x `height` grid.
#[inline]
pub fn coord_in_bounds(coord: &Coord, width: usize, height: usize) -> bool {
    coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < width && (coord.y as usize) < height
}

/// The in-bounds 4-neighbourhood of `coord`, in [DIRECTIONS] order.
pub fn neumann_neighbours(
    coord: &Coord,
    width: usize,
    height: usize,
) -> impl Iterator<Item = Coord> + '_ {
    DIRECTIONS
        .iter()
        .map(move |(dx, dy)| Point::new(coord.x + dx, coord.y + dy))
        .filter(move |p| coord_in_bounds(p, width, height))
}
