use grid_search::brush::{Brush, HEAVY_WEIGHT};
use grid_search::{GridError, GridGraph, SearchResult};
use rand::Rng;

/// Builds a [GridGraph] from an ASCII map, one line per row:
///
/// - `.` open cell of default weight
/// - `#` wall
/// - `S` / `E` start and end (defaults are kept when absent)
/// - `1`-`9` open cell with that weight, `+` a heavy cell
///
/// Surrounding whitespace on each line and blank lines are ignored. All rows must have the same
/// width.
pub fn parse_map(map: &str) -> Result<GridGraph, GridError> {
    let rows: Vec<&str> = map
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    if rows.iter().any(|r| r.chars().count() != width) {
        return Err(GridError::InvalidDimensions { width, height });
    }
    let mut graph = GridGraph::try_new(width, height)?;

    let mut start = None;
    let mut end = None;
    let mut cells = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, tile) in row.chars().enumerate() {
            let node = x + y * width;
            match tile {
                'S' => start = Some(node),
                'E' => end = Some(node),
                _ => cells.push((node, tile)),
            }
        }
    }

    // Endpoints move first so walls can be placed where the defaults used to be.
    let start = start.unwrap_or(graph.start());
    let end = end.unwrap_or(graph.end());
    graph.set_endpoints(start, end)?;
    for (node, tile) in cells {
        match tile {
            '#' => graph.set_wall(node, true)?,
            '+' => graph.set_weight(node, HEAVY_WEIGHT)?,
            d @ '1'..='9' => graph.set_weight(node, d.to_digit(10).unwrap_or(1))?,
            _ => {}
        }
    }
    graph.generate_components();
    Ok(graph)
}

/// A grid with walls placed with probability `wall_probability` and weight brushes sprinkled
/// over a further `weight_probability` of the cells. Start and end stay in opposite corners.
pub fn random_grid<R: Rng>(
    width: usize,
    height: usize,
    wall_probability: f64,
    weight_probability: f64,
    rng: &mut R,
) -> GridGraph {
    let mut graph = GridGraph::new(width, height);
    for node in 0..graph.len() {
        if node == graph.start() || node == graph.end() {
            continue;
        }
        let brush = if rng.gen_bool(wall_probability) {
            Some(Brush::Wall)
        } else if rng.gen_bool(weight_probability) {
            Some(Brush::ALL[rng.gen_range(1..Brush::ALL.len())])
        } else {
            None
        };
        if let Some(brush) = brush {
            // Start and end were skipped, so painting cannot fail.
            let _ = graph.paint(node, brush);
        }
    }
    graph.generate_components();
    graph
}

/// Renders `graph` like its [Display](std::fmt::Display) implementation with the search
/// overlaid: `*` marks path cells and `o` explored cells off the path.
pub fn visualize_search(graph: &GridGraph, result: &SearchResult) -> String {
    let path = result.path.as_deref().unwrap_or(&[]);
    graph
        .to_string()
        .lines()
        .enumerate()
        .map(|(y, row)| {
            row.chars()
                .enumerate()
                .map(|(x, tile)| {
                    let node = x + y * graph.width();
                    if tile == 'S' || tile == 'E' {
                        tile
                    } else if path.contains(&node) {
                        '*'
                    } else if result.explored.contains(&node) {
                        'o'
                    } else {
                        tile
                    }
                })
                .chain(std::iter::once('\n'))
                .collect::<String>()
        })
        .collect()
}
