use grid_search::{Algorithm, Brush, GridGraph};

// Paints a band of heavy terrain across a 15x15 grid with a single light gap and shows how the
// weighted searches route through the gap while breadth-first search walks straight across.

fn main() {
    let mut graph = GridGraph::new(15, 15);
    for x in 0..15 {
        let node = x + 7 * 15;
        let brush = if x == 12 {
            Brush::LightWeight
        } else {
            Brush::HeavyWeight
        };
        graph.paint(node, brush).unwrap();
    }
    for y in 2..12 {
        graph.paint(5 + y * 15, Brush::Wall).unwrap();
    }
    println!("{}", graph);

    for algorithm in Algorithm::ALL {
        let result = graph.search(algorithm);
        println!(
            "{algorithm}: explored {} cells, path cost {:?}",
            result.explored.len(),
            result.path_cost(&graph)
        );
    }
}
