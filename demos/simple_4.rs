use grid_search::{Algorithm, GridGraph};

// In this example every search is run on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut graph = GridGraph::new(3, 3);
    graph.set_wall(4, true).unwrap();
    graph.generate_components();
    println!("{}", graph);
    for algorithm in Algorithm::ALL {
        let result = graph.search(algorithm);
        println!("{algorithm}: {:?}", result.status());
        println!("Explored: {:?}", result.explored);
        if let Some(path) = result.path {
            println!("Path:");
            for node in path {
                println!("{:?}", graph.index_to_coord(node));
            }
        }
    }
}
