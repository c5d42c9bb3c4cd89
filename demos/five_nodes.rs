//! Searches the cheapest Path through a small five Node Graph and prints it.
//!
//! Run with `RUST_LOG=debug cargo run --example five_nodes --features log` to also see the
//! summary of the search.

use std::collections::HashMap;
use weighted_astar::prelude::*;

fn main() {
    env_logger::init();

    // Node: {Neighbor: Distance}
    let graph: HashMap<(i32, i32), HashMap<(i32, i32), u32>> = [
        ((0, 0), vec![((0, 1), 1), ((1, 0), 1)]),
        ((0, 1), vec![((0, 0), 1), ((1, 1), 1)]),
        ((1, 0), vec![((0, 0), 1), ((1, 1), 1)]),
        ((1, 1), vec![((0, 1), 1), ((1, 0), 1), ((2, 2), 2)]),
        ((2, 2), vec![((1, 1), 2)]),
    ]
    .into_iter()
    .map(|(node, edges)| (node, edges.into_iter().collect()))
    .collect();

    let start = (0, 0);
    let goal = (2, 2);

    match find_path(&graph, start, goal, &Manhattan) {
        Ok(path) => println!("shortest path: {}", path),
        Err(err) if err.is_not_found() => println!("Path not found."),
        Err(err) => eprintln!("invalid input: {}", err),
    }
}
