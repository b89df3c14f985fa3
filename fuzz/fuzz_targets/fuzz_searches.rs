// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waygraph::{Distance, Graph};

#[derive(Debug, Arbitrary)]
struct Input {
    start: u8,
    edges: Vec<(u8, u8, Option<u16>)>,
}

fuzz_target!(|input: Input| {
    let mut graph: Graph<u8, u32> = Graph::new();
    for (from, to, weight) in input.edges {
        graph.insert_edge(from, to, weight.map(u32::from));
    }

    assert_eq!(graph.dfs(&input.start), graph.bfs(&input.start));

    let paths = graph.dijkstra(&input.start).expect("unsigned weights are valid");
    assert_eq!(paths.distance(&input.start), Distance::Finite(0));

    let forest = graph.kruskal().expect("unsigned weights are valid");
    assert!(forest.len() <= graph.edge_count());
    // At most 255 forest edges of u16 weight: the total fits u32
    forest.total_weight().expect("forest total fits u32");
});
