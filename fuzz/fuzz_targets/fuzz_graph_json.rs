// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use waygraph::Graph;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(graph) = Graph::<String, f64>::from_json(text) {
        let json = graph.to_json().expect("loaded graph serializes");
        let again = Graph::<String, f64>::from_json(&json).expect("own output parses");
        assert_eq!(again.edge_count(), graph.edge_count());
        if let Some(start) = graph.nodes().first() {
            let _ = graph.dijkstra(start);
            let _ = graph.kruskal();
        }
    }
});
