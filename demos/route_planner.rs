// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Route planner demo - shortest routes and a cheapest cable layout
//!
//! Run with `RUST_LOG=waygraph=debug cargo run --example route_planner`
//! to see the search logs.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use waygraph::{Graph, GraphConfig};

const CONFIG: &str = r#"
membership = "all_endpoints"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = GraphConfig::from_toml_str(CONFIG).context("Failed to parse demo configuration")?;
    let mut roads: Graph<&str, u32> = Graph::with_config(config);

    for (from, to, minutes) in [
        ("depot", "market", 7),
        ("depot", "mill", 9),
        ("depot", "harbor", 14),
        ("market", "mill", 10),
        ("market", "bridge", 15),
        ("mill", "bridge", 11),
        ("mill", "harbor", 2),
        ("harbor", "tower", 9),
        ("bridge", "tower", 6),
    ] {
        roads.add_weighted_edge(from, to, minutes);
        roads.add_weighted_edge(to, from, minutes);
    }

    info!("{} places, {} one-way roads", roads.node_count(), roads.edge_count());

    let paths = roads
        .dijkstra(&"depot")
        .context("Failed to plan routes from the depot")?;
    for place in roads.nodes() {
        let route = paths
            .path_to(place)
            .map(|stops| stops.join(" -> "))
            .unwrap_or_else(|| "unreachable".into());
        println!("{place:>8}: {:>3} min  {route}", paths.distance(place));
    }

    let cables = roads
        .kruskal()
        .context("Failed to lay out cables")?;
    let total = cables
        .total_weight()
        .context("Cable layout total does not fit the weight type")?;
    println!("\ncable layout ({total} total):");
    for cable in &cables {
        println!("  {} - {} ({})", cable.from, cable.to, cable.weight);
    }

    println!("\nreachable by breadth-first search: {:?}", roads.bfs_order(&"depot"));
    println!("\n{}", roads.to_dot());

    Ok(())
}
