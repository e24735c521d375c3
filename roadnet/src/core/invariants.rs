//! Structural invariants of a road network.

use std::collections::HashSet;

use crate::core::graph::Graph;

/// Check invariants the graph API is meant to preserve:
/// - Every listed road touches the town it is listed under
/// - Both endpoints are towns of the graph
/// - No loops and no parallel roads
/// - Each road appears under both of its endpoints
/// - `edge_count` matches the adjacency lists
pub fn validate_invariants(graph: &Graph) -> Vec<String> {
    let mut errors = Vec::new();
    let mut listings = 0;

    for town in graph.towns() {
        let mut neighbors = HashSet::new();
        for road in town.roads() {
            listings += 1;
            let Some(neighbor) = road.other(town.name()) else {
                errors.push(format!(
                    "{}: road '{}' does not touch this town",
                    town.name(),
                    road.name()
                ));
                continue;
            };
            if road.is_loop() {
                errors.push(format!("{}: road '{}' is a loop", town.name(), road.name()));
                continue;
            }
            if !neighbors.insert(neighbor) {
                errors.push(format!(
                    "{}: parallel roads to '{}'",
                    town.name(),
                    neighbor
                ));
            }
            match graph.town(neighbor) {
                None => errors.push(format!(
                    "{}: road '{}' leads to missing town '{}'",
                    town.name(),
                    road.name(),
                    neighbor
                )),
                Some(other) if !other.roads().contains(road) => errors.push(format!(
                    "{}: road '{}' is not listed under '{}'",
                    town.name(),
                    road.name(),
                    neighbor
                )),
                Some(_) => {}
            }
        }
    }

    if listings != graph.edge_count() * 2 {
        errors.push(format!(
            "edge_count {} disagrees with {} adjacency listings",
            graph.edge_count(),
            listings
        ));
    }

    errors
}
