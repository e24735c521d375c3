//! Test-only helpers for building road networks and map files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::graph::Graph;
use crate::core::town::Town;

/// Road file for the three-town triangle used across tests.
pub const SAMPLE_MAP: &str = "R1,5;A;B\nR2,3;B;C\nR3,10;A;C\n";

/// Graph holding `names` and no roads.
pub fn town_graph(names: &[&str]) -> Graph {
    let mut graph = Graph::new();
    for name in names {
        graph.add_vertex(Town::new(*name)).expect("add town");
    }
    graph
}

/// Triangle `A-B` (5, R1), `B-C` (3, R2), `A-C` (10, R3).
pub fn sample_graph() -> Graph {
    let mut graph = town_graph(&["A", "B", "C"]);
    graph.add_edge("A", "B", 5, "R1").expect("add R1");
    graph.add_edge("B", "C", 3, "R2").expect("add R2");
    graph.add_edge("A", "C", 10, "R3").expect("add R3");
    graph
}

/// Write `contents` to `towns.txt` in a fresh temp dir.
pub fn map_fixture(contents: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("towns.txt");
    fs::write(&path, contents).expect("write map");
    (temp, path)
}
