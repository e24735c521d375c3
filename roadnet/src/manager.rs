//! Query surface over a [`Graph`] of towns.
//!
//! `TownGraphManager` speaks in names: callers pass town and road names and
//! get names or rendered path segments back, never graph internals.

use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::core::error::{GraphError, GraphResult};
use crate::core::graph::Graph;
use crate::core::road::Road;
use crate::core::town::Town;
use crate::io::road_file::read_road_file;

#[derive(Debug, Clone, Default)]
pub struct TownGraphManager {
    graph: Graph,
}

impl TownGraphManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distance_unit(unit: impl Into<String>) -> Self {
        Self {
            graph: Graph::with_distance_unit(unit),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns false if the town already exists.
    pub fn add_town(&mut self, name: &str) -> GraphResult<bool> {
        self.graph.add_vertex(Town::new(name))
    }

    pub fn contains_town(&self, name: &str) -> bool {
        self.graph.contains_vertex(name)
    }

    pub fn town(&self, name: &str) -> Option<&Town> {
        self.graph.town(name)
    }

    /// Connect two towns, adding either of them if missing.
    ///
    /// Returns false when the road would be a loop or the towns are already
    /// connected.
    pub fn add_road(
        &mut self,
        town_a: &str,
        town_b: &str,
        weight: u32,
        road: &str,
    ) -> GraphResult<bool> {
        self.add_town(town_a)?;
        self.add_town(town_b)?;
        match self.graph.add_edge(town_a, town_b, weight, road) {
            Ok(_) => Ok(true),
            Err(GraphError::ConnectFailed { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Name of the road joining the two towns.
    pub fn get_road(&self, town_a: &str, town_b: &str) -> Option<String> {
        self.graph
            .get_edge(town_a, town_b)
            .ok()
            .flatten()
            .map(|road| road.name().to_string())
    }

    pub fn contains_road_connection(&self, town_a: &str, town_b: &str) -> bool {
        self.graph.contains_edge(town_a, town_b).unwrap_or(false)
    }

    /// Remove the road joining the two towns.
    ///
    /// Returns false if either town is unknown or they are not connected.
    pub fn delete_road_connection(
        &mut self,
        town_a: &str,
        town_b: &str,
        road: &str,
    ) -> GraphResult<bool> {
        if !self.contains_town(town_a) || !self.contains_town(town_b) {
            return Ok(false);
        }
        let Some(existing) = self.graph.get_edge(town_a, town_b)? else {
            return Ok(false);
        };
        let removed = self
            .graph
            .remove_edge(town_a, town_b, existing.distance(), road)?;
        Ok(removed.is_some())
    }

    pub fn delete_town(&mut self, name: &str) -> bool {
        self.graph.remove_vertex(name)
    }

    /// Every town name in lexical order.
    pub fn all_towns(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .graph
            .towns()
            .map(|town| town.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Every road name in lexical order.
    pub fn all_roads(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .graph
            .edge_set()
            .iter()
            .map(|road| road.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Every road, ordered by name and then by endpoints.
    pub fn roads(&self) -> Vec<Rc<Road>> {
        let mut roads: Vec<Rc<Road>> = self.graph.edge_set().into_iter().collect();
        roads.sort_by(|a, b| {
            (a.name(), a.source(), a.destination()).cmp(&(b.name(), b.source(), b.destination()))
        });
        roads
    }

    /// Rendered path segments, empty when the towns are not connected.
    pub fn get_path(&mut self, town_a: &str, town_b: &str) -> GraphResult<Vec<String>> {
        self.graph.shortest_path(town_a, town_b)
    }

    /// Total distance of the shortest path, `None` when unreachable.
    pub fn path_distance(&self, town_a: &str, town_b: &str) -> GraphResult<Option<u64>> {
        Ok(self.graph.search_to(town_a, town_b)?.cost(town_b))
    }

    /// Load every road in the file at `path`. Returns the number added.
    ///
    /// A road between towns that are already connected is an error in strict
    /// mode and is skipped otherwise. A failed load leaves the manager
    /// unchanged.
    pub fn populate_town_graph(&mut self, path: &Path, strict: bool) -> Result<usize> {
        let records = read_road_file(path, strict)?;
        let mut staged = self.clone();
        let mut added = 0;
        for record in &records {
            let location = format!("{}:{}", path.display(), record.line);
            let connected = staged
                .add_road(
                    &record.source,
                    &record.destination,
                    record.distance,
                    &record.road,
                )
                .with_context(|| format!("{location}: add road '{}'", record.road))?;
            if connected {
                added += 1;
            } else if strict {
                bail!(
                    "{location}: road '{}' duplicates an existing connection between '{}' and '{}'",
                    record.road,
                    record.source,
                    record.destination
                );
            } else {
                warn!(
                    path = %path.display(),
                    line = record.line,
                    road = %record.road,
                    "skip duplicate road"
                );
            }
        }
        info!(
            path = %path.display(),
            roads = added,
            towns = staged.graph.vertex_count(),
            "populated town graph"
        );
        *self = staged;
        Ok(added)
    }
}
