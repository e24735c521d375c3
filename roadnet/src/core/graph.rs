//! Undirected, weighted road network keyed by town name.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::dictionary::Dictionary;
use crate::core::error::{GraphError, GraphResult};
use crate::core::road::Road;
use crate::core::search::{self, PathTree};
use crate::core::town::Town;

pub const DEFAULT_DISTANCE_UNIT: &str = "mi";

/// Towns and the roads between them.
///
/// The town dictionary is the sole owner of every town. Roads refer to their
/// endpoints by name, and every road listed under a town has both endpoints
/// present in the dictionary.
#[derive(Debug, Clone)]
pub struct Graph {
    towns: Dictionary<String, Town>,
    edge_count: usize,
    distance_unit: String,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_distance_unit(DEFAULT_DISTANCE_UNIT)
    }

    /// Graph whose path segments end in `unit` instead of `mi`.
    pub fn with_distance_unit(unit: impl Into<String>) -> Self {
        Self {
            towns: Dictionary::new(),
            edge_count: 0,
            distance_unit: unit.into(),
        }
    }

    pub fn distance_unit(&self) -> &str {
        &self.distance_unit
    }

    pub fn vertex_count(&self) -> usize {
        self.towns.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn towns(&self) -> impl Iterator<Item = &Town> {
        self.towns.values()
    }

    pub fn town(&self, name: &str) -> Option<&Town> {
        self.towns.get(name)
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.towns.contains(name)
    }

    /// Add `town` unless one with the same name exists.
    ///
    /// The town must not have roads yet; they are attached with
    /// [`Graph::add_edge`].
    pub fn add_vertex(&mut self, town: Town) -> GraphResult<bool> {
        if town.name().is_empty() {
            return Err(GraphError::NullArgument("town name"));
        }
        if self.towns.contains(town.name()) {
            return Ok(false);
        }
        if town.degree() > 0 {
            return Err(GraphError::InvalidArgument(format!(
                "town '{}' already has {} roads",
                town.name(),
                town.degree()
            )));
        }
        debug!(town = town.name(), "add town");
        let previous = self.towns.add(town.name().to_string(), town);
        Ok(previous.is_none())
    }

    /// Connect two existing towns with a new road.
    ///
    /// Fails with [`GraphError::ConnectFailed`] for a loop or when the towns
    /// are already connected; the graph is unchanged in that case.
    pub fn add_edge(
        &mut self,
        source: &str,
        destination: &str,
        distance: u32,
        name: &str,
    ) -> GraphResult<Rc<Road>> {
        self.require_pair(source, destination)?;
        if name.is_empty() {
            return Err(GraphError::NullArgument("road name"));
        }
        let road = Rc::new(Road::new(source, destination, distance, name));
        let accepted = self
            .towns
            .get(source)
            .is_some_and(|town| town.accepts(&road))
            && self
                .towns
                .get(destination)
                .is_some_and(|town| town.accepts(&road));
        if !accepted {
            return Err(GraphError::ConnectFailed {
                road: name.to_string(),
                source_town: source.to_string(),
                destination: destination.to_string(),
            });
        }
        for endpoint in [source, destination] {
            if let Some(town) = self.towns.get_mut(endpoint) {
                town.connect(Rc::clone(&road));
            }
        }
        self.edge_count += 1;
        self.invalidate_paths();
        debug!(road = name, source, destination, distance, "add road");
        Ok(road)
    }

    /// The road joining `source` and `destination`, in either direction.
    pub fn get_edge(&self, source: &str, destination: &str) -> GraphResult<Option<Rc<Road>>> {
        self.require_pair(source, destination)?;
        Ok(self
            .towns
            .get(source)
            .and_then(|town| town.road_to(destination))
            .cloned())
    }

    pub fn contains_edge(&self, source: &str, destination: &str) -> GraphResult<bool> {
        Ok(self.get_edge(source, destination)?.is_some())
    }

    /// Remove the road joining `source` and `destination`.
    ///
    /// Matching uses the endpoint pair only. `distance` and `description`
    /// are still required to describe a road (non-empty description); a
    /// mismatch with the stored road is logged, not rejected.
    pub fn remove_edge(
        &mut self,
        source: &str,
        destination: &str,
        distance: u32,
        description: &str,
    ) -> GraphResult<Option<Rc<Road>>> {
        if description.is_empty() {
            return Err(GraphError::NullArgument("road description"));
        }
        let Some(target) = self.get_edge(source, destination)? else {
            return Ok(None);
        };
        if target.name() != description || target.distance() != distance {
            warn!(
                road = target.name(),
                requested = description,
                stored_distance = target.distance(),
                requested_distance = distance,
                "removing road whose name or distance differs from the request"
            );
        }
        self.detach(source, destination);
        let removed = self.detach(destination, source);
        self.edge_count -= 1;
        self.invalidate_paths();
        debug!(road = target.name(), source, destination, "remove road");
        Ok(removed.or(Some(target)))
    }

    /// Remove `name` and every road touching it.
    ///
    /// Returns false if the town is not in the graph.
    pub fn remove_vertex(&mut self, name: &str) -> bool {
        let Some(town) = self.towns.get(name) else {
            return false;
        };
        let neighbors: Vec<String> = town
            .neighbors()
            .map(|(neighbor, _)| neighbor.to_string())
            .collect();
        for neighbor in &neighbors {
            self.detach(neighbor, name);
            self.detach(name, neighbor);
            self.edge_count -= 1;
        }
        self.towns.remove(name);
        self.invalidate_paths();
        debug!(town = name, roads = neighbors.len(), "remove town");
        true
    }

    pub fn vertex_set(&self) -> HashSet<&Town> {
        self.towns.values().collect()
    }

    pub fn edge_set(&self) -> HashSet<Rc<Road>> {
        self.towns
            .values()
            .flat_map(|town| town.roads().iter().cloned())
            .collect()
    }

    pub fn edges_of(&self, name: &str) -> GraphResult<HashSet<Rc<Road>>> {
        let town = self.require(name)?;
        Ok(town.roads().iter().cloned().collect())
    }

    /// Path segments from `source` to `destination`, empty if disjoint.
    ///
    /// Runs a full single-source search the first time `source` is queried
    /// and caches every reachable destination on the town; any mutation of
    /// the road network drops all caches.
    pub fn shortest_path(&mut self, source: &str, destination: &str) -> GraphResult<Vec<String>> {
        self.require_pair(source, destination)?;
        let cached = self
            .towns
            .get(source)
            .is_some_and(Town::has_cached_paths);
        if !cached {
            let paths = self.search(source)?.path_cache();
            debug!(source, destinations = paths.len(), "cache shortest paths");
            if let Some(town) = self.towns.get_mut(source) {
                town.store_paths(paths);
            }
        }
        Ok(self
            .towns
            .get(source)
            .and_then(|town| town.cached_path(destination))
            .map(<[String]>::to_vec)
            .unwrap_or_default())
    }

    /// Shortest paths from `source` to every reachable town.
    pub fn search(&self, source: &str) -> GraphResult<PathTree> {
        self.require(source)?;
        Ok(search::search(self, source, None))
    }

    /// Search from `source` that stops once `destination` is settled.
    pub fn search_to(&self, source: &str, destination: &str) -> GraphResult<PathTree> {
        self.require_pair(source, destination)?;
        Ok(search::search(self, source, Some(destination)))
    }

    #[cfg(test)]
    pub(crate) fn town_mut(&mut self, name: &str) -> Option<&mut Town> {
        self.towns.get_mut(name)
    }

    fn detach(&mut self, town: &str, neighbor: &str) -> Option<Rc<Road>> {
        self.towns.get_mut(town)?.disconnect(neighbor)
    }

    fn invalidate_paths(&mut self) {
        for town in self.towns.values_mut() {
            town.invalidate_paths();
        }
    }

    fn require(&self, name: &str) -> GraphResult<&Town> {
        if name.is_empty() {
            return Err(GraphError::NullArgument("town name"));
        }
        self.towns
            .get(name)
            .ok_or_else(|| GraphError::UnknownTown(name.to_string()))
    }

    fn require_pair(&self, source: &str, destination: &str) -> GraphResult<()> {
        self.require(source)?;
        self.require(destination)?;
        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
