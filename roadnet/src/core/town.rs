//! Towns: named vertices with an adjacency list and a path cache.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::core::dictionary::Dictionary;
use crate::core::list::LinkedList;
use crate::core::road::Road;

/// Destination name -> ordered path segments from this town.
pub type PathCache = Dictionary<String, Vec<String>>;

/// A vertex of the road network.
///
/// Each road appears in the adjacency list of both of its endpoints; the two
/// lists share one `Rc<Road>`. Equality, hashing and ordering use the name
/// only.
#[derive(Debug, Clone)]
pub struct Town {
    name: String,
    roads: LinkedList<Rc<Road>>,
    paths: Option<PathCache>,
}

impl Town {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roads: LinkedList::new(),
            paths: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roads(&self) -> &LinkedList<Rc<Road>> {
        &self.roads
    }

    pub fn degree(&self) -> usize {
        self.roads.len()
    }

    /// `(neighbor name, road)` for every road touching this town.
    pub fn neighbors(&self) -> impl Iterator<Item = (&str, &Rc<Road>)> {
        self.roads
            .iter()
            .filter_map(|road| road.other(&self.name).map(|neighbor| (neighbor, road)))
    }

    pub fn road_to(&self, neighbor: &str) -> Option<&Rc<Road>> {
        self.neighbors()
            .find(|(candidate, _)| *candidate == neighbor)
            .map(|(_, road)| road)
    }

    /// True if `road` could be attached here: it touches this town, is not a
    /// loop, and no road to the same neighbor exists yet.
    pub fn accepts(&self, road: &Road) -> bool {
        match road.other(&self.name) {
            Some(neighbor) => !road.is_loop() && self.road_to(neighbor).is_none(),
            None => false,
        }
    }

    /// Attach `road` to this town's adjacency list.
    ///
    /// Returns false (leaving the list untouched) if [`Town::accepts`] does.
    pub(crate) fn connect(&mut self, road: Rc<Road>) -> bool {
        if !self.accepts(&road) {
            return false;
        }
        self.roads.push(road);
        true
    }

    /// Detach the road leading to `neighbor`.
    pub(crate) fn disconnect(&mut self, neighbor: &str) -> Option<Rc<Road>> {
        let name = self.name.clone();
        let mut cursor = self.roads.cursor();
        while let Some(road) = cursor.next() {
            if road.other(&name) == Some(neighbor) {
                return cursor.remove().ok();
            }
        }
        None
    }

    pub fn has_cached_paths(&self) -> bool {
        self.paths.is_some()
    }

    /// Segments of the cached path to `destination`.
    ///
    /// `None` if no search has been cached or `destination` was unreachable.
    pub fn cached_path(&self, destination: &str) -> Option<&[String]> {
        self.paths
            .as_ref()
            .and_then(|paths| paths.get(destination))
            .map(Vec::as_slice)
    }

    pub(crate) fn store_paths(&mut self, paths: PathCache) {
        self.paths = Some(paths);
    }

    pub(crate) fn invalidate_paths(&mut self) {
        self.paths = None;
    }
}

impl PartialEq for Town {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Town {}

impl Hash for Town {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Town {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Town {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
