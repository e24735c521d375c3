//! Undirected road between two towns.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A named, weighted connection between two towns.
///
/// Endpoints are town names, i.e. handles into the graph's town dictionary;
/// a road never owns the towns it joins. Identity is the unordered endpoint
/// pair: `A-B` equals `B-A` whatever the names or distances.
#[derive(Debug, Clone)]
pub struct Road {
    source: String,
    destination: String,
    distance: u32,
    name: String,
}

impl Road {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        distance: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance,
            name: name.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, town: &str) -> bool {
        self.source == town || self.destination == town
    }

    /// The endpoint opposite `town`, if `town` is an endpoint.
    pub fn other(&self, town: &str) -> Option<&str> {
        if self.source == town {
            Some(&self.destination)
        } else if self.destination == town {
            Some(&self.source)
        } else {
            None
        }
    }

    /// True if this road joins `a` and `b` in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.destination == b) || (self.source == b && self.destination == a)
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.destination
    }

    fn endpoints(&self) -> (&str, &str) {
        if self.source <= self.destination {
            (&self.source, &self.destination)
        } else {
            (&self.destination, &self.source)
        }
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.source, &other.destination)
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {}, {})",
            self.name, self.source, self.destination, self.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_direction_name_and_distance() {
        let forward = Road::new("A", "B", 5, "R1");
        let backward = Road::new("B", "A", 9, "R9");
        assert_eq!(forward, backward);
        assert_ne!(forward, Road::new("A", "C", 5, "R1"));
    }

    #[test]
    fn hash_matches_unordered_equality() {
        let mut set = HashSet::new();
        set.insert(Road::new("A", "B", 5, "R1"));
        set.insert(Road::new("B", "A", 5, "R1"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn other_returns_opposite_endpoint() {
        let road = Road::new("A", "B", 5, "R1");
        assert_eq!(road.other("A"), Some("B"));
        assert_eq!(road.other("B"), Some("A"));
        assert_eq!(road.other("C"), None);
        assert!(road.contains("A"));
        assert!(!road.contains("C"));
    }
}
