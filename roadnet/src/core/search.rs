//! Dijkstra search over the road network.
//!
//! Search state (settled flag, cost, predecessor road) lives in a
//! [`PathTree`] owned by the call, never on the towns, so every search starts
//! clean and searches cannot observe each other.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;

use crate::core::graph::Graph;
use crate::core::road::Road;
use crate::core::stack::LinkedStack;
use crate::core::town::PathCache;

/// Settled state of one town.
#[derive(Debug, Clone)]
struct Visit {
    cost: u64,
    via: Option<Rc<Road>>,
}

/// Queue entry ordered by cost, then by insertion sequence (FIFO ties).
#[derive(Debug)]
struct Candidate {
    cost: u64,
    sequence: u64,
    town: String,
    via: Option<Rc<Road>>,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cost, self.sequence).cmp(&(other.cost, other.sequence))
    }
}

/// Result of a search rooted at one town.
#[derive(Debug, Clone)]
pub struct PathTree {
    source: String,
    unit: String,
    visits: HashMap<String, Visit>,
}

impl PathTree {
    /// True if the search settled `town`.
    pub fn reaches(&self, town: &str) -> bool {
        self.visits.contains_key(town)
    }

    /// Accumulated distance from the source to `town`.
    pub fn cost(&self, town: &str) -> Option<u64> {
        self.visits.get(town).map(|visit| visit.cost)
    }

    /// Town preceding `town` on its shortest path.
    pub fn predecessor(&self, town: &str) -> Option<&str> {
        let via = self.visits.get(town)?.via.as_ref()?;
        via.other(town)
    }

    /// Settled towns other than the source.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.visits
            .keys()
            .map(String::as_str)
            .filter(|town| *town != self.source)
    }

    /// Roads from the source to `destination`, in travel order.
    pub fn roads(&self, destination: &str) -> Option<Vec<Rc<Road>>> {
        if destination == self.source || !self.reaches(destination) {
            return None;
        }
        let mut stack = LinkedStack::new();
        let mut current = destination;
        while let Some(via) = self.visits.get(current).and_then(|visit| visit.via.as_ref()) {
            stack.push(Rc::clone(via));
            current = via.other(current)?;
        }
        Some(stack.into_vec())
    }

    /// Human-readable segments from the source to `destination`.
    ///
    /// Each segment reads `"<from> via <road> to <to> <distance> <unit>"`.
    /// Returns `None` for the source itself and for unreachable towns.
    pub fn segments(&self, destination: &str) -> Option<Vec<String>> {
        if destination == self.source || !self.reaches(destination) {
            return None;
        }
        let mut stack = LinkedStack::new();
        let mut current = destination;
        while let Some(via) = self.visits.get(current).and_then(|visit| visit.via.as_ref()) {
            let from = via.other(current)?;
            stack.push(format_segment(from, via, current, &self.unit));
            current = from;
        }
        Some(stack.into_vec())
    }

    /// Segments for every settled destination, keyed by name.
    pub fn path_cache(&self) -> PathCache {
        let mut cache = PathCache::new();
        for destination in self.destinations() {
            if let Some(segments) = self.segments(destination) {
                cache.add(destination.to_string(), segments);
            }
        }
        cache
    }
}

pub fn format_segment(from: &str, road: &Road, to: &str, unit: &str) -> String {
    format!(
        "{} via {} to {} {} {}",
        from,
        road.name(),
        to,
        road.distance(),
        unit
    )
}

/// Run Dijkstra from `source`, stopping early once `target` is settled.
///
/// `source` must be a town of `graph`; [`Graph::search`] and
/// [`Graph::search_to`] check that before calling in.
pub(crate) fn search(graph: &Graph, source: &str, target: Option<&str>) -> PathTree {
    let mut visits: HashMap<String, Visit> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0;
    queue.push(Reverse(Candidate {
        cost: 0,
        sequence,
        town: source.to_string(),
        via: None,
    }));

    while let Some(Reverse(candidate)) = queue.pop() {
        if visits.contains_key(&candidate.town) {
            continue;
        }
        let Candidate {
            cost, town, via, ..
        } = candidate;
        visits.insert(town.clone(), Visit { cost, via });
        if target == Some(town.as_str()) {
            break;
        }
        let Some(settled) = graph.town(&town) else {
            continue;
        };
        for (neighbor, road) in settled.neighbors() {
            if visits.contains_key(neighbor) {
                continue;
            }
            sequence += 1;
            queue.push(Reverse(Candidate {
                cost: cost + u64::from(road.distance()),
                sequence,
                town: neighbor.to_string(),
                via: Some(Rc::clone(road)),
            }));
        }
    }

    PathTree {
        source: source.to_string(),
        unit: graph.distance_unit().to_string(),
        visits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::town::Town;
    use crate::test_support::{sample_graph, town_graph};

    /// Cheapest simple-path cost by exhaustive DFS.
    fn brute_force_cost(graph: &Graph, from: &str, to: &str) -> Option<u64> {
        fn walk(
            graph: &Graph,
            at: &str,
            to: &str,
            cost: u64,
            seen: &mut Vec<String>,
            best: &mut Option<u64>,
        ) {
            if at == to {
                *best = Some(best.map_or(cost, |current| current.min(cost)));
                return;
            }
            let Some(town) = graph.town(at) else {
                return;
            };
            for (neighbor, road) in town.neighbors() {
                if seen.iter().any(|name| name == neighbor) {
                    continue;
                }
                seen.push(neighbor.to_string());
                walk(graph, neighbor, to, cost + u64::from(road.distance()), seen, best);
                seen.pop();
            }
        }
        let mut best = None;
        walk(graph, from, to, 0, &mut vec![from.to_string()], &mut best);
        best
    }

    /// Deterministic pseudo-random graph over `n` towns.
    fn scrambled_graph(n: usize, seed: u64) -> Graph {
        let names: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut graph = town_graph(&refs);
        let mut state = seed;
        for i in 0..n {
            for j in (i + 1)..n {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                if (state >> 33) % 3 == 0 {
                    let distance = ((state >> 40) % 20) as u32;
                    graph
                        .add_edge(&names[i], &names[j], distance, &format!("R{i}_{j}"))
                        .expect("add road");
                }
            }
        }
        graph
    }

    #[test]
    fn search_records_costs_and_predecessors() {
        let graph = sample_graph();
        let tree = graph.search("A").expect("search");
        assert_eq!(tree.cost("A"), Some(0));
        assert_eq!(tree.cost("B"), Some(5));
        assert_eq!(tree.cost("C"), Some(8));
        assert_eq!(tree.predecessor("C"), Some("B"));
        assert_eq!(tree.predecessor("A"), None);
    }

    #[test]
    fn segments_run_source_to_destination() {
        let graph = sample_graph();
        let tree = graph.search("C").expect("search");
        assert_eq!(
            tree.segments("A"),
            Some(vec![
                "C via R2 to B 3 mi".to_string(),
                "B via R1 to A 5 mi".to_string(),
            ])
        );
        assert_eq!(tree.segments("C"), None);
    }

    #[test]
    fn roads_follow_travel_order() {
        let graph = sample_graph();
        let tree = graph.search("A").expect("search");
        let names: Vec<String> = tree
            .roads("C")
            .expect("roads")
            .iter()
            .map(|road| road.name().to_string())
            .collect();
        assert_eq!(names, vec!["R1", "R2"]);
    }

    #[test]
    fn unreachable_towns_are_not_settled() {
        let mut graph = sample_graph();
        graph.add_vertex(Town::new("D")).expect("add");
        let tree = graph.search("A").expect("search");
        assert!(!tree.reaches("D"));
        assert_eq!(tree.segments("D"), None);
        let cache = tree.path_cache();
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains("D"));
    }

    #[test]
    fn bounded_search_stops_at_target() {
        let mut graph = town_graph(&["A", "B", "C", "D"]);
        graph.add_edge("A", "B", 1, "AB").expect("road");
        graph.add_edge("B", "C", 1, "BC").expect("road");
        graph.add_edge("C", "D", 1, "CD").expect("road");
        let tree = graph.search_to("A", "B").expect("search");
        assert_eq!(tree.cost("B"), Some(1));
        assert!(!tree.reaches("D"));
    }

    #[test]
    fn zero_distance_roads_are_traversed() {
        let mut graph = town_graph(&["A", "B", "C"]);
        graph.add_edge("A", "B", 0, "Free").expect("road");
        graph.add_edge("B", "C", 0, "Gratis").expect("road");
        graph.add_edge("A", "C", 1, "Toll").expect("road");
        let tree = graph.search("A").expect("search");
        assert_eq!(tree.cost("C"), Some(0));
    }

    #[test]
    fn segment_sum_equals_cost_and_matches_brute_force() {
        for seed in 1..=8 {
            let graph = scrambled_graph(7, seed);
            for source in graph.towns().map(Town::name) {
                let tree = graph.search(source).expect("search");
                for destination in graph.towns().map(Town::name) {
                    if destination == source {
                        continue;
                    }
                    let expected = brute_force_cost(&graph, source, destination);
                    assert_eq!(tree.cost(destination), expected, "{source} -> {destination}");
                    if let Some(roads) = tree.roads(destination) {
                        let total: u64 = roads.iter().map(|road| u64::from(road.distance())).sum();
                        assert_eq!(Some(total), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn equal_costs_settle_in_insertion_order() {
        let mut graph = town_graph(&["S", "X", "Y", "T"]);
        graph.add_edge("S", "X", 1, "SX").expect("road");
        graph.add_edge("S", "Y", 1, "SY").expect("road");
        graph.add_edge("X", "T", 1, "XT").expect("road");
        graph.add_edge("Y", "T", 1, "YT").expect("road");
        let tree = graph.search("S").expect("search");
        assert_eq!(tree.predecessor("T"), Some("X"));
    }
}
