//! Deterministic, pure road network logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod dictionary;
pub mod error;
pub mod graph;
pub mod invariants;
pub mod list;
pub mod road;
pub mod search;
pub mod stack;
pub mod town;
