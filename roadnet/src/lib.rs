//! Shortest routes over a network of towns and roads.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (containers, graph, search).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and road files).
//!
//! [`manager`] coordinates the two into the query surface used by the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod manager;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
