//! I/O helpers for roadnet commands.

pub mod config;
pub mod road_file;
