//! Shortest routes between towns on a road map.
//!
//! Loads a road file (`towns.txt` by default, see `roadnet.toml`) into a
//! town graph and answers listing and routing queries against it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use roadnet::core::invariants::validate_invariants;
use roadnet::exit_codes;
use roadnet::io::config::{CONFIG_FILE, RoadnetConfig, init_config, load_config};
use roadnet::logging;
use roadnet::manager::TownGraphManager;
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "roadnet",
    version,
    about = "Shortest routes over a network of towns and roads"
)]
struct Cli {
    /// Config file to read.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// List every town in lexical order.
    Towns(MapArgs),
    /// List every road name in lexical order.
    Roads(MapArgs),
    /// Print the shortest route between two towns.
    Path {
        from: String,
        to: String,
        /// Emit a JSON report instead of one segment per line.
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        map: MapArgs,
    },
    /// Load the map and report graph consistency problems.
    Check(MapArgs),
}

#[derive(clap::Args)]
struct MapArgs {
    /// Road file to load instead of the configured `map_path`.
    #[arg(long)]
    map: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct PathReport {
    from: String,
    to: String,
    distance: Option<u64>,
    segments: Vec<String>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Towns(map) => cmd_towns(&cli.config, &map),
        Command::Roads(map) => cmd_roads(&cli.config, &map),
        Command::Path {
            from,
            to,
            json,
            map,
        } => cmd_path(&cli.config, &map, &from, &to, json),
        Command::Check(map) => cmd_check(&cli.config, &map),
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    init_config(config_path, force)?;
    println!("wrote {}", config_path.display());
    Ok(exit_codes::OK)
}

fn cmd_towns(config_path: &Path, map: &MapArgs) -> Result<i32> {
    let manager = load_manager(config_path, map)?;
    for town in manager.all_towns() {
        println!("{town}");
    }
    Ok(exit_codes::OK)
}

fn cmd_roads(config_path: &Path, map: &MapArgs) -> Result<i32> {
    let manager = load_manager(config_path, map)?;
    for road in manager.all_roads() {
        println!("{road}");
    }
    Ok(exit_codes::OK)
}

fn cmd_path(config_path: &Path, map: &MapArgs, from: &str, to: &str, json: bool) -> Result<i32> {
    let mut manager = load_manager(config_path, map)?;
    let segments = manager
        .get_path(from, to)
        .with_context(|| format!("path from '{from}' to '{to}'"))?;
    let distance = manager.path_distance(from, to)?;
    debug!(from, to, segments = segments.len(), ?distance, "path query");

    if json {
        let report = PathReport {
            from: from.to_string(),
            to: to.to_string(),
            distance: if segments.is_empty() { None } else { distance },
            segments,
        };
        let payload = serde_json::to_string_pretty(&report).context("serialize path report")?;
        println!("{payload}");
        return Ok(if report.segments.is_empty() {
            exit_codes::NO_PATH
        } else {
            exit_codes::OK
        });
    }

    if segments.is_empty() {
        eprintln!("no path from {from} to {to}");
        return Ok(exit_codes::NO_PATH);
    }
    for segment in &segments {
        println!("{segment}");
    }
    Ok(exit_codes::OK)
}

fn cmd_check(config_path: &Path, map: &MapArgs) -> Result<i32> {
    let manager = load_manager(config_path, map)?;
    let errors = validate_invariants(manager.graph());
    if !errors.is_empty() {
        bail!("invariant violations:\n- {}", errors.join("\n- "));
    }
    println!(
        "ok: {} towns, {} roads",
        manager.graph().vertex_count(),
        manager.graph().edge_count()
    );
    Ok(exit_codes::OK)
}

fn load_manager(config_path: &Path, map: &MapArgs) -> Result<TownGraphManager> {
    let cfg: RoadnetConfig = load_config(config_path)?;
    let map_path = map.map.clone().unwrap_or(cfg.map_path);
    let mut manager = TownGraphManager::with_distance_unit(cfg.distance_unit);
    manager
        .populate_town_graph(&map_path, cfg.strict)
        .with_context(|| format!("load map {}", map_path.display()))?;
    Ok(manager)
}
