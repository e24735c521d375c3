//! Roadnet configuration stored in `roadnet.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "roadnet.toml";

/// Roadnet configuration (TOML).
///
/// Missing fields default to the values in [`RoadnetConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoadnetConfig {
    /// Road file loaded when a command is not given `--map`.
    pub map_path: PathBuf,

    /// Abort loading on the first malformed or duplicate road line.
    pub strict: bool,

    /// Unit suffix rendered in path segments.
    pub distance_unit: String,
}

impl Default for RoadnetConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("towns.txt"),
            strict: true,
            distance_unit: "mi".to_string(),
        }
    }
}

impl RoadnetConfig {
    pub fn validate(&self) -> Result<()> {
        if self.map_path.as_os_str().is_empty() {
            return Err(anyhow!("map_path must not be empty"));
        }
        if self.distance_unit.trim().is_empty() {
            return Err(anyhow!("distance_unit must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RoadnetConfig::default()`.
pub fn load_config(path: &Path) -> Result<RoadnetConfig> {
    if !path.exists() {
        let cfg = RoadnetConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RoadnetConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RoadnetConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write the default config to `path`.
///
/// Fails if the file already exists unless `force` is set.
pub fn init_config(path: &Path, force: bool) -> Result<RoadnetConfig> {
    if path.exists() && !force {
        return Err(anyhow!(
            "roadnet init: {} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    let cfg = RoadnetConfig::default();
    write_config(path, &cfg)?;
    Ok(cfg)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
