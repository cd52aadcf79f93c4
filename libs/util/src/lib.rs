use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};

/// Overrides where `Config.toml` and `Secrets.toml` are looked up.
pub const CONFIG_DIR_ENV: &str = "RB_CONFIG_DIR";

pub fn workspace_dir() -> PathBuf {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .map(|output| output.stdout)
        .unwrap_or_default();
    let cargo_path = Path::new(std::str::from_utf8(&output).unwrap_or("").trim());
    match cargo_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(workspace_dir)
}

pub fn load_toml(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&text)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    load_toml(&config_dir().join(config_name))
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    load_toml(&config_dir().join("Secrets.toml"))
}
