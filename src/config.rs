use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::render::DEFAULT_TITLE;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MirtargetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Path the search form is served from and submits to
    pub path: Option<String>,
    pub title: Option<String>,
}

/// Settings the server runs with, after defaults and overrides
#[derive(Debug, Clone, PartialEq)]
pub struct ServeSettings {
    pub database: PathBuf,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub title: String,
}

pub const DEFAULT_DATABASE: &str = "mirna.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PATH: &str = "/";

pub fn default_config_path() -> PathBuf {
    PathBuf::from("mirtarget.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<MirtargetConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: MirtargetConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &MirtargetConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

impl MirtargetConfig {
    /// A config with every default spelled out, as written by `init`
    pub fn with_defaults() -> Self {
        Self {
            database: Some(DEFAULT_DATABASE.to_string()),
            server: ServerConfig {
                host: Some(DEFAULT_HOST.to_string()),
                port: Some(DEFAULT_PORT),
                path: Some(DEFAULT_PATH.to_string()),
                title: Some(DEFAULT_TITLE.to_string()),
            },
        }
    }

    /// Database path, preferring an explicit override
    pub fn database_path(&self, cli_database: Option<PathBuf>) -> PathBuf {
        cli_database
            .or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// Resolve server settings; command-line values win over the file
    pub fn serve_settings(
        &self,
        cli_database: Option<PathBuf>,
        cli_host: Option<String>,
        cli_port: Option<u16>,
    ) -> anyhow::Result<ServeSettings> {
        let path = self
            .server
            .path
            .clone()
            .unwrap_or_else(|| DEFAULT_PATH.to_string());

        Ok(ServeSettings {
            database: self.database_path(cli_database),
            host: cli_host
                .or_else(|| self.server.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli_port.or(self.server.port).unwrap_or(DEFAULT_PORT),
            path: normalize_mount_path(&path)?,
            title: self
                .server
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        })
    }
}

/// Routes must start with `/` and hold no captures or wildcards
fn normalize_mount_path(path: &str) -> anyhow::Result<String> {
    let trimmed = path.trim();
    if trimmed.contains(['{', '}', '*']) || trimmed.split('/').any(|segment| segment.starts_with(':')) {
        anyhow::bail!("server path {:?} must be a literal path, not a route pattern", trimmed);
    }

    if trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("/{}", trimmed))
    }
}
