use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub discovery: DiscoveryConfig,
    pub launcher: LauncherConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    pub supported_binaries: Vec<String>,
    #[serde(default)]
    pub extra_candidates: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LauncherConfig {
    pub remote_command: String,
    pub server_socket: String,
    pub extensions: Vec<String>,
    #[serde(default)]
    pub focus_command: Vec<String>,
}

impl AppConfig {
    /// Load the embedded defaults, replaced wholesale by the user config (or an
    /// explicit file) when one exists. A user file must carry every section.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::defaults()?;

        let user_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => directories::ProjectDirs::from("", "", "nvim-locator")
                .map(|dirs| dirs.config_dir().join("config.toml"))
                .filter(|path| path.exists()),
        };

        if let Some(path) = user_path {
            config = Self::from_file(&path)?;
            tracing::info!("loaded config from {}", path.display());
        }

        config.expand_paths();
        Ok(config)
    }

    pub fn defaults() -> Result<Self> {
        let defaults = include_str!("../../config/default.toml");
        Ok(toml::from_str(defaults)?)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    fn expand_paths(&mut self) {
        self.launcher.server_socket = expand_tilde(&self.launcher.server_socket);
        for candidate in &mut self.discovery.extra_candidates {
            *candidate = expand_tilde(candidate);
        }
    }

    /// Handled extensions without leading `.` or `*`, empty entries dropped.
    pub fn handled_extensions(&self) -> Vec<String> {
        self.launcher
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches(['.', '*']).to_string())
            .filter(|ext| !ext.is_empty())
            .collect()
    }

    pub fn server_socket(&self) -> PathBuf {
        PathBuf::from(&self.launcher.server_socket)
    }
}

/// Expands a bare `~` or a leading `~/`; `~user` forms are left alone.
pub fn expand_tilde(path: &str) -> String {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return path.to_string(),
    };

    match directories::BaseDirs::new() {
        Some(base_dirs) => format!("{}{rest}", base_dirs.home_dir().to_string_lossy()),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_parse() {
        let config = AppConfig::defaults().unwrap();
        assert_eq!(config.discovery.supported_binaries, vec!["nvim"]);
        assert!(config.discovery.extra_candidates.is_empty());
        assert_eq!(config.launcher.remote_command, "nvr");
        assert!(config.launcher.focus_command.is_empty());
        assert!(config.handled_extensions().contains(&"cs".to_string()));
    }

    #[test]
    fn explicit_file_replaces_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[discovery]
supported_binaries = ["nvim", "nvim-qt"]

[launcher]
remote_command = "nvim"
server_socket = "/tmp/nvim.sock"
extensions = [".cs", "*.json", ""]
"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.discovery.supported_binaries.len(), 2);
        assert_eq!(config.launcher.remote_command, "nvim");
        assert_eq!(config.server_socket(), PathBuf::from("/tmp/nvim.sock"));
        assert_eq!(config.handled_extensions(), vec!["cs", "json"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[discovery]\nsupported_binaries = 3").unwrap();
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn partial_user_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[discovery]\nsupported_binaries = [\"nvim\"]").unwrap();
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn tilde_expands_to_home() {
        let expanded = expand_tilde("~/.cache/nvimsocket");
        if directories::BaseDirs::new().is_some() {
            assert!(!expanded.starts_with('~'));
            assert!(expanded.ends_with(".cache/nvimsocket"));
        }
        assert_eq!(expand_tilde("/abs/path"), "/abs/path");
        assert_eq!(expand_tilde("~other/x"), "~other/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }
}
