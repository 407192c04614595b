use anyhow::Result;

use crate::discovery::InstallationRegistry;
use crate::discovery::candidates::platform_candidates;
use crate::launcher::{CommandRunner, Launcher, SystemRunner};
use crate::model::config::AppConfig;
use crate::msg::Msg;

/// Host adapter: owns the single registry for the process and turns
/// messages into output lines.
pub struct App {
    registry: InstallationRegistry,
    launcher: Launcher,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let candidates = platform_candidates(&config.discovery.extra_candidates);
        let registry = InstallationRegistry::new(candidates, &config.discovery.supported_binaries);
        Self::with_parts(config, registry, Box::new(SystemRunner))
    }

    pub fn with_parts(
        config: &AppConfig,
        registry: InstallationRegistry,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            registry,
            launcher: Launcher::new(config, runner),
        }
    }

    pub fn update(&mut self, msg: Msg) -> Result<Vec<String>> {
        tracing::debug!("update: {msg:?}");

        match msg {
            Msg::ListInstallations => {
                let installations = self.registry.list();
                if installations.is_empty() {
                    return Ok(vec!["no neovim installations found".to_string()]);
                }
                Ok(installations.iter().map(|i| i.row()).collect())
            }
            Msg::Resolve(path) => match self.registry.resolve(&path) {
                Some(installation) => Ok(vec![installation.row()]),
                None => Ok(vec![format!("unsupported editor: {path}")]),
            },
            Msg::Open(request) => {
                self.launcher.open(&request)?;
                let opened = match request.file.as_ref() {
                    Some(file) => format!("opened {}", file.display()),
                    None => "opened project".to_string(),
                };
                Ok(vec![opened])
            }
        }
    }
}
