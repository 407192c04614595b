use std::path::{Path, PathBuf};

use crate::launcher::{CommandRunner, LaunchError};
use crate::model::config::AppConfig;

/// A file (or the whole project, when `file` is `None`) to show in Neovim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenRequest {
    pub file: Option<PathBuf>,
    /// 1-indexed; defaults to the first line.
    pub line: Option<usize>,
    /// Defaults to column 0.
    pub column: Option<usize>,
}

/// Opens files in a running Neovim through its remote-control client.
pub struct Launcher {
    remote_command: String,
    server_socket: PathBuf,
    extensions: Vec<String>,
    focus_command: Vec<String>,
    runner: Box<dyn CommandRunner>,
}

impl Launcher {
    pub fn new(config: &AppConfig, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            remote_command: config.launcher.remote_command.clone(),
            server_socket: config.server_socket(),
            extensions: config.handled_extensions(),
            focus_command: config.launcher.focus_command.clone(),
            runner,
        }
    }

    pub fn supports_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|handled| handled == ext))
    }

    pub fn open(&self, request: &OpenRequest) -> Result<(), LaunchError> {
        if let Some(file) = request.file.as_deref() {
            if !self.supports_extension(file) {
                return Err(LaunchError::UnsupportedExtension(file.to_path_buf()));
            }
            if !file.is_file() {
                return Err(LaunchError::FileMissing(file.to_path_buf()));
            }
        }

        let args = self.remote_args(request);
        self.runner.run(&self.remote_command, &args)?;

        if let Some((program, args)) = self.focus_command.split_first() {
            if let Err(err) = self.runner.run(program, args) {
                tracing::warn!("focus command failed: {err}");
            }
        }

        Ok(())
    }

    fn remote_args(&self, request: &OpenRequest) -> Vec<String> {
        let line = request.line.unwrap_or(1);
        let column = request.column.unwrap_or(0);

        let mut args = vec![
            "--servername".to_string(),
            self.server_socket.to_string_lossy().into_owned(),
            "-c".to_string(),
            format!("call cursor({line}, {column})"),
        ];
        if let Some(file) = request.file.as_ref() {
            args.push(file.to_string_lossy().into_owned());
        }
        args
    }
}
