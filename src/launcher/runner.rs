use std::process::{Command, Stdio};

use crate::launcher::LaunchError;

/// Runs an external program to completion and returns its stdout.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, LaunchError>;
}

#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, LaunchError> {
        tracing::info!("running {program} {}", args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| LaunchError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(LaunchError::CommandFailed {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
