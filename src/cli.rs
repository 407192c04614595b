//! Command-line schema for the nvim-locator binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::launcher::OpenRequest;

#[derive(Parser, Debug)]
#[command(name = "nvim-locator")]
#[command(about = "Find Neovim installations and open files in a running Neovim")]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the user config.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List discovered Neovim installations
    List,
    /// Resolve an editor path to an installation
    Resolve {
        /// Path of the editor binary
        path: String,
    },
    /// Open a file (or the project when omitted) in the running Neovim
    Open {
        /// File to open. Supports path:line and path:line:col.
        file: Option<String>,
        /// Line to place the cursor on (1-indexed); overrides a :line suffix
        #[arg(short, long)]
        line: Option<usize>,
        /// Column to place the cursor on; overrides a :col suffix
        #[arg(short, long)]
        column: Option<usize>,
    },
}

/// Builds an open request from `path[:line[:col]]` plus explicit overrides.
/// An empty path opens the project.
pub fn open_request(file: Option<&str>, line: Option<usize>, column: Option<usize>) -> OpenRequest {
    let mut request = file
        .filter(|file| !file.trim().is_empty())
        .map(parse_location)
        .unwrap_or_default();
    if line.is_some() {
        request.line = line;
    }
    if column.is_some() {
        request.column = column;
    }
    request
}

/// Skips a leading drive letter (`C:`) before looking for `:line:col`.
fn parse_location(s: &str) -> OpenRequest {
    let search_start = if s.len() > 2 && s.as_bytes().get(1) == Some(&b':') {
        2
    } else {
        0
    };
    let plain = OpenRequest {
        file: Some(PathBuf::from(s)),
        ..Default::default()
    };

    let Some(last_colon) = s[search_start..].rfind(':').map(|i| i + search_start) else {
        return plain;
    };
    let Ok(last) = s[last_colon + 1..].parse::<usize>() else {
        return plain;
    };

    let head = &s[..last_colon];
    if let Some(prev_colon) = head[search_start..].rfind(':').map(|i| i + search_start)
        && let Ok(line) = head[prev_colon + 1..].parse::<usize>()
    {
        return OpenRequest {
            file: Some(PathBuf::from(&head[..prev_colon])),
            line: Some(line),
            column: Some(last),
        };
    }

    OpenRequest {
        file: Some(PathBuf::from(head)),
        line: Some(last),
        column: None,
    }
}
