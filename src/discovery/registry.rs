use std::sync::OnceLock;

use crate::discovery::scanner;
use crate::model::installation::{DEFAULT_NAME, Installation};

/// Known Neovim installations, scanned lazily on first query and kept for
/// the life of the registry.
#[derive(Debug)]
pub struct InstallationRegistry {
    candidates: Vec<String>,
    supported_binaries: Vec<String>,
    cache: OnceLock<Vec<Installation>>,
}

impl InstallationRegistry {
    pub fn new(candidates: Vec<String>, supported_binaries: &[String]) -> Self {
        Self {
            candidates,
            supported_binaries: supported_binaries
                .iter()
                .map(|name| normalize_file_name(name))
                .filter(|name| !name.is_empty())
                .collect(),
            cache: OnceLock::new(),
        }
    }

    /// All discovered installations. Empty when nothing was found.
    pub fn list(&self) -> Vec<Installation> {
        self.installations().to_vec()
    }

    /// Resolves a user-chosen editor path to an installation.
    ///
    /// Returns `None` when the file name is not a supported editor binary.
    /// Otherwise returns the discovered record with exactly this path, or a
    /// synthesized one named [`DEFAULT_NAME`]. The first call populates the
    /// cache even when the path is rejected.
    pub fn resolve(&self, path: &str) -> Option<Installation> {
        let installations = self.installations();

        if !self.is_supported(path) {
            tracing::debug!("unsupported editor binary: {path}");
            return None;
        }

        let known = installations
            .iter()
            .find(|installation| installation.path == path)
            .cloned();

        Some(known.unwrap_or_else(|| {
            tracing::debug!("no discovered installation at {path}, synthesizing");
            Installation::synthesized(path)
        }))
    }

    fn is_supported(&self, path: &str) -> bool {
        let file_name = normalize_file_name(path);
        self.supported_binaries.contains(&file_name)
    }

    fn installations(&self) -> &[Installation] {
        self.cache.get_or_init(|| {
            let existing = scanner::scan(&self.candidates);
            tracing::info!(
                "discovered {} of {} candidate installations",
                existing.len(),
                self.candidates.len()
            );
            label(existing)
        })
    }
}

/// Names each path after the part that follows the longest common prefix.
/// A single installation gets the plain default name.
fn label(paths: Vec<String>) -> Vec<Installation> {
    if paths.len() == 1 {
        return paths.into_iter().map(Installation::synthesized).collect();
    }

    let prefix_len = longest_common_prefix(&paths).len();
    paths
        .into_iter()
        .map(|path| {
            let name = format!("{DEFAULT_NAME} ({})", &path[prefix_len..]);
            Installation::new(name, path)
        })
        .collect()
}

fn longest_common_prefix(paths: &[String]) -> &str {
    let Some((first, rest)) = paths.split_first() else {
        return "";
    };

    let mut len = first.len();
    for path in rest {
        len = first[..len]
            .char_indices()
            .zip(path.chars())
            .find(|((_, a), b)| a != b)
            .map(|((idx, _), _)| idx)
            .unwrap_or_else(|| len.min(path.len()));
    }

    &first[..len]
}

/// Last path component, lower-cased, whitespace and a trailing `.exe` removed.
fn normalize_file_name(path: &str) -> String {
    let name: String = path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    match name.strip_suffix(".exe") {
        Some(stem) => stem.to_string(),
        None => name,
    }
}
