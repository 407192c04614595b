/// Label used when no better name can be derived for an installation.
pub const DEFAULT_NAME: &str = "Neovim";

/// A Neovim binary known to the registry, either discovered on disk or
/// synthesized for a path the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    /// Display string shown to the user.
    pub name: String,
    /// Absolute path; the identity key for matching.
    pub path: String,
}

impl Installation {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Fallback record for a path that is not part of the discovered set.
    pub fn synthesized(path: impl Into<String>) -> Self {
        Self::new(DEFAULT_NAME, path)
    }

    /// One output row: `name<TAB>path`.
    pub fn row(&self) -> String {
        format!("{}\t{}", self.name, self.path)
    }
}
