//! Platform install locations probed during discovery.
//!
//! Environment-derived locations (`%ProgramFiles%`, `%LOCALAPPDATA%`) are
//! substituted here so the registry only ever sees absolute paths.

/// Candidate paths for the current operating system, followed by `extra`.
pub fn platform_candidates(extra: &[String]) -> Vec<String> {
    let mut candidates = builtin();
    for path in extra {
        if !candidates.contains(path) {
            candidates.push(path.clone());
        }
    }
    candidates
}

#[cfg(target_os = "macos")]
fn builtin() -> Vec<String> {
    vec!["/opt/homebrew/bin/nvim".to_string()]
}

#[cfg(target_os = "windows")]
fn builtin() -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(program_files) = env_dir("ProgramFiles") {
        candidates.push(format!("{program_files}/Neovim/bin/nvim.exe"));
    }
    if let Some(local_app_data) = env_dir("LOCALAPPDATA") {
        candidates.push(format!("{local_app_data}/Programs/Neovim/bin/nvim.exe"));
    }
    candidates
}

#[cfg(target_os = "windows")]
fn env_dir(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.replace('\\', "/"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn builtin() -> Vec<String> {
    vec!["/usr/bin/nvim".to_string()]
}
