use std::fs;

/// Returns the candidates that exist on disk as regular files, in input order.
///
/// A probe that fails (permissions, transient I/O) counts as "does not exist"
/// for that path only.
pub fn scan<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| exists(path))
        .map(str::to_string)
        .collect()
}

fn exists(path: &str) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file(),
        Err(err) => {
            tracing::debug!("candidate {path} not usable: {err}");
            false
        }
    }
}
