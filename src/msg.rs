use crate::launcher::OpenRequest;

/// Requests the host adapter dispatches to the registry and launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    ListInstallations,
    Resolve(String),
    Open(OpenRequest),
}
