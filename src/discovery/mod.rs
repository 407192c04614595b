pub mod candidates;
pub mod registry;
pub mod scanner;

pub use registry::InstallationRegistry;
