pub mod error;
pub mod request;
pub mod runner;

pub use error::LaunchError;
pub use request::{Launcher, OpenRequest};
pub use runner::{CommandRunner, SystemRunner};
