pub mod config;
pub mod installation;
