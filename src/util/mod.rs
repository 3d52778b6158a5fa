pub mod browser;
pub mod config;
pub mod handoff;
pub mod paths;
