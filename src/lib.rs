pub mod app;
pub mod cache;
pub mod github;
pub mod repo;
pub mod search;
pub mod ui;
pub mod util;
