pub mod discovery;
pub mod models;
pub mod remote;

pub use models::{FilteredRepo, GithubLink, RepoId, Repository};
