pub mod cli;
pub mod error;
pub mod models;

pub use cli::GhClient;
pub use error::GhError;
pub use models::PullRequest;
