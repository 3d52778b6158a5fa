pub mod pr_cache;

pub use pr_cache::{PrCache, repo_key};
