pub mod filter;
pub mod mnemonic;
pub mod tokens;

pub use filter::{SearchMode, filter_repos};
