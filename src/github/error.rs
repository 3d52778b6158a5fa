use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhError {
    #[error("GitHub CLI not authenticated")]
    NotAuthenticated,

    #[error("invalid GitHub URL format: {0}")]
    InvalidRepoUrl(String),

    #[error("`{program} {args}` failed: {stderr}")]
    Command {
        program: String,
        args: String,
        stderr: String,
    },

    #[error("failed to parse gh output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to run gh: {0}")]
    Io(#[from] std::io::Error),
}
