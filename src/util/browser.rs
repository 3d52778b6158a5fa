use anyhow::{Context, Result};
use tracing::debug;

/// Launch the default browser on `url` without waiting for it.
pub fn open_url(url: &str) -> Result<()> {
    debug!(url = url, "Opening URL in browser");
    open::that_detached(url).with_context(|| format!("Failed to open {url}"))
}
