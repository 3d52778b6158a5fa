use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Read by the `qgh` shell wrapper, which `cd`s into the path it holds.
pub const HANDOFF_PATH: &str = "/tmp/qgh_cd";

/// Write `directory` verbatim (no trailing newline) to `target`.
pub fn write_handoff(target: &Path, directory: &Path) -> Result<()> {
    std::fs::write(target, directory.as_os_str().as_encoded_bytes())
        .with_context(|| format!("Error writing cd path to {}", target.display()))?;
    info!(dir = %directory.display(), "Wrote cd hand-off");
    Ok(())
}
