//! Output generation for retrieval outcomes.
//!
//! # Submodules
//!
//! - [`markdown`]: the human-readable report (the default)
//! - [`json`]: a tagged JSON document for scripts
//!
//! [`write_output`] sends the rendered text to stdout or to a file.

pub mod json;
pub mod markdown;

use std::error::Error;
use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, instrument};

/// Write rendered output to `path`, creating parent directories, or to stdout
/// when no path is given.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the write fails.
#[instrument(level = "info", skip_all, fields(path = ?path))]
pub async fn write_output(rendered: &str, path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let Some(path) = path else {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(rendered.as_bytes()).await?;
        if !rendered.ends_with('\n') {
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
        return Ok(());
    };

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output directory");
            return Err(e.into());
        }
    }

    fs::write(path, rendered).await?;
    info!(bytes = rendered.len(), "Wrote report");
    Ok(())
}
