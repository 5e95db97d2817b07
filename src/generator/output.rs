use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Writes rendered text to destinations resolved from logical names.
///
/// The sink is the only place file-existence policy is decided: a
/// destination that already holds content is never overwritten, so
/// generation stays non-destructive across repeated runs. Renderers and the
/// substitution engine never look at the filesystem.
#[derive(Debug, Clone)]
pub struct OutputSink {
    root: PathBuf,
}

impl OutputSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Concrete destination path for a logical name.
    pub fn resolve(&self, logical_name: &str) -> PathBuf {
        self.root.join(logical_name)
    }

    /// Write `content` to the destination for `logical_name` unless it
    /// already holds content.
    ///
    /// Returns `Ok(true)` when the file was written and `Ok(false)` when the
    /// write was skipped because the destination is already populated — a
    /// zero-effect success, not an error. An existing but empty file is
    /// still written.
    ///
    /// # Errors
    ///
    /// Returns an error if the containing directory cannot be created or the
    /// file cannot be written. Failures are terminal for the invocation; no
    /// retries.
    pub fn write_if_absent(&self, logical_name: &str, content: &str) -> anyhow::Result<bool> {
        let path = self.resolve(logical_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory {parent:?}"))?;
        }

        let occupied = fs::metadata(&path).map(|m| m.len() > 0).unwrap_or(false);
        if occupied {
            debug!(?path, "destination already populated");
            println!("⚠️  Skipping existing file: {path:?}");
            return Ok(false);
        }

        fs::write(&path, content).with_context(|| format!("failed to write {path:?}"))?;
        println!("✅ Generated {logical_name} → {path:?}");
        Ok(true)
    }
}
