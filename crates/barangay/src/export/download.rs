//! Download hosts that receive exported files.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use super::CSV_CONTENT_TYPE;
use crate::error::{Error, Result};

/// A file offered to the host for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name.
    pub filename: String,
    /// MIME content type.
    pub content_type: &'static str,
    /// File contents.
    pub content: String,
}

/// An environment able to receive downloaded files.
///
/// Hosts advertise support up front; callers check
/// [`supports_download`](DownloadHost::supports_download) instead of
/// treating a missing capability as an error.
pub trait DownloadHost {
    /// Whether this host can receive files at all.
    fn supports_download(&self) -> bool;

    /// Receive a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the host supports downloads but storing the file
    /// fails.
    fn save(&mut self, download: Download) -> Result<()>;
}

/// Offer `csv` to `host` as a CSV file named `filename`.
///
/// Returns `Ok(false)` without touching the host when it does not support
/// downloads, `Ok(true)` once the file was handed over.
///
/// # Errors
///
/// Returns an error if a supporting host fails to store the file.
pub fn download<H: DownloadHost + ?Sized>(
    csv: &str,
    filename: &str,
    host: &mut H,
) -> Result<bool> {
    if !host.supports_download() {
        debug!(filename, "Host does not support downloads, skipping");
        return Ok(false);
    }

    host.save(Download {
        filename: filename.to_string(),
        content_type: CSV_CONTENT_TYPE,
        content: csv.to_string(),
    })?;
    Ok(true)
}

/// Writes downloads into a directory on disk.
///
/// The directory is created on first save. A host without a directory does
/// not support downloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryHost {
    dir: Option<PathBuf>,
}

impl DirectoryHost {
    /// Create a host writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Create a host that has nowhere to write.
    #[must_use]
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    /// The target directory, if any.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

impl DownloadHost for DirectoryHost {
    fn supports_download(&self) -> bool {
        self.dir.is_some()
    }

    fn save(&mut self, download: Download) -> Result<()> {
        let Some(dir) = &self.dir else {
            return Ok(());
        };
        if !is_bare_file_name(&download.filename) {
            return Err(Error::InvalidFileName {
                name: download.filename,
            });
        }

        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
                path: dir.clone(),
                source,
            })?;
        }

        let path = dir.join(&download.filename);
        std::fs::write(&path, download.content.as_bytes())?;
        info!(
            path = %path.display(),
            bytes = download.content.len(),
            "Saved report"
        );
        Ok(())
    }
}

/// Check that `name` is a single plain path component, so joining it onto
/// a directory cannot leave that directory.
fn is_bare_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// A host without download support; every download is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDownloadHost;

impl DownloadHost for NoDownloadHost {
    fn supports_download(&self) -> bool {
        false
    }

    fn save(&mut self, _download: Download) -> Result<()> {
        Ok(())
    }
}

/// Keeps downloads in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    /// Files received so far, oldest first.
    pub downloads: Vec<Download>,
}

impl MemoryHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DownloadHost for MemoryHost {
    fn supports_download(&self) -> bool {
        true
    }

    fn save(&mut self, download: Download) -> Result<()> {
        self.downloads.push(download);
        Ok(())
    }
}
