//! Download artifacts and the sinks that receive them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ExportError;

/// Content type of CSV downloads.
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8;";

/// Content type of TXT downloads.
pub const TXT_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// A file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Receives finished downloads.
pub trait DownloadSink {
    fn deliver(&mut self, download: Download) -> Result<(), ExportError>;
}

impl<T: DownloadSink + ?Sized> DownloadSink for &mut T {
    fn deliver(&mut self, download: Download) -> Result<(), ExportError> {
        (**self).deliver(download)
    }
}

// == Memory Downloads ==
/// Keeps downloads in memory, in delivery order.
#[derive(Debug, Default)]
pub struct MemoryDownloads {
    downloads: Vec<Download>,
}

impl MemoryDownloads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downloads(&self) -> &[Download] {
        &self.downloads
    }

    pub fn into_downloads(self) -> Vec<Download> {
        self.downloads
    }

    pub fn len(&self) -> usize {
        self.downloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.downloads.is_empty()
    }
}

impl DownloadSink for MemoryDownloads {
    fn deliver(&mut self, download: Download) -> Result<(), ExportError> {
        debug!(file_name = %download.file_name, bytes = download.bytes.len(), "download captured");
        self.downloads.push(download);
        Ok(())
    }
}

// == Directory Downloads ==
/// Writes each download as a file inside a directory, replacing any file of
/// the same name.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    /// Creates the sink, creating `dir` if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ExportError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ExportError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectoryDownloads {
    fn deliver(&mut self, download: Download) -> Result<(), ExportError> {
        // Keep only the final path component so a name can't escape the directory
        let name = Path::new(&download.file_name)
            .file_name()
            .ok_or_else(|| ExportError::InvalidFileName(download.file_name.clone()))?;
        let path = self.dir.join(name);

        fs::write(&path, &download.bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = download.bytes.len(), "download written");
        Ok(())
    }
}
