//! Output destinations for exported documents.
//!
//! An `OutputDestination` is where a finished document is saved: a file on
//! disk for the CLI, or an in-memory buffer for tests and embedders. A
//! destination receives the complete document in one call, so a refused or
//! failed export never leaves a partial file behind.
//!
//! # Example
//!
//! ```rust,ignore
//! use email_roi::io::{FileDestination, MemoryDestination, OutputDestination};
//!
//! let file_dest = FileDestination::new("Email_Marketing_ROI_Analysis.pdf".into());
//! file_dest.write_bytes(&document.bytes)?;
//!
//! let mem_dest = MemoryDestination::new();
//! mem_dest.write_bytes(b"%PDF-1.5")?;
//! assert_eq!(mem_dest.get_content(), b"%PDF-1.5");
//! ```

use crate::errors::RoiError;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Trait for destinations that can receive an exported document.
pub trait OutputDestination: Send + Sync {
    /// Save the complete document.
    fn write_bytes(&self, content: &[u8]) -> Result<(), RoiError>;

    /// Get a description of the destination for messages.
    fn description(&self) -> String;
}

/// File system destination.
///
/// Content is written to a sibling temporary file first and renamed into
/// place, so the target is either the previous file or the full document.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".partial");
        self.path.with_file_name(name)
    }
}

impl OutputDestination for FileDestination {
    fn write_bytes(&self, content: &[u8]) -> Result<(), RoiError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                super::ensure_dir(parent)?;
            }
        }

        let staging = self.staging_path();
        std::fs::write(&staging, content)
            .and_then(|_| std::fs::rename(&staging, &self.path))
            .map_err(|e| {
                let _ = std::fs::remove_file(&staging);
                RoiError::io_with_path(
                    format!("Failed to save {}: {}", self.path.display(), e),
                    &self.path,
                    e,
                )
            })?;

        log::info!("Saved {} bytes to {}", content.len(), self.path.display());
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory destination.
///
/// Captures output in a thread-safe buffer that can be inspected after
/// writing; each write replaces the previous document.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<Vec<u8>>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_content(&self) -> Vec<u8> {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.buffer.read().expect("RwLock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_bytes(&self, content: &[u8]) -> Result<(), RoiError> {
        let mut buffer = self.buffer.write().expect("RwLock poisoned");
        buffer.clear();
        buffer.extend_from_slice(content);
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Standard output destination, for piping text formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl OutputDestination for StdoutDestination {
    fn write_bytes(&self, content: &[u8]) -> Result<(), RoiError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
        Ok(())
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_destination_writes_and_cleans_up_staging() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("roi.pdf");
        let dest = FileDestination::new(path.clone());

        dest.write_bytes(b"%PDF-1.5 test").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.5 test");
        assert!(!dest.staging_path().exists());
        assert!(dest.description().starts_with("file:"));
    }

    #[test]
    fn test_file_destination_reports_failure_with_path() {
        let dir = TempDir::new().unwrap();
        // a directory cannot be replaced by a file
        let target = dir.path().join("taken");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), b"x").unwrap();

        let err = FileDestination::new(target.clone())
            .write_bytes(b"data")
            .unwrap_err();

        assert_eq!(err.path(), Some(target.as_path()));
        assert!(target.join("keep").exists());
    }

    #[test]
    fn test_memory_destination_replaces_content() {
        let dest = MemoryDestination::new();
        assert!(dest.is_empty());
        dest.write_bytes(b"first").unwrap();
        dest.write_bytes(b"second").unwrap();
        assert_eq!(dest.get_content(), b"second");
        assert_eq!(dest.len(), 6);
    }
}
