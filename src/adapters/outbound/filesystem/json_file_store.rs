use crate::ports::outbound::DocumentStore;
use crate::sbom_document::domain::SbomDocument;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default document location, relative to the working directory
pub const DEFAULT_SBOM_FILE: &str = "sbom.json";

/// JsonFileStore adapter persisting the document as an indented JSON file
///
/// Saves write the new content to a temp file in the same directory and
/// rename it over the document, so a concurrent reader sees either the old
/// or the new document, never a truncated one. Concurrent writers are not
/// coordinated: the last save wins.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn not_initialized(&self) -> anyhow::Error {
        SbomError::NotInitialized {
            path: self.path.clone(),
        }
        .into()
    }

    fn write_error(&self, details: impl ToString) -> anyhow::Error {
        SbomError::FileWriteError {
            path: self.path.clone(),
            details: details.to_string(),
        }
        .into()
    }

    /// Reads the document bytes with security checks:
    /// - Reject symbolic links and non-regular files
    /// - Check file size limits
    fn read_document_bytes(&self) -> Result<Vec<u8>> {
        validate_regular_file(&self.path)?;

        let metadata = fs::metadata(&self.path).map_err(|e| SbomError::FileReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), &self.path, MAX_FILE_SIZE)?;

        fs::read(&self.path).map_err(|e| {
            SbomError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Replaces the document content through a temp file + rename
    fn write_atomically(&self, content: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
            self.write_error(format!("Failed to create temp file in {}: {}", dir.display(), e))
        })?;
        temp.write_all(content.as_bytes())
            .map_err(|e| self.write_error(e))?;

        // Temp files are created owner-only; keep the document's own mode.
        if let Ok(metadata) = fs::metadata(&self.path) {
            fs::set_permissions(temp.path(), metadata.permissions())
                .map_err(|e| self.write_error(e))?;
        }

        temp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        // A dangling symlink still occupies the name; treat it as existing.
        fs::symlink_metadata(&self.path).is_ok()
    }

    fn create(&self, document: &SbomDocument) -> Result<()> {
        if self.exists() {
            return Err(SbomError::AlreadyInitialized {
                path: self.path.clone(),
            }
            .into());
        }

        let content = document.to_json()?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|e| -> anyhow::Error {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    SbomError::AlreadyInitialized {
                        path: self.path.clone(),
                    }
                    .into()
                } else {
                    self.write_error(e)
                }
            })?;

        file.write_all(content.as_bytes())
            .map_err(|e| self.write_error(e))?;

        Ok(())
    }

    fn load(&self) -> Result<SbomDocument> {
        if !self.exists() {
            return Err(self.not_initialized());
        }

        let content = self.read_document_bytes()?;

        SbomDocument::from_slice(&content).map_err(|e| {
            SbomError::Decode {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, document: &SbomDocument) -> Result<()> {
        if !self.exists() {
            return Err(self.not_initialized());
        }
        validate_regular_file(&self.path)?;

        let content = document.to_json()?;
        self.write_atomically(&content)
    }
}
