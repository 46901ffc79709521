// In-memory doubles for the outbound ports, shared by the use case tests.

use crate::ports::outbound::{DocumentStore, ProgressReporter};
use crate::sbom_document::domain::SbomDocument;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// DocumentStore keeping the document as JSON text, so every load goes
/// through the same decoding as the file store.
pub struct InMemoryDocumentStore {
    path: PathBuf,
    content: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl InMemoryDocumentStore {
    pub fn empty() -> Self {
        Self {
            path: PathBuf::from("memory://sbom.json"),
            content: RefCell::new(None),
            saves: Cell::new(0),
        }
    }

    pub fn with_document(document: SbomDocument) -> Self {
        let store = Self::empty();
        store.create(&document).unwrap();
        store
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.content.borrow().is_some()
    }

    fn create(&self, document: &SbomDocument) -> Result<()> {
        if self.exists() {
            return Err(SbomError::AlreadyInitialized {
                path: self.path.clone(),
            }
            .into());
        }
        *self.content.borrow_mut() = Some(document.to_json()?);
        Ok(())
    }

    fn load(&self) -> Result<SbomDocument> {
        let content = self.content.borrow();
        let json = content.as_deref().ok_or_else(|| SbomError::NotInitialized {
            path: self.path.clone(),
        })?;
        SbomDocument::from_json(json).map_err(|e| {
            SbomError::Decode {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, document: &SbomDocument) -> Result<()> {
        if !self.exists() {
            return Err(SbomError::NotInitialized {
                path: self.path.clone(),
            }
            .into());
        }
        *self.content.borrow_mut() = Some(document.to_json()?);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// ProgressReporter that records every message
#[derive(Default)]
pub struct RecordingReporter {
    messages: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Completed: {}", message));
    }
}
