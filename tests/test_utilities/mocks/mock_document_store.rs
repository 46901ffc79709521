use sbom_cli::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DocumentStore holding the serialized document in memory
#[derive(Clone)]
pub struct MockDocumentStore {
    path: PathBuf,
    content: Arc<Mutex<Option<String>>>,
    fail_on_save: bool,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("mock/sbom.json"),
            content: Arc::new(Mutex::new(None)),
            fail_on_save: false,
        }
    }

    pub fn with_content(content: &str) -> Self {
        let store = Self::new();
        *store.content.lock().unwrap() = Some(content.to_string());
        store
    }

    #[allow(dead_code)]
    pub fn failing_on_save(mut self) -> Self {
        self.fail_on_save = true;
        self
    }

    pub fn content(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }
}

impl DocumentStore for MockDocumentStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.content.lock().unwrap().is_some()
    }

    fn create(&self, document: &SbomDocument) -> Result<()> {
        let mut content = self.content.lock().unwrap();
        if content.is_some() {
            return Err(SbomError::AlreadyInitialized {
                path: self.path.clone(),
            }
            .into());
        }
        *content = Some(document.to_json()?);
        Ok(())
    }

    fn load(&self) -> Result<SbomDocument> {
        let content = self.content.lock().unwrap();
        let json = content.as_deref().ok_or_else(|| SbomError::NotInitialized {
            path: self.path.clone(),
        })?;
        let document = SbomDocument::from_json(json).map_err(|e| SbomError::Decode {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(document)
    }

    fn save(&self, document: &SbomDocument) -> Result<()> {
        if self.fail_on_save {
            return Err(SbomError::FileWriteError {
                path: self.path.clone(),
                details: "disk full".to_string(),
            }
            .into());
        }
        *self.content.lock().unwrap() = Some(document.to_json()?);
        Ok(())
    }
}
