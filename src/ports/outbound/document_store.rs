use crate::sbom_document::domain::SbomDocument;
use crate::shared::Result;
use std::path::Path;

/// DocumentStore port for persisting the SBOM document
///
/// The store is the only source of truth between invocations: every command
/// loads the document, mutates it in memory, and saves it back. Only
/// [`DocumentStore::create`] may bring a document into existence.
pub trait DocumentStore {
    /// Location of the document, used in messages
    fn location(&self) -> &Path;

    /// Returns true if a document has already been created
    fn exists(&self) -> bool;

    /// Writes the first version of a document
    ///
    /// # Errors
    /// Returns an error if:
    /// - A document already exists (`SbomError::AlreadyInitialized`)
    /// - The document cannot be written
    fn create(&self, document: &SbomDocument) -> Result<()>;

    /// Reads and decodes the document
    ///
    /// # Errors
    /// Returns an error if:
    /// - No document exists (`SbomError::NotInitialized`)
    /// - The content is not a valid document (`SbomError::Decode`)
    /// - The document cannot be read
    fn load(&self) -> Result<SbomDocument>;

    /// Replaces the stored document with `document`
    ///
    /// # Errors
    /// Returns an error if:
    /// - No document exists (`SbomError::NotInitialized`); saving never creates one
    /// - The document cannot be written
    fn save(&self, document: &SbomDocument) -> Result<()>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn location(&self) -> &Path {
        (**self).location()
    }

    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn create(&self, document: &SbomDocument) -> Result<()> {
        (**self).create(document)
    }

    fn load(&self) -> Result<SbomDocument> {
        (**self).load()
    }

    fn save(&self, document: &SbomDocument) -> Result<()> {
        (**self).save(document)
    }
}
