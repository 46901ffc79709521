use crate::application::dto::InitRequest;
use crate::ports::outbound::{DocumentStore, ProgressReporter};
use crate::sbom_document::domain::{PackageId, SbomDocument};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// InitDocumentUseCase - creates the document for a package
///
/// # Type Parameters
/// * `S` - DocumentStore implementation
/// * `PR` - ProgressReporter implementation
pub struct InitDocumentUseCase<S, PR> {
    store: S,
    progress_reporter: PR,
}

impl<S, PR> InitDocumentUseCase<S, PR>
where
    S: DocumentStore,
    PR: ProgressReporter,
{
    pub fn new(store: S, progress_reporter: PR) -> Self {
        Self {
            store,
            progress_reporter,
        }
    }

    /// Validates the identifier, refuses to overwrite an existing document,
    /// then populates and writes the new one.
    ///
    /// # Returns
    /// The document as written
    pub fn execute(&self, request: InitRequest) -> Result<SbomDocument> {
        PackageId::new(request.package_id.as_str())?;

        if self.store.exists() {
            return Err(SbomError::AlreadyInitialized {
                path: self.store.location().to_path_buf(),
            }
            .into());
        }

        let document = SbomDocument::create(&request.package_id, &request.fields)?;

        self.progress_reporter.report(&format!(
            "📝 Creating sbom file at: {}",
            self.store.location().display()
        ));
        self.store.create(&document)?;

        Ok(document)
    }
}
