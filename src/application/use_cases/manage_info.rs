use crate::application::dto::InfoView;
use crate::ports::outbound::{DocumentStore, ProgressReporter};
use crate::sbom_document::domain::SbomDocument;
use crate::shared::Result;

/// ManageInfoUseCase - reads and edits the metadata of the document's own package
///
/// # Type Parameters
/// * `S` - DocumentStore implementation
/// * `PR` - ProgressReporter implementation
pub struct ManageInfoUseCase<S, PR> {
    store: S,
    progress_reporter: PR,
}

impl<S, PR> ManageInfoUseCase<S, PR>
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

    /// Returns the identifier and root fields
    pub fn list(&self) -> Result<InfoView> {
        let document = self.load()?;
        Ok(InfoView::from(&document))
    }

    /// Sets root fields from alternating flag/value tokens
    pub fn add(&self, fields: &[String]) -> Result<InfoView> {
        let mut document = self.load()?;
        document.root_mut().info_mut().populate_from_pairs(fields)?;
        self.save(&document)?;

        Ok(InfoView::from(&document))
    }

    /// Clears the root fields named by `flags`
    pub fn remove(&self, flags: &[String]) -> Result<InfoView> {
        let mut document = self.load()?;
        document.root_mut().info_mut().clear_from_keys(flags)?;
        self.save(&document)?;

        Ok(InfoView::from(&document))
    }

    fn load(&self) -> Result<SbomDocument> {
        self.progress_reporter.report(&format!(
            "📖 Loading sbom file from: {}",
            self.store.location().display()
        ));
        self.store.load()
    }

    fn save(&self, document: &SbomDocument) -> Result<()> {
        self.store.save(document)?;
        self.progress_reporter.report(&format!(
            "💾 Saved sbom file to: {}",
            self.store.location().display()
        ));
        Ok(())
    }
}
