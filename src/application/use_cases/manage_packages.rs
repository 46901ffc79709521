use crate::application::dto::PackageListing;
use crate::ports::outbound::{DocumentStore, ProgressReporter};
use crate::sbom_document::domain::SbomDocument;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// ManagePackagesUseCase - lists, adds and removes the packages the project depends on
///
/// Operates on the children of the document's root package.
///
/// # Type Parameters
/// * `S` - DocumentStore implementation
/// * `PR` - ProgressReporter implementation
pub struct ManagePackagesUseCase<S, PR> {
    store: S,
    progress_reporter: PR,
}

impl<S, PR> ManagePackagesUseCase<S, PR>
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

    /// Lists every package, or only `name` when given
    ///
    /// # Errors
    /// Returns `SbomError::PackageNotFound` if `name` is given but absent
    pub fn list(&self, name: Option<&str>) -> Result<PackageListing> {
        let document = self.load()?;
        let root = document.root();

        match name {
            None => Ok(PackageListing::all(root.children())),
            Some(name) => {
                let package = root.get_child(name).ok_or_else(|| not_found(name))?;
                Ok(PackageListing::single(name, package))
            }
        }
    }

    /// Adds package `name`, or updates its fields when it already exists
    ///
    /// # Errors
    /// Returns `SbomError::PackageAlreadyExists` if `name` exists and no
    /// fields were given
    pub fn add(&self, name: &str, fields: &[String]) -> Result<PackageListing> {
        let mut document = self.load()?;
        let existed = document.root().get_child(name).is_some();

        let listing = {
            let package = document.root_mut().upsert_child(name, fields)?;
            PackageListing::single(name, package)
        };
        self.save(&document)?;

        let message = if existed {
            format!("✏️  Updated package '{}'", name)
        } else {
            format!("➕ Added package '{}'", name)
        };
        self.progress_reporter.report(&message);

        Ok(listing)
    }

    /// Removes package `name` with everything nested under it, or, when
    /// `flags` are given, only clears those fields on it
    ///
    /// # Returns
    /// `None` if the package was removed, otherwise the updated package
    pub fn remove(&self, name: &str, flags: &[String]) -> Result<Option<PackageListing>> {
        let mut document = self.load()?;

        let listing = document
            .root_mut()
            .remove_child(name, flags)?
            .map(|package| PackageListing::single(name, package));
        self.save(&document)?;

        if listing.is_none() {
            self.progress_reporter
                .report_completion(&format!("🗑️  Removed package '{}'", name));
        }

        Ok(listing)
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

fn not_found(name: &str) -> anyhow::Error {
    SbomError::PackageNotFound {
        name: name.to_string(),
    }
    .into()
}
