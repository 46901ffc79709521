//! sbom - keeps a software bill-of-materials for a package in a single JSON file
//!
//! The document records the package's own metadata plus a tree of the
//! packages it depends on. Every command loads the document, edits it and
//! writes it back in full, so a failed command leaves the file untouched.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_document`): the document, package tree and field table
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): the command router, JSON file store and console output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_cli::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = JsonFileStore::new(DEFAULT_SBOM_FILE);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! InitDocumentUseCase::new(&store, &progress_reporter)
//!     .execute(InitRequest::new("acme-lib", vec!["--version".into(), "1.0.0".into()]))?;
//!
//! let listing = ManagePackagesUseCase::new(&store, &progress_reporter)
//!     .add("left-pad", &["--version".to_string(), "2.0.0".to_string()])?;
//! println!("{}", to_indented_json(&listing)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_document;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::CommandRouter;
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::{JsonFileStore, DEFAULT_SBOM_FILE};
    pub use crate::application::dto::{InfoView, InitRequest, PackageListing};
    pub use crate::application::use_cases::{
        InitDocumentUseCase, ManageInfoUseCase, ManagePackagesUseCase,
    };
    pub use crate::ports::outbound::{DocumentStore, OutputPresenter, ProgressReporter};
    pub use crate::sbom_document::domain::{
        Field, PackageId, PackageInfo, PackageMap, PackageNode, SbomDocument,
    };
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::json::to_indented_json;
    pub use crate::shared::Result;
}
