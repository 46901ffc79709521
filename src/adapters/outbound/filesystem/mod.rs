/// Filesystem adapters for document persistence
mod json_file_store;

pub use json_file_store::{JsonFileStore, DEFAULT_SBOM_FILE};
