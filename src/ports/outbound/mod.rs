/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod document_store;
pub mod output_presenter;
pub mod progress_reporter;

pub use document_store::DocumentStore;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
