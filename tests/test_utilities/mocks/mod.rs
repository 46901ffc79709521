/// Mock implementations for testing
mod mock_document_store;
mod mock_output_presenter;
mod mock_progress_reporter;

pub use mock_document_store::MockDocumentStore;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
