/// Use cases module containing application business logic orchestration
///
/// Every use case follows the same cycle: load the document through the
/// store, mutate it in memory, and save only once the whole mutation has
/// succeeded. A failed command therefore never changes the stored document.
mod init_document;
mod manage_info;
mod manage_packages;
#[cfg(test)]
mod test_doubles;

pub use init_document::InitDocumentUseCase;
pub use manage_info::ManageInfoUseCase;
pub use manage_packages::ManagePackagesUseCase;
