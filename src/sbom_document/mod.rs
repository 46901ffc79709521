/// Domain layer - the SBOM document model
///
/// Pure data and mutation rules: no file system access and no printing.
/// Persistence goes through the `DocumentStore` port.
pub mod domain;
