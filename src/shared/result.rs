/// Result alias used across the crate.
///
/// Domain and adapter failures are `SbomError` values carried inside
/// `anyhow::Error`, so context can be attached while the kind stays
/// recoverable through `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
