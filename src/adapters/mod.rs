/// Adapters layer - Infrastructure implementations
///
/// Inbound adapters turn CLI input into use case calls; outbound adapters
/// implement the ports over the file system and console.
pub mod inbound;
pub mod outbound;
