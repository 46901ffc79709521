/// Ports module defining interfaces for hexagonal architecture
///
/// The CLI drives the use cases directly, so only outbound (driven) ports
/// are defined: persistence, output and status reporting.
pub mod outbound;
