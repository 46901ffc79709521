/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// the domain model and coordinates with infrastructure through ports.
pub mod dto;
pub mod use_cases;
