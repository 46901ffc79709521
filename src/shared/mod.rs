/// Shared kernel - error taxonomy, result alias, and cross-cutting helpers
pub mod error;
pub mod json;
pub mod result;
pub mod security;

pub use result::Result;
