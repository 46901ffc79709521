/// InitRequest - Request DTO for creating a new document
#[derive(Debug, Clone)]
pub struct InitRequest {
    /// Identifier of the package the document describes
    pub package_id: String,
    /// Alternating field flag/value tokens for the root package
    pub fields: Vec<String>,
}

impl InitRequest {
    pub fn new(package_id: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            package_id: package_id.into(),
            fields,
        }
    }
}
