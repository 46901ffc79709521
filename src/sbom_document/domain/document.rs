use super::package_id::PackageId;
use super::package_info::null_as_default;
use super::package_node::PackageNode;
use crate::shared::json::to_indented_json;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Aggregate root: the identifier of the described package plus its own
/// metadata and package tree.
///
/// On disk the identifier is stored under `package`, followed by the root
/// fields and the root `packages` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbomDocument {
    #[serde(
        rename = "package",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "PackageId::is_empty"
    )]
    package_id: PackageId,
    #[serde(flatten)]
    root: PackageNode,
}

impl SbomDocument {
    /// Builds a new document for `package_id`, populating the root fields from
    /// alternating flag/value tokens.
    ///
    /// # Errors
    /// - `SbomError::InvalidPackageId` if `package_id` is not `[a-z0-9.-]+`
    /// - any error from `PackageInfo::populate_from_pairs`
    pub fn create<S: AsRef<str>>(package_id: &str, pairs: &[S]) -> Result<Self> {
        let package_id = PackageId::new(package_id)?;

        let mut root = PackageNode::new();
        root.info_mut().populate_from_pairs(pairs)?;

        Ok(Self { package_id, root })
    }

    /// Decodes a document from its JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Decodes a document from raw file content; invalid UTF-8 is a decode
    /// error like any other malformed JSON.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Renders the whole tree, four-space indented.
    pub fn to_json(&self) -> Result<String> {
        to_indented_json(self)
    }

    pub fn package_id(&self) -> &PackageId {
        &self.package_id
    }

    pub fn root(&self) -> &PackageNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut PackageNode {
        &mut self.root
    }
}
