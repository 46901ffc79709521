use crate::sbom_document::domain::{PackageId, PackageInfo, SbomDocument};
use serde::Serialize;

/// InfoView - the document's own package: identifier plus root fields
///
/// Printed by the `info` commands. Unlike the full document it leaves out
/// the `packages` tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoView {
    #[serde(rename = "package", skip_serializing_if = "PackageId::is_empty")]
    pub package_id: PackageId,
    #[serde(flatten)]
    pub info: PackageInfo,
}

impl From<&SbomDocument> for InfoView {
    fn from(document: &SbomDocument) -> Self {
        Self {
            package_id: document.package_id().clone(),
            info: document.root().info().clone(),
        }
    }
}
