use crate::sbom_document::domain::{PackageMap, PackageNode};
use serde::Serialize;

/// PackageListing - packages keyed by name, as printed by the `package` commands
///
/// Either the whole child mapping of the root (`package ls`) or a single
/// entry wrapped under its name (`package ls <name>`, `add`, `rm`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageListing(PackageMap);

impl PackageListing {
    pub fn all(packages: &PackageMap) -> Self {
        Self(packages.clone())
    }

    pub fn single(name: &str, package: &PackageNode) -> Self {
        let mut packages = PackageMap::new();
        packages.insert(name.to_string(), package.clone());
        Self(packages)
    }

    pub fn get(&self, name: &str) -> Option<&PackageNode> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
