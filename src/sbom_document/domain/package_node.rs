use super::package_info::{null_as_default, PackageInfo};
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Child packages keyed by name, kept sorted so documents serialize stably
pub type PackageMap = BTreeMap<String, PackageNode>;

/// One package in the tree: its own metadata plus the packages nested under it.
///
/// Children are owned by value, so removing a node drops its whole subtree.
/// A missing or `null` `packages` property decodes as an empty map at every
/// depth, and an empty map is omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageNode {
    #[serde(flatten)]
    info: PackageInfo,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    packages: PackageMap,
}

impl PackageNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> &PackageInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut PackageInfo {
        &mut self.info
    }

    pub fn children(&self) -> &PackageMap {
        &self.packages
    }

    pub fn get_child(&self, name: &str) -> Option<&PackageNode> {
        self.packages.get(name)
    }

    pub fn get_child_mut(&mut self, name: &str) -> Option<&mut PackageNode> {
        self.packages.get_mut(name)
    }

    /// Adds the child `name`, or updates it when it already exists.
    ///
    /// A new child is populated from `pairs` before it is inserted, so a
    /// failed population never leaves a half-built child behind.
    ///
    /// # Errors
    /// - `SbomError::PackageAlreadyExists` if `name` exists and `pairs` is empty
    /// - any error from [`PackageInfo::populate_from_pairs`]
    pub fn upsert_child<S: AsRef<str>>(&mut self, name: &str, pairs: &[S]) -> Result<&PackageNode> {
        match self.packages.entry(name.to_string()) {
            Entry::Occupied(entry) => {
                if pairs.is_empty() {
                    return Err(SbomError::PackageAlreadyExists {
                        name: name.to_string(),
                    }
                    .into());
                }
                let child = entry.into_mut();
                child.info.populate_from_pairs(pairs)?;
                Ok(&*child)
            }
            Entry::Vacant(entry) => {
                let mut child = PackageNode::new();
                child.info.populate_from_pairs(pairs)?;
                Ok(&*entry.insert(child))
            }
        }
    }

    /// Removes the child `name` with its subtree, or, when `flags` is not
    /// empty, only clears those fields on it.
    ///
    /// Returns `None` when the child was removed, otherwise the updated child.
    ///
    /// # Errors
    /// - `SbomError::PackageNotFound` if there is no child `name`
    /// - any error from [`PackageInfo::clear_from_keys`]
    pub fn remove_child<S: AsRef<str>>(
        &mut self,
        name: &str,
        flags: &[S],
    ) -> Result<Option<&PackageNode>> {
        if flags.is_empty() {
            return match self.packages.remove(name) {
                Some(_) => Ok(None),
                None => Err(not_found(name)),
            };
        }

        let child = self.packages.get_mut(name).ok_or_else(|| not_found(name))?;
        child.info.clear_from_keys(flags)?;
        Ok(Some(&*child))
    }
}

fn not_found(name: &str) -> anyhow::Error {
    SbomError::PackageNotFound {
        name: name.to_string(),
    }
    .into()
}
