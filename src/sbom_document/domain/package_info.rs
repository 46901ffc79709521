use super::field::Field;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// Descriptive metadata of one package.
///
/// Every attribute is a plain string where the empty string means "unset".
/// Unset attributes are left out when serialized, and missing or `null`
/// properties decode as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    description: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    comment: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    version: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    package_type: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    author: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    company: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    copyright: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    source: String,
    #[serde(
        rename = "uri",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    url: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    repository: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    branch: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    commit: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    license: String,
    #[serde(
        rename = "license-url",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    license_url: String,
}

impl PackageInfo {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, field: Field) -> &String {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Comment => &self.comment,
            Field::Version => &self.version,
            Field::Type => &self.package_type,
            Field::Author => &self.author,
            Field::Company => &self.company,
            Field::Copyright => &self.copyright,
            Field::Source => &self.source,
            Field::Url => &self.url,
            Field::Repository => &self.repository,
            Field::Branch => &self.branch,
            Field::Commit => &self.commit,
            Field::License => &self.license,
            Field::LicenseUrl => &self.license_url,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Comment => &mut self.comment,
            Field::Version => &mut self.version,
            Field::Type => &mut self.package_type,
            Field::Author => &mut self.author,
            Field::Company => &mut self.company,
            Field::Copyright => &mut self.copyright,
            Field::Source => &mut self.source,
            Field::Url => &mut self.url,
            Field::Repository => &mut self.repository,
            Field::Branch => &mut self.branch,
            Field::Commit => &mut self.commit,
            Field::License => &mut self.license,
            Field::LicenseUrl => &mut self.license_url,
        }
    }

    /// Current value of `field`; empty when unset
    pub fn get(&self, field: Field) -> &str {
        self.slot(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.slot_mut(field).clear();
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Sets the field named by `flag` (e.g. `--version`).
    ///
    /// # Errors
    /// Returns `SbomError::UnknownField` if `flag` is not one of the field flags
    pub fn set_field(&mut self, flag: &str, value: impl Into<String>) -> Result<()> {
        let field = lookup(flag)?;
        self.set(field, value);
        Ok(())
    }

    /// Resets the field named by `flag` to unset.
    ///
    /// # Errors
    /// Returns `SbomError::UnknownField` if `flag` is not one of the field flags
    pub fn clear_field(&mut self, flag: &str) -> Result<()> {
        let field = lookup(flag)?;
        self.clear(field);
        Ok(())
    }

    /// Applies alternating flag/value tokens, in order.
    ///
    /// The length is checked before anything is applied, so an odd-length
    /// sequence leaves the record untouched. An unknown flag stops the batch;
    /// pairs applied before it stay applied.
    ///
    /// # Errors
    /// - `SbomError::MalformedArguments` if `pairs` has odd length
    /// - `SbomError::UnknownField` for the first unrecognized flag
    pub fn populate_from_pairs<S: AsRef<str>>(&mut self, pairs: &[S]) -> Result<()> {
        if pairs.len() % 2 != 0 {
            return Err(SbomError::MalformedArguments { count: pairs.len() }.into());
        }

        for pair in pairs.chunks_exact(2) {
            self.set_field(pair[0].as_ref(), pair[1].as_ref())?;
        }

        Ok(())
    }

    /// Clears each field named in `flags`, in order. Stops at the first
    /// unknown flag without restoring fields already cleared.
    ///
    /// # Errors
    /// Returns `SbomError::UnknownField` for the first unrecognized flag
    pub fn clear_from_keys<S: AsRef<str>>(&mut self, flags: &[S]) -> Result<()> {
        for flag in flags {
            self.clear_field(flag.as_ref())?;
        }

        Ok(())
    }
}

fn lookup(flag: &str) -> Result<Field> {
    Field::from_flag(flag).ok_or_else(|| {
        SbomError::UnknownField {
            flag: flag.to_string(),
        }
        .into()
    })
}

/// Deserializes `null` the same way as a missing property.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
