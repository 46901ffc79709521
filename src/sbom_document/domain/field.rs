use std::fmt;

/// One of the fifteen descriptive metadata attributes of a package.
///
/// Each field has a command-line flag spelling and a JSON property name.
/// Every lookup by flag (setting, clearing) goes through [`Field::from_flag`],
/// so adding a field means adding one variant and one descriptor row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Comment,
    Version,
    Type,
    Author,
    Company,
    Copyright,
    Source,
    Url,
    Repository,
    Branch,
    Commit,
    License,
    LicenseUrl,
}

impl Field {
    /// All fields, in document order
    pub const ALL: [Field; 15] = [
        Field::Name,
        Field::Description,
        Field::Comment,
        Field::Version,
        Field::Type,
        Field::Author,
        Field::Company,
        Field::Copyright,
        Field::Source,
        Field::Url,
        Field::Repository,
        Field::Branch,
        Field::Commit,
        Field::License,
        Field::LicenseUrl,
    ];

    /// (flag, JSON property)
    fn descriptor(self) -> (&'static str, &'static str) {
        match self {
            Field::Name => ("--name", "name"),
            Field::Description => ("--description", "description"),
            Field::Comment => ("--comment", "comment"),
            Field::Version => ("--version", "version"),
            Field::Type => ("--type", "type"),
            Field::Author => ("--author", "author"),
            Field::Company => ("--company", "company"),
            Field::Copyright => ("--copyright", "copyright"),
            Field::Source => ("--source", "source"),
            // Documents in the wild store the URL under "uri".
            Field::Url => ("--url", "uri"),
            Field::Repository => ("--repository", "repository"),
            Field::Branch => ("--branch", "branch"),
            Field::Commit => ("--commit", "commit"),
            Field::License => ("--license", "license"),
            Field::LicenseUrl => ("--license-url", "license-url"),
        }
    }

    /// Command-line spelling, e.g. `--license-url`
    pub fn flag(self) -> &'static str {
        self.descriptor().0
    }

    /// Property name used in `sbom.json`
    pub fn property(self) -> &'static str {
        self.descriptor().1
    }

    /// Looks up a field by its exact flag spelling.
    pub fn from_flag(flag: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.flag() == flag)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_flag_known() {
        assert_eq!(Field::from_flag("--name"), Some(Field::Name));
        assert_eq!(Field::from_flag("--license-url"), Some(Field::LicenseUrl));
        assert_eq!(Field::from_flag("--url"), Some(Field::Url));
    }

    #[test]
    fn test_from_flag_requires_exact_spelling() {
        assert_eq!(Field::from_flag("name"), None);
        assert_eq!(Field::from_flag("--Name"), None);
        assert_eq!(Field::from_flag("-name"), None);
        assert_eq!(Field::from_flag("--licence"), None);
    }

    #[test]
    fn test_every_field_round_trips_through_its_flag() {
        for field in Field::ALL {
            assert_eq!(Field::from_flag(field.flag()), Some(field));
        }
    }

    #[test]
    fn test_flags_and_properties_are_unique() {
        let flags: HashSet<_> = Field::ALL.iter().map(|f| f.flag()).collect();
        let properties: HashSet<_> = Field::ALL.iter().map(|f| f.property()).collect();
        assert_eq!(flags.len(), Field::ALL.len());
        assert_eq!(properties.len(), Field::ALL.len());
    }

    #[test]
    fn test_url_is_stored_as_uri() {
        assert_eq!(Field::Url.flag(), "--url");
        assert_eq!(Field::Url.property(), "uri");
    }

    #[test]
    fn test_display_uses_flag() {
        assert_eq!(Field::Copyright.to_string(), "--copyright");
    }
}
