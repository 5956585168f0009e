// Re-export semver for users of this library
pub use semver::Version as SemverVersion;

mod error;
mod store;

pub use error::{Result, ResultExt, VersionError};
pub use store::{Bump, DEFAULT_VERSION_FILE, VersionStore};

/// Which component of `MAJOR.MINOR.PATCH` to raise
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VersionType {
    Minor,
    #[default]
    Patch,
}

impl VersionType {
    /// Map the `--increment-minor` switch onto an increment
    pub fn from_minor_flag(increment_minor: bool) -> Self {
        if increment_minor {
            VersionType::Minor
        } else {
            VersionType::Patch
        }
    }
}

// Central structure for version management
pub struct Version;

impl Version {
    /// Parse a plain `MAJOR.MINOR.PATCH` line.
    ///
    /// Exactly three dot-separated tokens of ASCII digits are accepted,
    /// ignoring whitespace around each token.
    /// Pre-release and build metadata are not.
    pub fn parse(line: &str) -> Result<SemverVersion> {
        let tokens: Vec<&str> = line.split('.').collect();
        if tokens.len() != 3 {
            return Err(VersionError::FormatError(format!(
                "found {} component(s) in '{}'",
                tokens.len(),
                line
            )));
        }

        let major = parse_component(tokens[0], "major", line)?;
        let minor = parse_component(tokens[1], "minor", line)?;
        let patch = parse_component(tokens[2], "patch", line)?;

        Ok(SemverVersion::new(major, minor, patch))
    }

    /// Increment a version based on the version type
    pub fn increment(version: &SemverVersion, version_type: VersionType) -> Result<SemverVersion> {
        let overflow =
            || VersionError::FormatError(format!("cannot increment {version} without overflow"));

        let new_version = match version_type {
            VersionType::Minor => SemverVersion::new(
                version.major,
                version.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            VersionType::Patch => SemverVersion::new(
                version.major,
                version.minor,
                version.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(new_version)
    }
}

fn parse_component(token: &str, name: &str, line: &str) -> Result<u64> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::FormatError(format!(
            "{name} component '{token}' in '{line}' is not a non-negative integer"
        )));
    }

    token.parse::<u64>().map_err(|e| {
        VersionError::FormatError(format!("{name} component '{token}' in '{line}': {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bumped(input: &str, version_type: VersionType) -> String {
        let version = Version::parse(input).unwrap();
        Version::increment(&version, version_type).unwrap().to_string()
    }

    #[test]
    fn test_patch_increment() {
        assert_eq!(bumped("0.1.0", VersionType::Patch), "0.1.1");
        assert_eq!(bumped("3.14.15", VersionType::Patch), "3.14.16");
    }

    #[test]
    fn test_patch_increment_is_decimal() {
        assert_eq!(bumped("1.2.9", VersionType::Patch), "1.2.10");
        assert_eq!(bumped("1.2.99", VersionType::Patch), "1.2.100");
    }

    #[test]
    fn test_minor_increment_resets_patch() {
        assert_eq!(bumped("0.1.5", VersionType::Minor), "0.2.0");
        assert_eq!(bumped("1.9.9", VersionType::Minor), "1.10.0");
        assert_eq!(bumped("2.0.0", VersionType::Minor), "2.1.0");
    }

    #[test]
    fn test_increment_twice_differs_from_once() {
        let version = Version::parse("1.2.3").unwrap();
        let once = Version::increment(&version, VersionType::Patch).unwrap();
        let twice = Version::increment(&once, VersionType::Patch).unwrap();
        assert_ne!(once, twice);
        assert_eq!(twice.to_string(), "1.2.5");
    }

    #[test]
    fn test_leading_zeros_are_not_preserved() {
        assert_eq!(bumped("01.02.03", VersionType::Patch), "1.2.4");
    }

    #[test]
    fn test_parse_rejects_wrong_component_count() {
        for input in ["1.2", "1", "", "1.2.3.4"] {
            let err = Version::parse(input).unwrap_err();
            assert!(matches!(err, VersionError::FormatError(_)), "{input}: {err:?}");
        }
    }

    #[test]
    fn test_parse_rejects_non_integer_components() {
        for input in ["1.2.x", "1..3", "1.-2.3", "+1.2.3", "1.2.3-beta", "1. .3"] {
            let err = Version::parse(input).unwrap_err();
            assert!(matches!(err, VersionError::FormatError(_)), "{input}: {err:?}");
        }
    }

    #[test]
    fn test_parse_ignores_whitespace_around_components() {
        assert_eq!(bumped(" 1.2.3", VersionType::Patch), "1.2.4");
        assert_eq!(bumped("1.2.3 ", VersionType::Patch), "1.2.4");
        assert_eq!(bumped("1.2.3\t", VersionType::Minor), "1.3.0");
        assert_eq!(bumped("1 . 2 . 3", VersionType::Patch), "1.2.4");
    }

    #[test]
    fn test_parse_rejects_component_overflow() {
        let err = Version::parse("1.2.99999999999999999999").unwrap_err();
        assert!(matches!(err, VersionError::FormatError(_)));
    }

    #[test]
    fn test_increment_overflow_is_an_error() {
        let version = SemverVersion::new(0, 0, u64::MAX);
        let err = Version::increment(&version, VersionType::Patch).unwrap_err();
        assert!(matches!(err, VersionError::FormatError(_)));

        let version = SemverVersion::new(0, u64::MAX, 7);
        assert!(Version::increment(&version, VersionType::Minor).is_err());
    }

    #[test]
    fn test_minor_flag_selects_increment() {
        assert_eq!(VersionType::from_minor_flag(true), VersionType::Minor);
        assert_eq!(VersionType::from_minor_flag(false), VersionType::Patch);
        assert_eq!(VersionType::default(), VersionType::Patch);
    }

    #[test]
    fn test_format_error_user_message() {
        let err = Version::parse("1.2").unwrap_err();
        assert!(err.user_message().starts_with("Expected MAJOR.MINOR.PATCH"));
    }
}
