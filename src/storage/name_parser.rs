//! Entry name parsing
//!
//! Fragments and folders carry their ordering number and title in their
//! names, separated by the configured delimiter (`.` by default):
//!
//! - **Files**: `<number>.<title parts...>.<extension>`
//!   - Example: `3.Getting Started.txt` → number `3`, title `Getting Started`
//! - **Directories**: `<number>.<title parts...>`
//!   - Example: `2.Basics` → number `2`, title `Basics`
//!
//! Title parts are concatenated without the delimiter, so `1.Version 2.0.txt`
//! has the title `Version 20`.

use std::ffi::{OsStr, OsString};

use crate::domain::{Config, EntryName};

/// Whether a name belongs to a file or a directory.
///
/// Only file names end in an extension part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

/// Parse the number and title from the name of a directory entry.
///
/// # Errors
///
/// Returns an error if:
/// - the name is not valid unicode
/// - the first part of the name is not an integer
/// - the config requires an extension and a file name does not end in it
pub fn parse_entry_name(
    name: &OsStr,
    kind: EntryKind,
    config: &Config,
) -> Result<EntryName, ParseError> {
    let name = name
        .to_str()
        .ok_or_else(|| ParseError::NotUnicode(name.to_os_string()))?;

    let parts: Vec<&str> = name.split(config.delimiter()).collect();

    // `split` always yields at least one part
    let first = parts[0];
    let number = first
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber(first.to_string()))?;

    let title_parts = match kind {
        EntryKind::Directory => &parts[1..],
        EntryKind::File => {
            let extension = parts[parts.len() - 1];
            if let Some(expected) = config.extension().filter(|&e| e != extension) {
                return Err(ParseError::UnexpectedExtension {
                    expected: expected.to_string(),
                    found: extension.to_string(),
                });
            }
            parts.get(1..parts.len() - 1).unwrap_or_default()
        }
    };

    Ok(EntryName::new(number, title_parts.concat()))
}

/// Reasons an entry name does not describe a fragment or section.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The name contains invalid unicode.
    #[error("Name is not valid unicode: {0:?}")]
    NotUnicode(OsString),

    /// The name does not start with an integer.
    #[error("Name does not start with a number: '{0}'")]
    InvalidNumber(String),

    /// The file does not have the configured extension.
    #[error("Expected extension '{expected}', found '{found}'")]
    UnexpectedExtension {
        /// The configured extension.
        expected: String,
        /// The last part of the file name.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn parse(name: &str, kind: EntryKind) -> Result<EntryName, ParseError> {
        parse_entry_name(OsStr::new(name), kind, &Config::default())
    }

    #[test_case("1.Intro.txt", 1, "Intro" ; "simple")]
    #[test_case("12.Getting Started.md", 12, "Getting Started" ; "spaces and any extension")]
    #[test_case("1.Version 2.0.txt", 1, "Version 20" ; "title parts are concatenated")]
    #[test_case("3.txt", 3, "" ; "no title")]
    #[test_case("4", 4, "" ; "no delimiter")]
    #[test_case("-2.Preface.txt", -2, "Preface" ; "negative")]
    #[test_case("+7.Plus.txt", 7, "Plus" ; "explicit sign")]
    #[test_case("007.Bond.txt", 7, "Bond" ; "leading zeros")]
    fn file_names(name: &str, number: i64, title: &str) {
        let parsed = parse(name, EntryKind::File).unwrap();
        assert_eq!(parsed.number(), number);
        assert_eq!(parsed.title(), title);
    }

    #[test_case("2.Basics", 2, "Basics" ; "simple")]
    #[test_case("2.Basics.old", 2, "Basicsold" ; "no extension stripped")]
    #[test_case("5", 5, "" ; "number only")]
    fn directory_names(name: &str, number: i64, title: &str) {
        let parsed = parse(name, EntryKind::Directory).unwrap();
        assert_eq!(parsed.number(), number);
        assert_eq!(parsed.title(), title);
    }

    #[test_case("notes.txt" ; "word")]
    #[test_case(".hidden" ; "leading delimiter")]
    #[test_case("1a.Intro.txt" ; "trailing letters")]
    #[test_case(" 1.Intro.txt" ; "leading whitespace")]
    #[test_case("99999999999999999999.Big.txt" ; "overflow")]
    fn names_without_numbers_are_rejected(name: &str) {
        assert!(matches!(
            parse(name, EntryKind::File),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn custom_delimiter() {
        let mut config = Config::default();
        config.set_delimiter('_');

        let parsed =
            parse_entry_name(OsStr::new("3_Deep Dive_v1.2.txt"), EntryKind::File, &config).unwrap();
        assert_eq!(parsed.number(), 3);
        assert_eq!(parsed.title(), "Deep Dive");
    }

    #[test]
    fn extension_filter_applies_to_files_only() {
        let mut config = Config::default();
        config.set_extension(Some("txt".to_string()));

        let accepted = parse_entry_name(OsStr::new("1.A.txt"), EntryKind::File, &config);
        assert!(accepted.is_ok());

        let rejected = parse_entry_name(OsStr::new("1.A.md"), EntryKind::File, &config);
        assert_eq!(
            rejected,
            Err(ParseError::UnexpectedExtension {
                expected: "txt".to_string(),
                found: "md".to_string(),
            })
        );

        let directory = parse_entry_name(OsStr::new("2.Part"), EntryKind::Directory, &config);
        assert!(directory.is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_names_are_rejected() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"1.\xff.txt");
        assert!(matches!(
            parse_entry_name(name, EntryKind::File, &Config::default()),
            Err(ParseError::NotUnicode(_))
        ));
    }
}
