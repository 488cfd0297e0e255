use std::fmt;

/// The ordering number and display title encoded in a source entry's name.
///
/// `3.Getting Started.txt` carries the number `3` and the title
/// `Getting Started`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryName {
    number: i64,
    title: String,
}

impl EntryName {
    /// Create an entry name from its parts.
    #[must_use]
    pub const fn new(number: i64, title: String) -> Self {
        Self { number, title }
    }

    /// The numeric prefix. Siblings are ordered by ascending number.
    #[must_use]
    pub const fn number(&self) -> i64 {
        self.number
    }

    /// The display title, without the numeric prefix or file extension.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.title)
    }
}
