pub mod directory;
mod document;
mod name_parser;

pub use directory::{Directory, LoadError};
pub use document::write_document;
pub use name_parser::{EntryKind, ParseError, parse_entry_name};
