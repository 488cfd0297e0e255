//! Plain-text Documentation Assembler
//!
//! A document is maintained as a tree of numbered text fragments
//! (`1.Intro.txt`) inside numbered folders (`2.Basics/`). This crate reads
//! such a tree, numbers every heading hierarchically (`2.1`, `2.1.3`, ...)
//! and flattens it into a single sequence of lines.

use std::{
    io,
    path::{Path, PathBuf},
};

/// Domain types and the filesystem-agnostic assembly passes.
pub mod domain;
pub use domain::{
    Config, EntryName, Heading, Node, NodeKind, Paragraph, Section, TitlePosition,
};

/// Filesystem access: reading the source tree and writing the document.
pub mod storage;
pub use storage::{Directory, LoadError, ParseError};

/// Build, number and flatten the source tree rooted at `root`.
///
/// # Errors
///
/// Returns an error if any directory in the tree cannot be listed, or any
/// qualifying file cannot be read.
pub fn assemble(root: &Path, config: &Config) -> Result<Vec<String>, LoadError> {
    let nodes = Directory::new(root, config).load()?;
    let headings = domain::outline(&nodes);
    Ok(domain::flatten(&headings))
}

/// Assemble the source tree rooted at `root` and write the result to
/// `destination`.
///
/// Nothing is written unless the whole tree was read successfully.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns an error if the tree cannot be loaded or the document cannot be
/// written.
pub fn assemble_to(
    root: &Path,
    destination: &Path,
    config: &Config,
) -> Result<usize, AssembleError> {
    let lines = assemble(root, config)?;
    storage::write_document(destination, &lines).map_err(|source| AssembleError::Write {
        path: destination.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} lines to {}", lines.len(), destination.display());
    Ok(lines.len())
}

/// Errors that can occur while assembling a document to disk.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// The source tree could not be read.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The assembled document could not be written.
    #[error("failed to write document to {}: {source}", path.display())]
    Write {
        /// The destination that could not be written.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn single_paragraph() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "1.Intro.txt", "Hello\n");

        let lines = assemble(tmp.path(), &Config::default()).unwrap();
        assert_eq!(lines, ["1 Intro(debug_title_level=1)", "Hello", ""]);
    }

    #[test]
    fn section_with_one_paragraph() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "2.Basics/1.Syntax.txt", "x\n");

        let lines = assemble(tmp.path(), &Config::default()).unwrap();
        assert_eq!(
            lines,
            [
                "2 Basics(debug_title_level=1)",
                "1.1 Syntax(debug_title_level=2)",
                "x",
                "",
                "",
            ]
        );
    }

    #[test]
    fn siblings_follow_their_numbers() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "2.B.txt", "b\n");
        write(tmp.path(), "1.A.txt", "a\n");

        let lines = assemble(tmp.path(), &Config::default()).unwrap();
        assert_eq!(
            lines,
            [
                "1 A(debug_title_level=1)",
                "a",
                "",
                "2 B(debug_title_level=1)",
                "b",
                "",
            ]
        );
    }

    #[test]
    fn unnumbered_files_contribute_nothing() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "1.Intro.txt", "Hello\n");
        write(tmp.path(), "notes.txt", "scratch\n");

        let lines = assemble(tmp.path(), &Config::default()).unwrap();
        assert_eq!(lines, ["1 Intro(debug_title_level=1)", "Hello", ""]);
    }

    #[test]
    fn nested_document_in_reading_order() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "1.Intro.txt", "Welcome\n");
        write(tmp.path(), "3.Advanced/1.Macros.txt", "m1\nm2\n");
        write(tmp.path(), "3.Advanced/2.Unsafe/1.Pointers.txt", "p\n");
        write(tmp.path(), "2.Basics/1.Syntax.txt", "s\n");

        let lines = assemble(tmp.path(), &Config::default()).unwrap();
        assert_eq!(
            lines,
            [
                "1 Intro(debug_title_level=1)",
                "Welcome",
                "",
                "2 Basics(debug_title_level=1)",
                "2.1 Syntax(debug_title_level=2)",
                "s",
                "",
                "",
                "3 Advanced(debug_title_level=1)",
                "3.1 Macros(debug_title_level=2)",
                "m1",
                "m2",
                "",
                "3.2 Unsafe(debug_title_level=2)",
                "3.2.1 Pointers(debug_title_level=3)",
                "p",
                "",
                "",
                "",
            ]
        );
    }

    #[test]
    fn assembling_twice_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src");
        write(&source, "1.A.txt", "alpha\r\nbeta\n");
        write(&source, "2.B/1.C.txt", "gamma");
        write(&source, "2.B/1.D.txt", "delta");

        let first = tmp.path().join("first.txt");
        let second = tmp.path().join("second.txt");
        assemble_to(&source, &first, &Config::default()).unwrap();
        assemble_to(&source, &second, &Config::default()).unwrap();

        assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
    }

    #[test]
    fn missing_root_is_an_error_and_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let destination = tmp.path().join("out.txt");

        let result = assemble_to(&tmp.path().join("missing"), &destination, &Config::default());

        assert!(result.is_err());
        assert!(!destination.exists());
    }
}
