//! Reading a document tree from the filesystem
//!
//! The [`Directory`] turns a folder of numbered fragments into the
//! filesystem agnostic [`Node`] tree. Each regular file whose name starts
//! with a number becomes a [`Paragraph`]; each numbered subdirectory becomes
//! a [`Section`] holding its own numbered contents. Everything else is
//! skipped.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::instrument;
use walkdir::{DirEntry, WalkDir};

use crate::{
    domain::{Config, Node, Paragraph, Section, sort_siblings},
    storage::name_parser::{EntryKind, parse_entry_name},
};

/// A filesystem backed source of document fragments.
#[derive(Debug)]
pub struct Directory<'a> {
    /// The folder whose numbered contents form the top level of the document.
    root: PathBuf,
    config: &'a Config,
}

impl<'a> Directory<'a> {
    /// Opens a directory at the given path.
    ///
    /// Nothing is read until [`Directory::load`] is called.
    #[must_use]
    pub fn new(root: &Path, config: &'a Config) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Read the whole tree beneath the root.
    ///
    /// The returned nodes, and the children of every section, are ordered by
    /// ascending number. Entries with equal numbers are ordered by name.
    ///
    /// # Errors
    ///
    /// This method fails if any directory in the tree cannot be listed, or if
    /// any numbered file cannot be read. Entries whose names do not start with
    /// a number are skipped and never cause an error.
    #[instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    pub fn load(&self) -> Result<Vec<Node>, LoadError> {
        self.load_dir(&self.root)
    }

    fn load_dir(&self, dir: &Path) -> Result<Vec<Node>, LoadError> {
        let mut nodes = Vec::new();

        for entry in list_entries(dir) {
            if let Some(node) = self.load_entry(entry?)? {
                nodes.push(node);
            }
        }

        sort_siblings(&mut nodes);
        Ok(nodes)
    }

    fn load_entry(&self, entry: DirEntry) -> Result<Option<Node>, LoadError> {
        let file_type = entry.file_type();
        let kind = if file_type.is_file() || is_linked_file(&entry) {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            tracing::debug!("Skipping special file at {}", entry.path().display());
            return Ok(None);
        };

        let name = match parse_entry_name(entry.file_name(), kind, self.config) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("Skipping {}: {e}", entry.path().display());
                return Ok(None);
            }
        };

        let path = entry.into_path();
        let node = match kind {
            EntryKind::File => {
                let text = read_lines(&path).map_err(|source| LoadError::Read {
                    path: path.clone(),
                    source,
                })?;
                Paragraph::new(name, text, path).into()
            }
            EntryKind::Directory => {
                let data = self.load_dir(&path)?;
                Section::new(name, data, path).into()
            }
        };

        Ok(Some(node))
    }
}

/// The immediate entries of `dir`, sorted by file name.
///
/// Symbolic links are not followed; see [`is_linked_file`].
fn list_entries(dir: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
}

/// Whether `entry` is a symbolic link to a regular file.
///
/// Links to directories are not followed, so a link can never make the tree
/// cyclic.
fn is_linked_file(entry: &DirEntry) -> bool {
    entry.path_is_symlink() && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
}

/// Read a text file as lines, without their terminators.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD. A leading byte order
/// mark is dropped.
fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    Ok(text.lines().map(str::to_string).collect())
}

/// Errors that can occur while reading the source tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A directory could not be listed.
    #[error("failed to list directory: {0}")]
    List(#[from] walkdir::Error),

    /// A fragment could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The fragment that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}
