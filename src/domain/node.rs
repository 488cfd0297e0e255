//! The document tree.
//!
//! A [`Node`] is either a [`Paragraph`] (a leaf holding text lines) or a
//! [`Section`] (an ordered list of child nodes). The tree knows nothing about
//! how it was read; see [`crate::storage::Directory`] for that.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::EntryName;

/// A single element of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf fragment of text.
    Paragraph(Paragraph),
    /// A group of nested nodes.
    Section(Section),
}

impl Node {
    /// The parsed name of the source entry.
    #[must_use]
    pub const fn name(&self) -> &EntryName {
        match self {
            Self::Paragraph(paragraph) => &paragraph.name,
            Self::Section(section) => &section.name,
        }
    }

    /// The numeric prefix which orders this node among its siblings.
    #[must_use]
    pub const fn number(&self) -> i64 {
        self.name().number()
    }

    /// The display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.name().title()
    }

    /// The file or directory this node was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Paragraph(paragraph) => &paragraph.path,
            Self::Section(section) => &section.path,
        }
    }

    /// The child nodes. Empty for paragraphs.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Paragraph(_) => &[],
            Self::Section(section) => &section.data,
        }
    }

    /// The number of levels in the subtree rooted at this node, counting the
    /// node itself.
    ///
    /// A paragraph, or a section with no children, has a depth of 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }

    /// The kind of node, as used in serialised outlines.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Paragraph(_) => NodeKind::Paragraph,
            Self::Section(_) => NodeKind::Section,
        }
    }
}

impl From<Paragraph> for Node {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

/// Discriminant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// See [`Paragraph`].
    Paragraph,
    /// See [`Section`].
    Section,
}

/// A leaf fragment: the lines of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    name: EntryName,
    text: Vec<String>,
    path: PathBuf,
}

impl Paragraph {
    /// Create a paragraph from its name, text lines and source path.
    #[must_use]
    pub const fn new(name: EntryName, text: Vec<String>, path: PathBuf) -> Self {
        Self { name, text, path }
    }

    /// The lines of text, in source order.
    #[must_use]
    pub fn text(&self) -> &[String] {
        &self.text
    }
}

/// An internal node: the contents of one source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: EntryName,
    data: Vec<Node>,
    path: PathBuf,
}

impl Section {
    /// Create a section.
    ///
    /// Children are sorted by ascending number. The sort is stable, so
    /// children with equal numbers keep the order they were given in.
    #[must_use]
    pub fn new(name: EntryName, mut data: Vec<Node>, path: PathBuf) -> Self {
        sort_siblings(&mut data);
        Self { name, data, path }
    }

    /// The child nodes, ordered by number.
    #[must_use]
    pub fn data(&self) -> &[Node] {
        &self.data
    }
}

/// Order sibling nodes by ascending number, keeping ties in their given order.
pub(crate) fn sort_siblings(nodes: &mut [Node]) {
    nodes.sort_by_key(Node::number);
}
