//! Hierarchical heading numbers.
//!
//! [`outline`] walks a document tree top-down and pairs every node with its
//! [`TitlePosition`]: the numbers of all its ancestors followed by its own.
//! The tree itself is only borrowed, never modified.

use std::fmt;

use super::Node;

/// The full hierarchical number of a heading, e.g. `3.1.4`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitlePosition(Vec<i64>);

impl TitlePosition {
    /// The position of the document root, which contributes no number.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// The position of a child numbered `number` beneath this one.
    #[must_use]
    pub fn child(&self, number: i64) -> Self {
        let mut numbers = Vec::with_capacity(self.0.len() + 1);
        numbers.extend_from_slice(&self.0);
        numbers.push(number);
        Self(numbers)
    }

    /// The nesting depth. Top-level headings have a level of 1.
    #[must_use]
    pub fn level(&self) -> usize {
        self.0.len()
    }

    /// The numbers from the outermost ancestor down to the heading itself.
    #[must_use]
    pub fn numbers(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for TitlePosition {
    fn from(numbers: Vec<i64>) -> Self {
        Self(numbers)
    }
}

impl fmt::Display for TitlePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, number) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{number}")?;
        }
        Ok(())
    }
}

/// A node of the document tree together with its computed position.
///
/// Headings mirror the shape of the tree they were built from: a section's
/// heading has one child heading per child node, in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    node: &'a Node,
    position: TitlePosition,
    children: Vec<Self>,
}

impl<'a> Heading<'a> {
    /// The underlying node.
    #[must_use]
    pub const fn node(&self) -> &'a Node {
        self.node
    }

    /// The hierarchical number of this heading.
    #[must_use]
    pub const fn position(&self) -> &TitlePosition {
        &self.position
    }

    /// The nesting depth (1 for top-level headings).
    #[must_use]
    pub fn level(&self) -> usize {
        self.position.level()
    }

    /// The headings of the node's children.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Formats the heading line: `<position> <title>(debug_title_level=<level>)`.
impl fmt::Display for Heading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}(debug_title_level={})",
            self.position,
            self.node.title(),
            self.level()
        )
    }
}

/// Compute the heading of every node in the tree.
///
/// `nodes` are the top-level nodes of the document; they receive level 1.
#[must_use]
pub fn outline(nodes: &[Node]) -> Vec<Heading<'_>> {
    outline_beneath(nodes, &TitlePosition::root())
}

fn outline_beneath<'a>(nodes: &'a [Node], parent: &TitlePosition) -> Vec<Heading<'a>> {
    nodes
        .iter()
        .map(|node| {
            let position = parent.child(node.number());
            let children = outline_beneath(node.children(), &position);
            Heading {
                node,
                position,
                children,
            }
        })
        .collect()
}
