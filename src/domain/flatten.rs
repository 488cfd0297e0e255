use super::{Heading, Node};

/// Turn a numbered outline into the lines of the assembled document.
///
/// Each node contributes its heading line, then either its text (paragraphs)
/// or its flattened children (sections), then one blank line.
#[must_use]
pub fn flatten(headings: &[Heading<'_>]) -> Vec<String> {
    let mut lines = Vec::new();
    flatten_into(headings, &mut lines);
    lines
}

fn flatten_into(headings: &[Heading<'_>], lines: &mut Vec<String>) {
    for heading in headings {
        lines.push(heading.to_string());
        match heading.node() {
            Node::Paragraph(paragraph) => lines.extend_from_slice(paragraph.text()),
            Node::Section(_) => flatten_into(heading.children(), lines),
        }
        lines.push(String::new());
    }
}
