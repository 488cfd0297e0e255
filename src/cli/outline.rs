use std::path::Path;

use anyhow::Context;
use clap::Parser;
use docasm::{Directory, Heading, Node};
use serde_json::{Value, json};
use tracing::instrument;

use super::{SourceArgs, terminal::Colorize};

#[derive(Debug, Parser, Default)]
#[command(about = "Show the numbered heading tree of the source folder")]
pub struct Command {
    #[command(flatten)]
    source: SourceArgs,

    /// Output format (tree, json)
    #[arg(long, value_name = "FORMAT", default_value = "tree")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Tree,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = self.source.config(root)?;
        let source = root.join(config.source());

        let nodes = Directory::new(&source, &config)
            .load()
            .with_context(|| format!("Failed to read {}", source.display()))?;
        let headings = docasm::domain::outline(&nodes);

        match self.format {
            OutputFormat::Tree if headings.is_empty() => {
                println!(
                    "No numbered fragments found in {}. Add one such as '1.Introduction.txt'.",
                    source.display()
                );
            }
            OutputFormat::Tree => Self::output_tree(&headings),
            OutputFormat::Json => println!("{}", render_json(&headings)?),
        }

        Ok(())
    }

    fn output_tree(headings: &[Heading<'_>]) {
        for heading in headings {
            let indent = "  ".repeat(heading.level() - 1);
            let position = heading.position().to_string();
            let detail = match heading.node() {
                Node::Paragraph(paragraph) => format!("{} lines", paragraph.text().len()),
                Node::Section(section) => format!("{} entries", section.data().len()),
            };
            println!(
                "{indent}{} {} {}",
                position.info(),
                heading.node().title(),
                format!("({detail})").dim()
            );
            Self::output_tree(heading.children());
        }
    }
}

fn render_json(headings: &[Heading<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Value::Array(headings.iter().map(to_json).collect()))
}

fn to_json(heading: &Heading<'_>) -> Value {
    let node = heading.node();
    let mut value = json!({
        "position": heading.position().numbers(),
        "label": heading.position().to_string(),
        "level": heading.level(),
        "title": node.title(),
        "kind": node.kind(),
        "path": node.path().display().to_string(),
    });

    match node {
        Node::Paragraph(paragraph) => {
            value["lines"] = json!(paragraph.text().len());
        }
        Node::Section(_) => {
            value["children"] = Value::Array(heading.children().iter().map(to_json).collect());
        }
    }

    value
}
