use std::{fs, path::Path};

use anyhow::Context;
use tracing::instrument;

use super::{SourceArgs, terminal::Colorize};

#[derive(Debug, Default, clap::Parser)]
#[command(about = "Assemble the numbered fragments into a single document")]
pub struct Command {
    #[command(flatten)]
    source: SourceArgs,

    /// The file to write, relative to the project root
    #[arg(short, long, value_name = "FILE")]
    output: Option<std::path::PathBuf>,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut config = self.source.config(root)?;
        if let Some(output) = self.output {
            config.set_output(output);
        }

        let source = root.join(config.source());
        let destination = root.join(config.output());

        fs::create_dir_all(&source)
            .with_context(|| format!("Failed to create source folder {}", source.display()))?;

        let count = docasm::assemble_to(&source, &destination, &config)?;

        println!(
            "{} {} lines to {}",
            "Assembled".success(),
            count,
            destination.display()
        );
        Ok(())
    }
}
