use std::path::{Path, PathBuf};

mod build;
mod init;
mod outline;
mod terminal;

use clap::ArgAction;
use docasm::Config;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the project root, where `docasm.toml` lives
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.unwrap_or_default().run(&self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Assemble the source folder into the output document (default)
    Build(build::Command),

    /// Print the numbered heading tree without writing anything
    Outline(outline::Command),

    /// Create a default configuration file and source folder
    Init(init::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::Build(build::Command::default())
    }
}

impl Command {
    fn run(self, root: &Path) -> anyhow::Result<()> {
        match self {
            Self::Build(command) => command.run(root),
            Self::Outline(command) => command.run(root),
            Self::Init(command) => command.run(root),
        }
    }
}

/// Flags that override the source settings of the configuration file.
#[derive(Debug, Default, clap::Args)]
struct SourceArgs {
    /// The folder of numbered fragments, relative to the project root
    #[arg(long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// The character separating the number, title and extension in names
    #[arg(long, value_name = "CHAR")]
    delimiter: Option<char>,

    /// Only read files with this extension
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,
}

impl SourceArgs {
    /// Load the project configuration and apply these overrides to it.
    fn config(&self, root: &Path) -> anyhow::Result<Config> {
        let mut config = Config::load_or_default(root).map_err(|e| anyhow::anyhow!(e))?;
        if let Some(source) = &self.source {
            config.set_source(source.clone());
        }
        if let Some(delimiter) = self.delimiter {
            config.set_delimiter(delimiter);
        }
        if let Some(extension) = &self.extension {
            config.set_extension(Some(extension.clone()));
        }
        Ok(config)
    }
}
