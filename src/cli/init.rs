use std::{fs, path::Path};

use docasm::{Config, domain::config::FILE_NAME};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Only read files with this extension
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config_path = root.join(FILE_NAME);
        if config_path.exists() {
            anyhow::bail!("Project already initialized (found existing {FILE_NAME})");
        }

        fs::create_dir_all(root)
            .map_err(|e| anyhow::anyhow!("Failed to create project directory: {e}"))?;

        let mut config = Config::default();
        config.set_extension(self.extension);
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {FILE_NAME}: {e}"))?;

        let source = root.join(config.source());
        fs::create_dir_all(&source)
            .map_err(|e| anyhow::anyhow!("Failed to create source folder: {e}"))?;

        println!("Initialized documentation project in {}", root.display());
        println!("  Created: {FILE_NAME}");
        println!("  Created: {}/", config.source().display());
        println!();
        println!("Next steps:");
        println!(
            "  Add numbered fragments such as {}/1.Introduction.txt",
            config.source().display()
        );
        println!("  docasm build");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn writes_config_and_source_folder() {
        let tmp = TempDir::new().unwrap();

        Command {
            extension: Some("txt".to_string()),
        }
        .run(tmp.path())
        .unwrap();

        let config = Config::load(&tmp.path().join(FILE_NAME)).unwrap();
        assert_eq!(config.extension(), Some("txt"));
        assert!(tmp.path().join(config.source()).is_dir());
    }

    #[test]
    fn refuses_to_overwrite_existing_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(FILE_NAME), "_version = \"1\"\n").unwrap();

        let result = Command { extension: None }.run(tmp.path());

        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(tmp.path().join(FILE_NAME)).unwrap(),
            "_version = \"1\"\n"
        );
    }
}
