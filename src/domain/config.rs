//! Project configuration, read from `docasm.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The name of the configuration file, relative to the project root.
pub const FILE_NAME: &str = "docasm.toml";

/// Configuration for assembling a document.
///
/// Every setting has a default, so a project without a configuration file
/// behaves exactly as one with an empty file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The directory holding the numbered fragments, relative to the project
    /// root.
    source: PathBuf,

    /// The file the assembled document is written to, relative to the
    /// project root.
    output: PathBuf,

    /// The character separating the parts of an entry name.
    ///
    /// With the default `.`, `3.Getting Started.txt` has the parts `3`,
    /// `Getting Started` and `txt`.
    delimiter: char,

    /// If set, only files whose last name part equals this extension are
    /// read. Other files are skipped like unnumbered ones.
    extension: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            delimiter: default_delimiter(),
            extension: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration from `root`, falling back to the defaults if
    /// the project has no configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(root: &Path) -> Result<Self, String> {
        let path = root.join(FILE_NAME);
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The source directory, relative to the project root.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The output file, relative to the project root.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The entry name delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The required file extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Sets the source directory.
    pub fn set_source(&mut self, source: PathBuf) {
        self.source = source;
    }

    /// Sets the output file.
    pub fn set_output(&mut self, output: PathBuf) {
        self.output = output;
    }

    /// Sets the entry name delimiter.
    pub const fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }

    /// Restricts the files that are read to those with the given extension.
    ///
    /// `None` reads every numbered file.
    pub fn set_extension(&mut self, extension: Option<String>) {
        self.extension = extension;
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("Documentation")
}

fn default_output() -> PathBuf {
    PathBuf::from("OptimizedCompilersProjectDocumentation.txt")
}

const fn default_delimiter() -> char {
    '.'
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_source")]
        source: PathBuf,

        #[serde(default = "default_output")]
        output: PathBuf,

        #[serde(default = "default_delimiter")]
        delimiter: char,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        extension: Option<String>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                source,
                output,
                delimiter,
                extension,
            } => Self {
                source,
                output,
                delimiter,
                extension,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            source: config.source,
            output: config.output,
            delimiter: config.delimiter,
            extension: config.extension,
        }
    }
}
