//! Layered configuration
//!
//! `defaults/tokenizer.default.toml` is embedded into the crate so that the documented defaults
//! and the runtime defaults cannot drift apart. Applications layer user files and overrides on
//! top of it with [`Loader`] before deserializing into [`TokenizerConfig`].

use super::error::{Error, Result};
use super::grammar::{Grammar, GrammarLoader, BUILTIN_GRAMMAR_SOURCE};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/tokenizer.default.toml");

/// File picked up from the working directory when present
pub const LOCAL_CONFIG_FILE: &str = "tokenizer.toml";

/// Top-level configuration consumed by the tokenizer binary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub grammar: GrammarConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which grammar to load and how much of it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrammarConfig {
    /// Grammar file; `None` selects the built-in grammar
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Rules to read from the top of the grammar; `None` reads them all
    #[serde(default)]
    pub rule_count: Option<i64>,
}

impl GrammarConfig {
    /// The validated rule count.
    pub fn rule_limit(&self) -> Result<Option<usize>> {
        match self.rule_count {
            None => Ok(None),
            Some(count) if count > 0 => usize::try_from(count)
                .map(Some)
                .map_err(|_| Error::InvalidInvocation(format!("rule count {count} is too large"))),
            Some(_) => Err(Error::InvalidInvocation(
                "number of tokens must be positive".to_string(),
            )),
        }
    }

    /// Load the configured grammar, or the built-in one when no path is set.
    pub fn load(&self) -> Result<Grammar> {
        let limit = self.rule_limit()?;
        let loader = match &self.path {
            Some(path) => GrammarLoader::from_path(path)?,
            None => GrammarLoader::from_string(BUILTIN_GRAMMAR_SOURCE),
        };
        Ok(loader.load(limit))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How the binary renders a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `<token>\t<rule name>` per match
    #[default]
    Tsv,
    /// One token per line
    Tokens,
    /// Pretty JSON array of match records
    Json,
}

/// Settings given on the command line; each one that is set wins over every file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub grammar_path: Option<PathBuf>,
    /// Rule count as typed; text that is not a number counts as zero
    pub rule_count: Option<String>,
    pub format: Option<String>,
}

/// Builds a [`TokenizerConfig`] from the embedded defaults and the layers put on top of them.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded defaults alone.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// The layering the binary uses: defaults, then [`LOCAL_CONFIG_FILE`] if it exists in the
    /// working directory, then `config_file`, which must exist.
    pub fn for_invocation(config_file: Option<&Path>) -> Self {
        let loader = Self::new().layer(LOCAL_CONFIG_FILE, false);
        match config_file {
            Some(path) => loader.layer(path, true),
            None => loader,
        }
    }

    /// Layer a configuration file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path, true)
    }

    /// Apply command-line settings over every file layer.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(path) = &overrides.grammar_path {
            self.builder = self
                .builder
                .set_override("grammar.path", path.to_string_lossy().into_owned())?;
        }
        if let Some(count) = &overrides.rule_count {
            self.builder = self
                .builder
                .set_override("grammar.rule_count", parse_rule_count(count))?;
        }
        if let Some(format) = &overrides.format {
            self.builder = self.builder.set_override("output.format", format.as_str())?;
        }
        Ok(self)
    }

    /// Merge the layers and deserialize them.
    pub fn build(self) -> Result<TokenizerConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-numeric counts become 0 so they are rejected as non-positive rather than ignored.
fn parse_rule_count(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}
