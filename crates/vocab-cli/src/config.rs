//! Pipeline configuration loaded from `vocab.toml`.
//!
//! ```toml
//! source = "data/vocab.csv"
//!
//! [export]
//! vocab = "docs/data/vocab.json"
//! latest = "docs/data/latest.json"
//! report = "tools/export/out/report.json"
//!
//! [print]
//! output = "tools/print/output.html"
//! front = ["en", "pron"]
//! back = ["meaning_en", "cz"]
//! ```
//!
//! Only `source` is required. Relative paths are resolved against the
//! directory holding the config file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use vocab_model::Field;
use vocab_report::{CardLayout, ExportTargets, LayoutError};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "vocab.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid card layout in {path}: {source}")]
    Layout {
        path: PathBuf,
        #[source]
        source: LayoutError,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    source: PathBuf,
    #[serde(default)]
    export: ExportSection,
    #[serde(default)]
    print: PrintSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ExportSection {
    vocab: PathBuf,
    latest: PathBuf,
    report: PathBuf,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            vocab: PathBuf::from("docs/data/vocab.json"),
            latest: PathBuf::from("docs/data/latest.json"),
            report: PathBuf::from("tools/export/out/report.json"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PrintSection {
    output: PathBuf,
    front: Vec<Field>,
    back: Vec<Field>,
}

impl Default for PrintSection {
    fn default() -> Self {
        let layout = CardLayout::default();
        Self {
            output: PathBuf::from("tools/print/output.html"),
            front: layout.front().to_vec(),
            back: layout.back().to_vec(),
        }
    }
}

/// Resolved configuration shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabConfig {
    pub source: PathBuf,
    pub export: ExportTargets,
    pub print_output: PathBuf,
    pub layout: CardLayout,
}

impl VocabConfig {
    /// Reads and resolves a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let config = Self::parse(&content, path)?;
        debug!(path = %path.display(), source = %config.source.display(), "loaded config");
        Ok(config)
    }

    /// Parses config text; `path` locates the file for relative paths and errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let layout = CardLayout::new(raw.print.front, raw.print.back).map_err(|source| {
            ConfigError::Layout {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self {
            source: resolve(base, raw.source),
            export: ExportTargets {
                vocab: resolve(base, raw.export.vocab),
                latest: resolve(base, raw.export.latest),
                report: resolve(base, raw.export.report),
            },
            print_output: resolve(base, raw.print.output),
            layout,
        })
    }

    /// Replaces the source table, e.g. from `--source`.
    #[must_use]
    pub fn with_source(mut self, source: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        self
    }

    /// Replaces the flashcard destination, e.g. from `--output`.
    #[must_use]
    pub fn with_print_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(output) = output {
            self.print_output = output;
        }
        self
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<VocabConfig, ConfigError> {
        VocabConfig::parse(content, Path::new("/work/vocab.toml"))
    }

    #[test]
    fn test_defaults_apply() {
        let config = parse("source = \"data/vocab.csv\"\n").unwrap();

        assert_eq!(config.source, PathBuf::from("/work/data/vocab.csv"));
        assert_eq!(
            config.export.vocab,
            PathBuf::from("/work/docs/data/vocab.json")
        );
        assert_eq!(
            config.export.latest,
            PathBuf::from("/work/docs/data/latest.json")
        );
        assert_eq!(
            config.export.report,
            PathBuf::from("/work/tools/export/out/report.json")
        );
        assert_eq!(
            config.print_output,
            PathBuf::from("/work/tools/print/output.html")
        );
        assert_eq!(config.layout, CardLayout::default());
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = parse(
            r#"
source = "/data/words.csv"

[export]
report = "out/report.json"

[print]
output = "cards.html"
front = ["cz"]
back = ["en", "example", "note"]
"#,
        )
        .unwrap();

        assert_eq!(config.source, PathBuf::from("/data/words.csv"));
        assert_eq!(config.export.report, PathBuf::from("/work/out/report.json"));
        assert_eq!(
            config.export.vocab,
            PathBuf::from("/work/docs/data/vocab.json")
        );
        assert_eq!(config.print_output, PathBuf::from("/work/cards.html"));
        assert_eq!(config.layout.front(), &[Field::Cz]);
        assert_eq!(
            config.layout.back(),
            &[Field::En, Field::Example, Field::Note]
        );
    }

    #[test]
    fn test_missing_source_is_rejected() {
        assert!(matches!(
            parse("[print]\noutput = \"x.html\"\n"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let result = parse("source = \"a.csv\"\n[print]\nfront = [\"english\"]\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = parse("source = \"a.csv\"\nexcel_path = \"a.xlsx\"\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_empty_side_is_rejected() {
        let result = parse("source = \"a.csv\"\n[print]\nback = []\n");
        assert!(matches!(
            result,
            Err(ConfigError::Layout {
                source: LayoutError::EmptySide { side: "back" },
                ..
            })
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let config = parse("source = \"a.csv\"\n")
            .unwrap()
            .with_source(Some(PathBuf::from("other.csv")))
            .with_print_output(None);

        assert_eq!(config.source, PathBuf::from("other.csv"));
        assert_eq!(
            config.print_output,
            PathBuf::from("/work/tools/print/output.html")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = VocabConfig::load(&dir.path().join(DEFAULT_CONFIG_FILE));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }
}
