use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{RetrievalModel, TermWeighting};
use crate::error::{FindexError, Result};

const PROJECT_CONFIG: &str = ".findex/findex.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub db_path: PathBuf,
    pub search: SearchConfig,
    pub ingest: IngestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_model: String,
    pub weighting: TermWeighting,
    pub parallel: bool,
    pub default_limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_model: RetrievalModel::VectorSpace.tag().to_string(),
            weighting: TermWeighting::Raw,
            parallel: false,
            default_limit: None,
        }
    }
}

impl SearchConfig {
    pub fn model(&self) -> Result<RetrievalModel> {
        self.default_model.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub extensions: Vec<String>,
    pub reliable_detection: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string(), "md".to_string()],
            reliable_detection: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut layered = toml::Table::new();
        for path in [Self::global_path(), PathBuf::from(PROJECT_CONFIG)] {
            if let Some(layer) = Self::read_layer(&path)? {
                merge_tables(&mut layered, layer);
            }
        }
        Ok(Self::from_table(layered)?.with_env_overrides())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FindexError::Config(e.to_string()))
    }

    fn from_table(table: toml::Table) -> Result<Self> {
        toml::Value::Table(table)
            .try_into()
            .map_err(|e| FindexError::Config(e.to_string()))
    }

    fn global_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "findex")
            .map_or_else(
                || PathBuf::from("~/.config/findex"),
                |d| d.config_dir().to_path_buf(),
            )
            .join("config.toml")
    }

    fn read_layer(path: &Path) -> Result<Option<toml::Table>> {
        if !path.exists() {
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "Loading config");
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| FindexError::Config(format!("{}: {e}", path.display())))
    }

    fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup("FINDEX_DB_PATH") {
            self.db_path = PathBuf::from(path);
        }
        if let Some(model) = lookup("FINDEX_MODEL") {
            self.search.default_model = model;
        }
        self
    }

    /// Configured store path, or `index.redb` in the platform data directory.
    pub fn db_path(&self) -> PathBuf {
        if self.db_path.as_os_str().is_empty() {
            directories::ProjectDirs::from("", "", "findex").map_or_else(
                || PathBuf::from(".findex/index.redb"),
                |d| d.data_dir().join("index.redb"),
            )
        } else {
            self.db_path.clone()
        }
    }
}

/// Overlays `layer` onto `base` key by key. Nested tables merge recursively,
/// so a later file only replaces the settings it actually names.
fn merge_tables(base: &mut toml::Table, layer: toml::Table) {
    for (key, value) in layer {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.model().unwrap(), RetrievalModel::VectorSpace);
        assert_eq!(config.search.weighting, TermWeighting::Raw);
        assert!(!config.search.parallel);
        assert!(config.db_path().ends_with("index.redb"));
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse(
            r#"
db_path = "/tmp/corpus.redb"

[search]
default_model = "EBM"
weighting = "tf-idf"
"#,
        )
        .unwrap();

        assert_eq!(config.db_path(), PathBuf::from("/tmp/corpus.redb"));
        assert_eq!(config.search.model().unwrap(), RetrievalModel::ExtendedBoolean);
        assert_eq!(config.search.weighting, TermWeighting::TfIdf);
        assert_eq!(config.ingest.extensions, vec!["txt", "md"]);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = Config::parse("search = [").unwrap_err();
        assert!(matches!(err, FindexError::Config(_)));
    }

    #[test]
    fn test_invalid_default_model() {
        let config = Config::parse("[search]\ndefault_model = \"XX\"").unwrap();
        assert!(matches!(
            config.search.model().unwrap_err(),
            FindexError::InvalidModel(_)
        ));
    }

    fn layered(global: &str, project: &str) -> Config {
        let mut table: toml::Table = toml::from_str(global).unwrap();
        merge_tables(&mut table, toml::from_str(project).unwrap());
        Config::from_table(table).unwrap()
    }

    #[test]
    fn test_project_layer_overrides_named_settings() {
        let config = layered(
            "db_path = \"/global.redb\"\n[search]\ndefault_model = \"EBM\"\n",
            "[search]\ndefault_model = \"BM\"\n",
        );
        assert_eq!(config.db_path, PathBuf::from("/global.redb"));
        assert_eq!(config.search.model().unwrap(), RetrievalModel::ExactBoolean);
    }

    #[test]
    fn test_project_layer_keeps_global_sections() {
        let config = layered(
            r#"
[search]
default_model = "BM"
weighting = "tf-idf"

[ingest]
extensions = ["rst"]
"#,
            "db_path = \"/p.redb\"\n",
        );
        assert_eq!(config.db_path, PathBuf::from("/p.redb"));
        assert_eq!(config.search.model().unwrap(), RetrievalModel::ExactBoolean);
        assert_eq!(config.search.weighting, TermWeighting::TfIdf);
        assert_eq!(config.ingest.extensions, vec!["rst"]);
    }

    #[test]
    fn test_project_layer_merges_within_a_section() {
        let config = layered(
            "[search]\nweighting = \"tf-idf\"\nparallel = true\n",
            "[search]\nparallel = false\n",
        );
        assert_eq!(config.search.weighting, TermWeighting::TfIdf);
        assert!(!config.search.parallel);
        assert_eq!(config.search.model().unwrap(), RetrievalModel::VectorSpace);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_overrides_from(|key| match key {
            "FINDEX_DB_PATH" => Some("/env.redb".to_string()),
            "FINDEX_MODEL" => Some("BM".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path(), PathBuf::from("/env.redb"));
        assert_eq!(config.search.model().unwrap(), RetrievalModel::ExactBoolean);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("findex.toml");
        std::fs::write(&path, "[search]\nparallel = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.search.parallel);
    }
}
