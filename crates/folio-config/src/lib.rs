//! Configuration management for folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [render]
//! max_depth = 64
//! root_class = "prose"
//!
//! [classes]
//! paragraph = "mb-4 last:mb-0"
//! link = "text-amber-700 underline"
//!
//! [excerpt]
//! max_chars = 200
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_richtext::{ClassMap, DEFAULT_MAX_DEPTH, RichTextRenderer, TextExtractor};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override maximum nesting depth.
    pub max_depth: Option<usize>,
    /// Override root wrapper class.
    pub root_class: Option<String>,
    /// Override excerpt length.
    pub excerpt_chars: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Upper bound for `render.max_depth`.
const MAX_DEPTH_LIMIT: usize = 1024;

/// Default excerpt length in characters.
const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Per-element classes keyed by element kind (`paragraph`, `heading-1`, ...).
    pub classes: BTreeMap<String, String>,
    /// Excerpt configuration.
    pub excerpt: ExcerptConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Nesting depth beyond which subtrees are dropped.
    pub max_depth: usize,
    /// Class hint for the root wrapper.
    pub root_class: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            root_class: None,
        }
    }
}

/// Excerpt configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExcerptConfig {
    /// Maximum excerpt length in characters, before the ellipsis.
    pub max_chars: usize,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and validated together with
    /// the file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(max_depth) = settings.max_depth {
            self.render.max_depth = max_depth;
        }
        if let Some(root_class) = &settings.root_class {
            self.render.root_class = Some(root_class.clone());
        }
        if let Some(excerpt_chars) = settings.excerpt_chars {
            self.excerpt.max_chars = excerpt_chars;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_render()?;
        self.class_map()?;
        if self.excerpt.max_chars == 0 {
            return Err(ConfigError::Validation(
                "excerpt.max_chars must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_render(&self) -> Result<(), ConfigError> {
        let depth = self.render.max_depth;
        if depth == 0 {
            return Err(ConfigError::Validation(
                "render.max_depth must be greater than 0".to_owned(),
            ));
        }
        if depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Validation(format!(
                "render.max_depth cannot exceed {MAX_DEPTH_LIMIT}"
            )));
        }
        Ok(())
    }

    /// Build the per-element class map from the `[classes]` section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for an unknown element key.
    pub fn class_map(&self) -> Result<ClassMap, ConfigError> {
        let mut map = ClassMap::new();
        for (key, class) in &self.classes {
            map.insert(key, class.as_str())
                .map_err(|e| ConfigError::Validation(format!("classes.{key}: {e}")))?;
        }
        Ok(map)
    }

    /// Renderer configured with the root class and depth limit.
    #[must_use]
    pub fn renderer(&self) -> RichTextRenderer {
        let renderer = RichTextRenderer::new().with_max_depth(self.render.max_depth);
        match &self.render.root_class {
            Some(class) => renderer.with_class(class.clone()),
            None => renderer,
        }
    }

    /// Plain-text extractor configured with the depth limit.
    #[must_use]
    pub fn extractor(&self) -> TextExtractor {
        TextExtractor::new().with_max_depth(self.render.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_richtext::ElementTag;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.render.root_class, None);
        assert!(config.classes.is_empty());
        assert_eq!(config.excerpt.max_chars, 200);
        assert!(config.config_path.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.excerpt.max_chars, 200);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[render]
max_depth = 16
root_class = "prose"

[classes]
paragraph = "mb-4 last:mb-0"
heading-1 = "text-4xl font-serif"

[excerpt]
max_chars = 120
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.max_depth, 16);
        assert_eq!(config.render.root_class.as_deref(), Some("prose"));
        assert_eq!(config.classes.len(), 2);
        assert_eq!(config.classes["heading-1"], "text-4xl font-serif");
        assert_eq!(config.excerpt.max_chars, 120);
        config.validate().unwrap();
    }

    #[test]
    fn test_class_map() {
        let mut config = Config::default();
        config
            .classes
            .insert("paragraph".to_owned(), "mb-4".to_owned());
        let map = config.class_map().unwrap();
        assert_eq!(map.get(&ElementTag::Paragraph), Some("mb-4"));
        assert_eq!(map.get(&ElementTag::Blockquote), None);
    }

    #[test]
    fn test_validate_unknown_class_key() {
        let mut config = Config::default();
        config
            .classes
            .insert("sidebar".to_owned(), "w-64".to_owned());
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("classes.sidebar"));
    }

    #[test]
    fn test_validate_max_depth_zero() {
        let mut config = Config::default();
        config.render.max_depth = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("render.max_depth"));
    }

    #[test]
    fn test_validate_max_depth_too_high() {
        let mut config = Config::default();
        config.render.max_depth = MAX_DEPTH_LIMIT + 1;
        assert!(config.validate().is_err());
        config.render.max_depth = MAX_DEPTH_LIMIT;
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_excerpt_zero() {
        let mut config = Config::default();
        config.excerpt.max_chars = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("excerpt.max_chars"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            max_depth: Some(8),
            root_class: Some("story".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.render.max_depth, 8);
        assert_eq!(config.render.root_class.as_deref(), Some("story"));
        assert_eq!(config.excerpt.max_chars, 200); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.render.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.render.root_class, None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[render]\nroot_class = \"prose\"\n\n[classes]\nlink = \"underline\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.render.root_class.as_deref(), Some("prose"));
        assert_eq!(config.classes["link"], "underline");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[render\nmax_depth = ").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[excerpt]\nmax_chars = 0\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_validates_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            max_depth: Some(0),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_renderer_uses_root_class() {
        let config: Config = toml::from_str("[render]\nroot_class = \"prose\"\n").unwrap();
        let html = config.renderer().render(&json!("Hi")).to_html();
        assert_eq!(html, r#"<div class="prose"><p>Hi</p></div>"#);
    }

    #[test]
    fn test_extractor_uses_max_depth() {
        let config: Config = toml::from_str("[render]\nmax_depth = 1\n").unwrap();
        let value = json!([{ "text": "top" }, { "type": "p", "children": [{ "text": "nested" }] }]);
        assert_eq!(config.extractor().extract(&value), "top");
    }
}
