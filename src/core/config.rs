//! Configuration module for `edu-catalog`

use crate::core::assistant::{AssistantSettings, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::core::catalog::{DeriveOptions, DEFAULT_ID_BASE};
use crate::core::models::Language;
use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory in path values
pub const DIR_VARIABLE: &str = "$EDU_CATALOG";

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`]
pub const KEYS: [&str; 14] = [
    "level",
    "file",
    "verbose",
    "curriculum_file",
    "base_courses_file",
    "exports_dir",
    "reports_dir",
    "language",
    "match_language",
    "id_base",
    "placeholder_content",
    "api_key",
    "model",
    "temperature",
];

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Curriculum dataset used when no file is given on the command line
    #[serde(default)]
    pub curriculum_file: String,
    /// Hand-authored course list merged ahead of derived courses
    #[serde(default)]
    pub base_courses_file: String,
    /// Directory for CSV/JSON catalog exports
    #[serde(default)]
    pub exports_dir: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Catalog derivation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Label language ("ar" or "en")
    #[serde(default)]
    pub language: String,
    /// Language compared against `--specialization` names
    #[serde(default)]
    pub match_language: String,
    /// First surrogate id
    #[serde(default = "default_id_base")]
    pub id_base: u64,
    /// Attach placeholder lessons to derived courses
    #[serde(default)]
    pub placeholder_content: bool,
}

const fn default_id_base() -> u64 {
    DEFAULT_ID_BASE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            language: String::new(),
            match_language: String::new(),
            id_base: DEFAULT_ID_BASE,
            placeholder_content: false,
        }
    }
}

/// Assistant configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// API key; the `OPENAI_API_KEY` environment variable is used when empty
    #[serde(default)]
    pub api_key: String,
    /// Model name
    #[serde(default)]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

const fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: String::new(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Assistant settings
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override curriculum dataset path
    pub curriculum_file: Option<String>,
    /// Override exports directory
    pub exports_dir: Option<String>,
    /// Override reports directory
    pub reports_dir: Option<String>,
    /// Override label language
    pub language: Option<String>,
}

/// Normalize `section.field` and dashed forms to the bare field name
fn normalize_key(key: &str) -> String {
    key.rsplit('.').next().unwrap_or(key).replace('-', "_")
}

fn unknown_key(key: &str) -> String {
    format!("Unknown config key: '{key}'")
}

impl Config {
    /// Get the `$EDU_CATALOG` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/educatalog`
    /// - macOS: `~/Library/Application Support/educatalog`
    /// - Windows: `%APPDATA%\educatalog`
    #[must_use]
    pub fn get_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("educatalog")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// updated, so newly introduced settings appear after an upgrade without
    /// touching user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let pairs: [(&mut String, &String); 10] = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.curriculum_file, &defaults.paths.curriculum_file),
            (&mut self.paths.base_courses_file, &defaults.paths.base_courses_file),
            (&mut self.paths.exports_dir, &defaults.paths.exports_dir),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            (&mut self.catalog.language, &defaults.catalog.language),
            (&mut self.catalog.match_language, &defaults.catalog.match_language),
            (&mut self.assistant.api_key, &defaults.assistant.api_key),
            (&mut self.assistant.model, &defaults.assistant.model),
        ];

        let mut changed = false;
        for (field, default) in pairs {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the file on disk is untouched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(curriculum_file) = &overrides.curriculum_file {
            self.paths.curriculum_file.clone_from(curriculum_file);
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir.clone_from(exports_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(language) = &overrides.language {
            self.catalog.language.clone_from(language);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_config_dir`](Self::get_config_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_config_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$EDU_CATALOG` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_config_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing sections and fields take their serde defaults. Path values have
    /// `$EDU_CATALOG` expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        for field in [
            &mut config.logging.file,
            &mut config.paths.curriculum_file,
            &mut config.paths.base_courses_file,
            &mut config.paths.exports_dir,
            &mut config.paths.reports_dir,
        ] {
            *field = Self::expand_variables(field);
        }

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds
    /// `DefaultCLIConfigRelease.toml`.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).unwrap_or_default()
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// An existing file gets missing fields merged in from defaults and is saved
    /// back when anything changed. On first run the defaults are written out.
    /// Unreadable files fall back to defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// [`load`](Self::load) against an explicit file
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
            }
        } else {
            let _ = defaults.save_to(config_file);
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, serialization fails,
    /// or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, serialization fails,
    /// or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Keys are bare field names (`level`, `id_base`) or `section.field`
    /// (`catalog.id_base`); dashes and underscores are interchangeable. See
    /// [`KEYS`] for the full list.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match normalize_key(key).as_str() {
            "level" => self.logging.level.clone(),
            "file" => self.logging.file.clone(),
            "verbose" => self.logging.verbose.to_string(),
            "curriculum_file" => self.paths.curriculum_file.clone(),
            "base_courses_file" => self.paths.base_courses_file.clone(),
            "exports_dir" => self.paths.exports_dir.clone(),
            "reports_dir" => self.paths.reports_dir.clone(),
            "language" => self.catalog.language.clone(),
            "match_language" => self.catalog.match_language.clone(),
            "id_base" => self.catalog.id_base.to_string(),
            "placeholder_content" => self.catalog.placeholder_content.to_string(),
            "api_key" => self.assistant.api_key.clone(),
            "model" => self.assistant.model.clone(),
            "temperature" => self.assistant.temperature.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a configuration value by key
    ///
    /// Values are validated: `level` must name a log level, `language` and
    /// `match_language` must be `ar` or `en`, `id_base` a non-negative integer,
    /// `verbose` and `placeholder_content` booleans, and `temperature` a number
    /// between 0 and 2.
    ///
    /// Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => {
                value
                    .parse::<Level>()
                    .map_err(|_| format!("Invalid log level: '{value}'"))?;
                self.logging.level = value.to_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool("verbose", value)?,
            "curriculum_file" => self.paths.curriculum_file = value.to_string(),
            "base_courses_file" => self.paths.base_courses_file = value.to_string(),
            "exports_dir" => self.paths.exports_dir = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            "language" => self.catalog.language = parse_language(value)?.code().to_string(),
            "match_language" => {
                self.catalog.match_language = parse_language(value)?.code().to_string();
            }
            "id_base" => {
                self.catalog.id_base = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid integer value for 'id_base': '{value}'"))?;
            }
            "placeholder_content" => {
                self.catalog.placeholder_content = parse_bool("placeholder_content", value)?;
            }
            "api_key" => self.assistant.api_key = value.to_string(),
            "model" => self.assistant.model = value.to_string(),
            "temperature" => {
                self.assistant.temperature = value
                    .parse::<f32>()
                    .ok()
                    .filter(|t| (0.0..=2.0).contains(t))
                    .ok_or_else(|| format!("Invalid temperature (0.0 to 2.0): '{value}'"))?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its value in `defaults`)
    ///
    /// Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "curriculum_file" => self
                .paths
                .curriculum_file
                .clone_from(&defaults.paths.curriculum_file),
            "base_courses_file" => self
                .paths
                .base_courses_file
                .clone_from(&defaults.paths.base_courses_file),
            "exports_dir" => self.paths.exports_dir.clone_from(&defaults.paths.exports_dir),
            "reports_dir" => self.paths.reports_dir.clone_from(&defaults.paths.reports_dir),
            "language" => self.catalog.language.clone_from(&defaults.catalog.language),
            "match_language" => self
                .catalog
                .match_language
                .clone_from(&defaults.catalog.match_language),
            "id_base" => self.catalog.id_base = defaults.catalog.id_base,
            "placeholder_content" => {
                self.catalog.placeholder_content = defaults.catalog.placeholder_content;
            }
            "api_key" => self.assistant.api_key.clone_from(&defaults.assistant.api_key),
            "model" => self.assistant.model.clone_from(&defaults.assistant.model),
            "temperature" => self.assistant.temperature = defaults.assistant.temperature,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Label language, Arabic when unset or invalid
    #[must_use]
    pub fn language(&self) -> Language {
        self.catalog.language.parse().unwrap_or_default()
    }

    /// Specialization matching language, Arabic when unset or invalid
    #[must_use]
    pub fn match_language(&self) -> Language {
        self.catalog.match_language.parse().unwrap_or_default()
    }

    /// Derivation options described by the `[catalog]` section
    #[must_use]
    pub fn derive_options(&self) -> DeriveOptions {
        DeriveOptions::default()
            .with_id_base(self.catalog.id_base)
            .with_language(self.language())
            .with_match_language(self.match_language())
            .with_placeholder_content(self.catalog.placeholder_content)
    }

    /// Assistant settings described by the `[assistant]` section
    #[must_use]
    pub fn assistant_settings(&self) -> AssistantSettings {
        let model = if self.assistant.model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            self.assistant.model.clone()
        };
        AssistantSettings {
            api_key: Some(self.assistant.api_key.clone()).filter(|k| !k.trim().is_empty()),
            model,
            temperature: self.assistant.temperature,
            language: self.language(),
        }
        .with_env_key()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

fn parse_language(value: &str) -> Result<Language, String> {
    value
        .parse::<Language>()
        .map_err(|_| format!("Invalid language (expected 'ar' or 'en'): '{value}'"))
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  curriculum_file = \"{}\"", self.paths.curriculum_file)?;
        writeln!(f, "  base_courses_file = \"{}\"", self.paths.base_courses_file)?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[catalog]")?;
        writeln!(f, "  language = \"{}\"", self.catalog.language)?;
        writeln!(f, "  match_language = \"{}\"", self.catalog.match_language)?;
        writeln!(f, "  id_base = {}", self.catalog.id_base)?;
        writeln!(f, "  placeholder_content = {}", self.catalog.placeholder_content)?;

        writeln!(f, "\n[assistant]")?;
        writeln!(f, "  api_key = \"{}\"", mask(&self.assistant.api_key))?;
        writeln!(f, "  model = \"{}\"", self.assistant.model)?;
        writeln!(f, "  temperature = {}", self.assistant.temperature)?;

        Ok(())
    }
}
