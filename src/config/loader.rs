//! Configuration file loading with precedence handling.

use super::render::RenderRule;
use crate::model::{AppError, ColumnDescriptor, ColumnSet, Record};
use crate::query::FeatureFlags;
use crate::state::{InternalQueryState, QueryState, SortDirection, SortSpec};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TABVIEW_CONFIG";

/// Environment variable overriding the log file path.
pub const LOG_ENV_VAR: &str = "TABVIEW_LOG";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A column names an unknown render rule or gives it a bad argument.
    #[error("Invalid render rule {rule:?} for column {column}")]
    InvalidRenderRule {
        /// Column key.
        column: String,
        /// Rule as written in the file.
        rule: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tabview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Initial search term.
    #[serde(default)]
    pub search: Option<String>,

    /// Feature switches.
    #[serde(default)]
    pub features: Option<FeaturesSection>,

    /// Initial sort.
    #[serde(default)]
    pub sort: Option<SortSection>,

    /// Initial column filters, keyed by column.
    #[serde(default)]
    pub filters: Option<BTreeMap<String, String>>,

    /// Column layout. Inferred from the records when absent.
    #[serde(default)]
    pub columns: Option<Vec<ColumnConfig>>,
}

/// `[features]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FeaturesSection {
    #[serde(default)]
    pub internal_sort: Option<bool>,
    #[serde(default)]
    pub filtering: Option<bool>,
    #[serde(default)]
    pub column_filter: Option<bool>,
    #[serde(default)]
    pub searchable: Option<bool>,
}

/// `[sort]` section.
///
/// ```toml
/// [sort]
/// column = "score"
/// direction = "descending"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SortSection {
    pub column: String,
    #[serde(default)]
    pub direction: SortDirection,
}

/// One `[[columns]]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    /// Record field the column reads.
    pub key: String,

    /// Header text (defaults to the key).
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default = "default_true")]
    pub sortable: bool,

    #[serde(default = "default_true")]
    pub filterable: bool,

    /// Named render rule, see [`RenderRule::parse`].
    #[serde(default)]
    pub render: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ColumnConfig {
    /// Build the descriptor, resolving the render rule by name.
    pub fn to_descriptor(&self) -> Result<ColumnDescriptor, ConfigError> {
        let mut column = ColumnDescriptor::new(self.key.clone())
            .sortable(self.sortable)
            .filterable(self.filterable);

        if let Some(label) = &self.label {
            column = column.label(label.clone());
        }

        if let Some(rule) = &self.render {
            let parsed =
                RenderRule::parse(rule).ok_or_else(|| ConfigError::InvalidRenderRule {
                    column: self.key.clone(),
                    rule: rule.clone(),
                })?;
            column = column.render_fn(parsed.into_render_fn());
        }

        Ok(column)
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Feature switches for the pipeline.
    pub flags: FeatureFlags,
    /// Initial search term.
    pub search: String,
    /// Initial sort, if any.
    pub sort: Option<SortSpec>,
    /// Initial column filters.
    pub filters: BTreeMap<String, String>,
    /// Configured columns; empty means infer from records.
    pub columns: Vec<ColumnConfig>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_path(),
            flags: FeatureFlags::default(),
            search: String::new(),
            sort: None,
            filters: BTreeMap::new(),
            columns: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    /// Build the column set, inferring it from `records` when none is configured.
    ///
    /// # Errors
    ///
    /// Unknown render rules and duplicate or empty keys.
    pub fn build_columns(&self, records: &[Record]) -> Result<ColumnSet, AppError> {
        if self.columns.is_empty() {
            return Ok(ColumnSet::infer(records));
        }

        let descriptors = self
            .columns
            .iter()
            .map(ColumnConfig::to_descriptor)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ColumnSet::new(descriptors)?)
    }

    /// Engine-owned query state seeded with the configured search, filters and sort.
    pub fn initial_state(&self) -> InternalQueryState {
        let mut state = match &self.sort {
            Some(sort) => InternalQueryState::new().with_sort(sort.clone()),
            None => InternalQueryState::new(),
        };
        state.set_search_term(&self.search);
        for (column, value) in &self.filters {
            state.set_column_filter(column, value);
        }
        state
    }
}

/// CLI flags that can override resolved configuration.
///
/// `None` and `false` mean "not given on the command line".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    pub sort: Option<String>,
    pub descending: bool,
    pub no_search: bool,
    pub no_sort: bool,
    pub no_column_filter: bool,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tabview/tabview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tabview").join("tabview.log")
    } else {
        PathBuf::from("tabview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tabview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tabview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TABVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/tabview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TABVIEW_LOG`: Override log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(LOG_ENV_VAR) {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let features = config.features.unwrap_or_default();
    let flags = FeatureFlags {
        enable_internal_sort: features
            .internal_sort
            .unwrap_or(defaults.flags.enable_internal_sort),
        enable_filtering: features
            .filtering
            .unwrap_or(defaults.flags.enable_filtering),
        enable_column_filter: features
            .column_filter
            .unwrap_or(defaults.flags.enable_column_filter),
        searchable: features.searchable.unwrap_or(defaults.flags.searchable),
    };

    ResolvedConfig {
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        flags,
        search: config.search.unwrap_or(defaults.search),
        sort: config
            .sort
            .map(|section| SortSpec::new(section.column, section.direction))
            .or(defaults.sort),
        filters: config.filters.unwrap_or(defaults.filters),
        columns: config.columns.unwrap_or(defaults.columns),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// `--descending` without `--sort` flips the configured sort to descending.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(search) = cli.search {
        config.search = search;
    }

    for (column, value) in cli.filters {
        config.filters.insert(column, value);
    }

    let direction = if cli.descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    if let Some(column) = cli.sort {
        config.sort = Some(SortSpec::new(column, direction));
    } else if let Some(sort) = config.sort.as_mut() {
        if cli.descending {
            sort.direction = SortDirection::Descending;
        }
    }

    if cli.no_search {
        config.flags.searchable = false;
    }
    if cli.no_sort {
        config.flags.enable_internal_sort = false;
    }
    if cli.no_column_filter {
        config.flags.enable_column_filter = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
