//! Configuration module.
//!
//! TOML config loading with precedence, named render rules, and key
//! bindings.

pub mod keybindings;
pub mod loader;
pub mod render;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ColumnConfig,
    ConfigError, ConfigFile, FeaturesSection, ResolvedConfig, SortSection, CONFIG_ENV_VAR,
    LOG_ENV_VAR,
};
pub use render::RenderRule;
