//! tabview - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tabview::config::CliOverrides;
use tabview::DataTable;
use tracing::info;

/// tabview - search, filter and sort JSON records in the terminal
#[derive(Parser, Debug)]
#[command(name = "tabview")]
#[command(version)]
#[command(about = "Interactive table viewer for JSON and JSON Lines records")]
pub struct Args {
    /// Path to a JSON array or JSON Lines file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column filter as KEY=VALUE (repeatable)
    #[arg(short = 'F', long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Sort by column key
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(short, long)]
    pub descending: bool,

    /// Print the table to stdout instead of starting the TUI
    #[arg(long)]
    pub plain: bool,

    /// Disable global search
    #[arg(long)]
    pub no_search: bool,

    /// Disable local sorting
    #[arg(long)]
    pub no_sort: bool,

    /// Disable per-column filters
    #[arg(long)]
    pub no_column_filter: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            search: self.search.clone(),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            descending: self.descending,
            no_search: self.no_search,
            no_sort: self.no_sort,
            no_column_filter: self.no_column_filter,
        }
    }
}

/// Parse a `KEY=VALUE` filter argument.
fn parse_filter(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {arg:?}")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tabview::config::load_config_with_precedence(args.config.clone())?;
        let merged = tabview::config::merge_config(config_file);
        let with_env = tabview::config::apply_env_overrides(merged);
        tabview::config::apply_cli_overrides(with_env, args.overrides())
    };

    tabview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let loaded = tabview::source::load_records(args.file.clone())?;
    if loaded.skipped > 0 {
        eprintln!("tabview: skipped {} malformed line(s)", loaded.skipped);
    }

    let columns = config.build_columns(&loaded.records)?;
    let table = DataTable::new(
        &columns,
        &loaded.records,
        config.initial_state(),
        config.flags,
    )
    .on_row_click(|record| info!(fields = record.len(), "Row activated"));

    if args.plain {
        println!(
            "{}",
            tabview::view::format_table(&table.headers(), table.view())
        );
        return Ok(());
    }

    tabview::view::run_with_table(table)?;

    Ok(())
}
