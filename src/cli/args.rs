//! CLI argument definitions for `edu-catalog`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use edu_catalog::config::ConfigOverrides;
use edu_catalog::core::catalog::CatalogFilter;
use edu_catalog::core::models::Language;
use edu_catalog::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Level::from(*self).as_str())
    }
}

/// Output format of the `catalog` command
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CatalogFormatArg {
    /// Aligned text table on stdout
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

/// Report format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ReportFormatArg {
    /// Markdown tables
    #[value(alias = "markdown")]
    Md,
    /// HTML page
    #[value(alias = "htm")]
    Html,
}

impl std::fmt::Display for ReportFormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Md => "md",
            Self::Html => "html",
        })
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog.id_base`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Which curriculum to read and which part of it to derive
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Curriculum files (.json or .toml); defaults to config `curriculum_file`
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Only derive courses of the specialization with this exact name
    #[arg(short, long, value_name = "NAME")]
    pub specialization: Option<String>,

    /// Hand-authored course list merged ahead of derived courses; defaults to
    /// config `base_courses_file`
    #[arg(long, value_name = "FILE")]
    pub base: Option<PathBuf>,

    /// Skip merging the base course list
    #[arg(long, conflicts_with = "base")]
    pub no_base: bool,

    /// Attach placeholder lessons to derived courses
    #[arg(long)]
    pub placeholder_content: bool,
}

/// Search and facet filters applied after derivation
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive search over title and code
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Keep only this program type ("all" disables)
    #[arg(long, value_name = "TYPE")]
    pub program: Option<String>,

    /// Keep only this level label ("all" disables)
    #[arg(long, value_name = "LABEL")]
    pub level: Option<String>,

    /// Keep only this semester label ("all" disables)
    #[arg(long, value_name = "LABEL")]
    pub semester: Option<String>,

    /// Keep only this specialization label ("all" disables)
    #[arg(id = "filter_specialization", long = "filter-specialization", value_name = "NAME")]
    pub specialization: Option<String>,
}

impl FilterArgs {
    /// Build the catalog filter
    pub fn to_filter(&self) -> CatalogFilter {
        CatalogFilter {
            search: self.search.clone(),
            specialization: self.specialization.clone(),
            program_type: self.program.clone(),
            level: self.level.clone(),
            semester: self.semester.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Derive, filter and export a course catalog.
    ///
    /// Prints a table by default. CSV and JSON go to `-o FILE`, to `-o -` for
    /// stdout, or to the configured exports directory.
    Catalog {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format; inferred from the `-o` extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<CatalogFormatArg>,

        /// Output file path (`-` for stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the distinct facet values of a catalog with course counts.
    Facets {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Generate a catalog report.
    Report {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_enum, default_value_t = ReportFormatArg::Html)]
        format: ReportFormatArg,

        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "educatalog",
    about = "Curriculum catalog command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config curriculum file
    #[arg(long = "curriculum", value_name = "FILE")]
    pub curriculum: Option<PathBuf>,

    /// Override config label language (ar|en)
    #[arg(long, value_name = "LANG")]
    pub language: Option<Language>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--exports-dir`) take precedence over long-form
    /// flags (e.g., `--config-exports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            curriculum_file: path_string(self.curriculum.as_ref()),
            exports_dir: path_string(self.exports_dir.as_ref().or(self.config_exports_dir.as_ref())),
            reports_dir: path_string(self.reports_dir.as_ref().or(self.config_reports_dir.as_ref())),
            language: self.language.map(|lang| lang.code().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("educatalog").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = parse(&["config"]).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.curriculum_file.is_none());
        assert!(overrides.exports_dir.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.language.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = parse(&[
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "true",
            "--curriculum",
            "data/tree.json",
            "--language",
            "en",
            "config",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.curriculum_file, Some("data/tree.json".to_string()));
        assert_eq!(overrides.language, Some("en".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = parse(&[
            "--config-exports-dir",
            "/long/exports",
            "--exports-dir",
            "/short/exports",
            "--config-reports-dir",
            "/long/reports",
            "--reports-dir",
            "/short/reports",
            "config",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.exports_dir, Some("/short/exports".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short/reports".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let cli = parse(&["--config-exports-dir", "/long/exports", "config"]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.exports_dir, Some("/long/exports".to_string()));
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_catalog_command_flags() {
        let cli = parse(&[
            "catalog",
            "a.json",
            "b.toml",
            "--specialization",
            "هندسة مدنية",
            "--search",
            "intro",
            "--level",
            "all",
            "--format",
            "json",
            "-o",
            "-",
        ]);

        match cli.command {
            Command::Catalog {
                source,
                filter,
                format,
                output,
            } => {
                assert_eq!(source.files.len(), 2);
                assert_eq!(source.specialization.as_deref(), Some("هندسة مدنية"));
                assert_eq!(format, Some(CatalogFormatArg::Json));
                assert_eq!(output, Some(PathBuf::from("-")));
                let f = filter.to_filter();
                assert_eq!(f.search.as_deref(), Some("intro"));
                assert_eq!(f.level.as_deref(), Some("all"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_report_format_aliases() {
        let cli = parse(&["report", "--format", "markdown"]);
        assert!(matches!(
            cli.command,
            Command::Report {
                format: ReportFormatArg::Md,
                ..
            }
        ));
    }

    #[test]
    fn test_base_conflicts_with_no_base() {
        let result = Cli::try_parse_from(["educatalog", "facets", "--base", "x.json", "--no-base"]);
        assert!(result.is_err());
    }
}
