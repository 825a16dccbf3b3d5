use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use breeze_config::source::ConfigFormat;

/// Breeze: validate and inspect a style-build configuration.
#[derive(Parser, Debug)]
#[command(name = "breeze", version, about)]
pub struct Cli {
    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate the configuration.
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Apply production rules (content must select files).
        #[arg(long)]
        production: bool,
    },

    /// Print the normalized configuration.
    Print {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print the resolved theme tokens as JSON.
    Theme {
        #[command(flatten)]
        source: SourceArgs,

        /// Only print this category (e.g. `spacing`).
        #[arg(long)]
        category: Option<String>,
    },

    /// Write a default config file into the project root.
    Init {
        /// Project root directory.
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Config file path override.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project root searched for a config file.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
    Yaml,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::Toml => ConfigFormat::Toml,
            OutputFormat::Yaml => ConfigFormat::Yaml,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_flags() {
        let cli = Cli::try_parse_from([
            "breeze",
            "--log-level",
            "debug",
            "check",
            "--config",
            "site/breeze.config.toml",
            "--production",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Check { source, production } => {
                assert!(production);
                assert_eq!(source.config, Some(PathBuf::from("site/breeze.config.toml")));
                assert_eq!(source.root, PathBuf::from("."));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn print_defaults_to_json() {
        let cli = Cli::try_parse_from(["breeze", "print"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Print {
                format: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["breeze", "print", "--format", "xml"]).is_err());
    }
}
