use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How records are written to stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// `Contact name: ..., phones: ...` lines
    #[default]
    Text,
    /// One JSON object per record
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "Interactive in-memory contact book", long_about = None)]
pub struct Cli {
    /// Path to the config file (defaults to the per-user config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for records
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["phonebook"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.output, OutputMode::Text);
        assert!(!cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "phonebook",
            "--config",
            "/tmp/pb.json",
            "-o",
            "json",
            "--no-color",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pb.json")));
        assert_eq!(cli.output, OutputMode::Json);
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_output() {
        assert!(Cli::try_parse_from(["phonebook", "--output", "xml"]).is_err());
    }
}
