use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "atlasfold - Predict protein structures and fetch precomputed data from the ESM Metagenomic Atlas.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the platform configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S api.timeout-secs=30
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,

    /// Override the API base URL.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the request timeout in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable TLS certificate verification. Only use against hosts you trust.
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Directory where structure files are saved.
    #[arg(short, long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not save structure files to disk.
    #[arg(long, global = true)]
    pub no_save: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the structure of a sequence with ESMFold and report its mean plDDT.
    Predict(PredictArgs),
    /// Fetch the predicted structure of an MGnify protein.
    Structure(IdArgs),
    /// Fetch the confidence prediction of an MGnify protein.
    Confidence(IdArgs),
    /// Fetch the sequence of an MGnify protein.
    Sequence(IdArgs),
    /// Fetch the ESM2 embedding of an MGnify protein.
    Embedding(EmbeddingArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Amino-acid sequence in one-letter codes. Defaults to a sample sequence.
    #[arg(short, long, value_name = "SEQ", conflicts_with = "sequence_file")]
    pub sequence: Option<String>,

    /// Read the sequence from a file (plain text or FASTA).
    #[arg(short = 'f', long, value_name = "PATH")]
    pub sequence_file: Option<PathBuf>,

    /// Write per-residue plDDT values to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub residue_table: Option<PathBuf>,
}

/// A protein lookup by identifier.
#[derive(Args, Debug, Clone)]
pub struct IdArgs {
    /// MGnify protein ID (starts with MGYP).
    #[arg(required = true, value_name = "ID")]
    pub id: String,
}

/// Arguments for the `embedding` subcommand.
#[derive(Args, Debug, Clone)]
pub struct EmbeddingArgs {
    /// MGnify protein ID (starts with MGYP).
    #[arg(required = true, value_name = "ID")]
    pub id: String,

    /// Payload encoding to request.
    #[arg(long, value_enum, default_value_t = EmbeddingFormat::Json)]
    pub format: EmbeddingFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingFormat {
    /// JSON document, displayed as-is.
    Json,
    /// Raw float16 array.
    Bin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_command_is_accepted() {
        let cli = Cli::try_parse_from(["atlasfold"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "atlasfold",
            "sequence",
            "MGYP000000000001",
            "-vv",
            "--no-save",
            "-S",
            "api.timeout-secs=5",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_save);
        assert_eq!(cli.set_values, vec!["api.timeout-secs=5".to_string()]);
        assert!(matches!(cli.command, Some(Commands::Sequence(IdArgs { ref id })) if id == "MGYP000000000001"));
    }

    #[test]
    fn embedding_format_defaults_to_json() {
        let cli = Cli::try_parse_from(["atlasfold", "embedding", "MGYP1"]).unwrap();
        let Some(Commands::Embedding(args)) = cli.command else {
            panic!("expected embedding command");
        };
        assert_eq!(args.format, EmbeddingFormat::Json);

        let cli = Cli::try_parse_from(["atlasfold", "embedding", "MGYP1", "--format", "bin"]).unwrap();
        let Some(Commands::Embedding(args)) = cli.command else {
            panic!("expected embedding command");
        };
        assert_eq!(args.format, EmbeddingFormat::Bin);
    }

    #[test]
    fn sequence_and_sequence_file_conflict() {
        let result = Cli::try_parse_from([
            "atlasfold",
            "predict",
            "--sequence",
            "AAAA",
            "--sequence-file",
            "seq.fasta",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["atlasfold", "-q", "-v", "predict"]).is_err());
    }

    #[test]
    fn lookup_commands_require_an_id() {
        assert!(Cli::try_parse_from(["atlasfold", "structure"]).is_err());
    }
}
