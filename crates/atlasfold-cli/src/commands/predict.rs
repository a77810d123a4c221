use super::build_dispatcher;
use crate::cli::PredictArgs;
use crate::config::models::AppConfig;
use crate::display::TerminalDisplay;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use atlasfold::core::models::sequence::Sequence;
use atlasfold::workflows::dispatch::Request;
use std::path::Path;
use tracing::info;

pub async fn run(args: PredictArgs, config: &AppConfig) -> Result<()> {
    let sequence = resolve_sequence(&args)?;
    info!("Predicting structure for a sequence of {} residues.", sequence.len());
    println!("Submitting sequence to ESMFold...");

    let progress_handler = CliProgressHandler::new();
    let dispatcher = build_dispatcher(config, &progress_handler)?;
    let mut display =
        TerminalDisplay::stdio(config.output.clone()).with_residue_table(args.residue_table);

    dispatcher
        .dispatch(&Request::Predict { sequence }, &mut display)
        .await
}

/// `--sequence`, then `--sequence-file`, then the built-in sample.
fn resolve_sequence(args: &PredictArgs) -> Result<Sequence> {
    if let Some(sequence) = &args.sequence {
        return Ok(Sequence::new(sequence));
    }
    if let Some(path) = &args.sequence_file {
        return read_sequence_file(path);
    }
    info!("No sequence given, using the sample sequence.");
    Ok(Sequence::default())
}

/// Reads plain text or FASTA; header (`>`) and comment (`;`) lines are skipped
/// and the remaining lines are joined.
fn read_sequence_file(path: &Path) -> Result<Sequence> {
    let content = std::fs::read_to_string(path)?;
    let residues: String = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('>') && !line.starts_with(';'))
        .collect();

    if residues.is_empty() {
        return Err(CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::anyhow!("no sequence data found"),
        });
    }
    Ok(Sequence::new(residues))
}
