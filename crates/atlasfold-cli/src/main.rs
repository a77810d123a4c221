mod cli;
mod commands;
mod config;
mod display;
mod error;
mod export;
mod logging;
mod utils;

use crate::cli::{Cli, Commands, EmbeddingFormat};
use crate::config::file::FileConfig;
use crate::error::{CliError, Result};
use atlasfold::core::models::sequence::ProteinId;
use atlasfold::workflows::dispatch::Request;
use clap::Parser;
use std::io::Write;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 atlasfold v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let Some(command) = &cli.command else {
        warn!("No command given.");
        write_missing_input_warning(&mut std::io::stdout().lock())?;
        return Ok(());
    };

    let default_config_path = FileConfig::default_path();
    let app_config = config::builder::build_config(&cli, default_config_path.as_deref())?;
    debug!("Effective configuration: {:?}", &app_config);

    let result = match command {
        Commands::Predict(args) => {
            info!("Dispatching to 'predict' command.");
            commands::predict::run(args.clone(), &app_config).await
        }
        Commands::Structure(args) => {
            commands::fetch::run(
                Request::FetchStructure {
                    id: ProteinId::new(&args.id),
                },
                &app_config,
            )
            .await
        }
        Commands::Confidence(args) => {
            commands::fetch::run(
                Request::FetchConfidence {
                    id: ProteinId::new(&args.id),
                },
                &app_config,
            )
            .await
        }
        Commands::Sequence(args) => {
            commands::fetch::run(
                Request::FetchSequence {
                    id: ProteinId::new(&args.id),
                },
                &app_config,
            )
            .await
        }
        Commands::Embedding(args) => {
            let id = ProteinId::new(&args.id);
            let request = match args.format {
                EmbeddingFormat::Json => Request::FetchEmbeddingJson { id },
                EmbeddingFormat::Bin => Request::FetchEmbeddingBinary { id },
            };
            commands::fetch::run(request, &app_config).await
        }
    };

    match &result {
        Ok(()) => info!("✅ Command finished."),
        Err(e) => error!("❌ Command failed: {}", e),
    }
    result
}

fn write_missing_input_warning(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "⚠ Enter protein sequence data!")?;
    writeln!(
        out,
        "Hint: run `atlasfold predict --sequence <SEQ>` or see `atlasfold --help`."
    )
}
