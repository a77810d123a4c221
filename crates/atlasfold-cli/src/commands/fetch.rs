use super::build_dispatcher;
use crate::config::models::AppConfig;
use crate::display::TerminalDisplay;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use atlasfold::workflows::dispatch::Request;
use tracing::info;

/// Runs one of the lookup actions keyed by a protein identifier.
pub async fn run(request: Request, config: &AppConfig) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let dispatcher = build_dispatcher(config, &progress_handler)?;
    let mut display = TerminalDisplay::stdio(config.output.clone()).with_embedding_summary(
        matches!(request, Request::FetchEmbeddingJson { .. }),
    );

    info!("Running '{}'.", request.action());
    dispatcher.dispatch(&request, &mut display).await
}
