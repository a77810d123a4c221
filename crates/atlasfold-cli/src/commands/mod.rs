pub mod fetch;
pub mod predict;

use crate::config::models::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use atlasfold::engine::client::HttpTransport;
use atlasfold::engine::endpoints::Endpoints;
use atlasfold::engine::progress::ProgressReporter;
use atlasfold::workflows::dispatch::Dispatcher;
use tracing::debug;

pub fn build_dispatcher(
    config: &AppConfig,
    progress_handler: &CliProgressHandler,
) -> Result<Dispatcher<'static, HttpTransport>> {
    let transport = HttpTransport::new(&config.client)?;
    let endpoints = Endpoints::new(&config.client.base_url);
    debug!("Dispatching against {}", endpoints.base_url());

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    Ok(Dispatcher::new(transport, endpoints).with_reporter(reporter))
}
