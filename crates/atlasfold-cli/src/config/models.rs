use atlasfold::engine::config::ClientConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub save_structures: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub output: OutputConfig,
}
