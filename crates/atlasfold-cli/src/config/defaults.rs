use atlasfold::engine::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub struct DefaultsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub accept_invalid_certs: bool,
    pub output_directory: String,
    pub save_structures: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            accept_invalid_certs: false,
            output_directory: ".".to_string(),
            save_structures: true,
        }
    }
}
