use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputConfig};
use crate::cli::Cli;
use crate::error::{CliError, Result};
use atlasfold::engine::config::ClientConfigBuilder;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Merges built-in defaults, the TOML file, `--set` overrides and explicit flags,
/// in increasing order of precedence.
///
/// An explicit `--config` path must exist; the platform default path is only
/// read when present.
pub fn build_config(cli: &Cli, default_config_path: Option<&Path>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match (&cli.config, default_config_path) {
        (Some(path), _) => FileConfig::from_file(path)?,
        (None, Some(path)) if path.is_file() => FileConfig::from_file(path)?,
        _ => {
            debug!("No configuration file found, using built-in defaults.");
            FileConfig::default()
        }
    };

    let mut file_config = apply_set_values(file_config, &cli.set_values)?;
    let api = file_config.api.take().unwrap_or_default();
    let output = file_config.output.take().unwrap_or_default();

    let base_url = cli
        .base_url
        .clone()
        .or(api.base_url)
        .unwrap_or(defaults.base_url);
    let timeout_secs = cli
        .timeout
        .or(api.timeout_secs)
        .unwrap_or(defaults.timeout_secs);
    let accept_invalid_certs = cli.insecure
        || api
            .accept_invalid_certs
            .unwrap_or(defaults.accept_invalid_certs);

    let client = ClientConfigBuilder::new()
        .base_url(base_url)
        .timeout(Duration::from_secs(timeout_secs))
        .accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let directory = cli
        .output_dir
        .clone()
        .or(output.directory)
        .unwrap_or_else(|| PathBuf::from(defaults.output_directory));
    let save_structures = !cli.no_save
        && output
            .save_structures
            .unwrap_or(defaults.save_structures);

    Ok(AppConfig {
        client,
        output: OutputConfig {
            directory,
            save_structures,
        },
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "api.base-url" => {
                config.api.get_or_insert_with(Default::default).base_url =
                    Some(value_str.to_string());
            }
            "api.timeout-secs" => {
                config.api.get_or_insert_with(Default::default).timeout_secs =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "api.accept-invalid-certs" => {
                config
                    .api
                    .get_or_insert_with(Default::default)
                    .accept_invalid_certs = Some(parse_value(key, value_str, "boolean")?);
            }
            "output.directory" => {
                config.output.get_or_insert_with(Default::default).directory =
                    Some(PathBuf::from(value_str));
            }
            "output.save-structures" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .save_structures = Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid {} value for {}: {}",
            kind, key, value_str
        ))
    })
}
