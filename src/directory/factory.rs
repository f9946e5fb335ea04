//! Directory factory for creating a service instance from configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};

use super::{http::HttpDirectory, memory::MemoryDirectory, DirectoryService};
use crate::config::DirectoryConfig;

/// Create a directory service from the `[directory]` configuration section.
///
/// # Errors
/// Returns error if:
/// - The directory kind is unknown
/// - The base URL cannot be parsed
/// - `api_token_env` names a variable that is not set
pub fn create_directory(config: &DirectoryConfig) -> Result<Arc<dyn DirectoryService>> {
    match config.kind.as_str() {
        "http" => {
            let api_token = match config.api_token_env.as_deref() {
                Some(var) if !var.is_empty() => Some(
                    std::env::var(var).map_err(|_| anyhow!("Environment variable '{}' is not set", var))?,
                ),
                _ => None,
            };

            let directory = HttpDirectory::new(&config.base_url, Duration::from_secs(config.timeout_secs), api_token)?;
            log::info!("Using HTTP directory at {}", directory.base_url());
            Ok(Arc::new(directory))
        }
        "memory" => {
            log::info!("Using in-memory directory with sample data");
            Ok(Arc::new(MemoryDirectory::with_sample_data()))
        }
        other => Err(anyhow!("Unknown directory kind: {}", other)),
    }
}
