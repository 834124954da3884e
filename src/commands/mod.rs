//! # CLI Commands
//!
//! One module per subcommand. Every command follows the same shape: an args
//! struct filled in by `main`, an `execute` function returning the process
//! exit code, and API failures rendered through [`crate::errors`].

pub mod admin;
pub mod appointments;
pub mod audit;
pub mod config;
pub mod holidays;
pub mod login;
pub mod logout;
pub mod register;
pub mod status;
pub mod vaccines;
pub mod whoami;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::config::Config;
use crate::credentials::FileCredentialStore;

/// Build the API client from the loaded configuration and the default
/// file-backed credential store.
pub(crate) fn build_client() -> Result<ApiClient> {
    let config = Config::load().context("Failed to load configuration")?;
    let store =
        FileCredentialStore::default_location().context("Failed to locate credential store")?;
    Ok(ApiClient::new(config.base_url(), Arc::new(store)))
}
