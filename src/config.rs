use std::env;
use std::path::Path;

use crate::error::ActionError;
use crate::models::{AddressFamily, IpVersion, TagPredicate};

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "https://api.digitalocean.com";
pub const DEFAULT_NETWORK_TYPE: AddressFamily = AddressFamily::Public;
pub const DEFAULT_IP_VERSION: IpVersion = IpVersion::V4;

/// Name of the step output holding the resolved addresses
pub const OUTPUT_NAME: &str = "server_ips";

// Action input names
pub const INPUT_API_KEY: &str = "digital-ocean-key";
pub const INPUT_TAG: &str = "tag";
pub const INPUT_TAGS: &str = "tags";
pub const INPUT_NETWORK_TYPE: &str = "network-type";
pub const INPUT_IP_VERSION: &str = "ip-version";
pub const INPUT_API_URL: &str = "api-url";

/// Token variable honoured when the action input is not set (local runs)
pub const TOKEN_ENV_FALLBACK: &str = "DIGITALOCEAN_TOKEN";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Environment variable the runner uses for an action input: `INPUT_` followed by
/// the upper-cased name with spaces replaced by underscores.
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Read an action input from the environment. Blank values read as `None`.
pub fn get_input(name: &str) -> Option<String> {
    env::var(input_env_name(name))
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Action input lookup used by [`Config::from_env`]; the API key falls back
/// to `DIGITALOCEAN_TOKEN`.
pub fn env_lookup(name: &str) -> Option<String> {
    get_input(name).or_else(|| {
        if name == INPUT_API_KEY {
            env::var(TOKEN_ENV_FALLBACK).ok()
        } else {
            None
        }
    })
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Validated action inputs
#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub api_base_url: String,
    pub tags: TagPredicate,
    pub network_type: AddressFamily,
    pub ip_version: IpVersion,
}

impl Config {
    pub fn from_env() -> Result<Self, ActionError> {
        Self::from_lookup(env_lookup)
    }

    /// Build the configuration from any input source. `lookup` receives the
    /// input name (e.g. `"tag"`) and returns its value, if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ActionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_token = read(INPUT_API_KEY).ok_or_else(|| {
            ActionError::Configuration(format!("Input required and not supplied: {}", INPUT_API_KEY))
        })?;

        let tags = match (read(INPUT_TAG), read(INPUT_TAGS)) {
            (Some(tag), None) => TagPredicate::Single(tag),
            (None, Some(list)) => TagPredicate::parse_list(&list).ok_or_else(|| {
                ActionError::Configuration(format!("Input '{}' does not contain any tag", INPUT_TAGS))
            })?,
            (Some(_), Some(_)) => {
                return Err(ActionError::Configuration(format!(
                    "Inputs '{}' and '{}' are mutually exclusive",
                    INPUT_TAG, INPUT_TAGS
                )))
            }
            (None, None) => {
                return Err(ActionError::Configuration(format!(
                    "Input required and not supplied: {} (or {})",
                    INPUT_TAG, INPUT_TAGS
                )))
            }
        };

        let network_type = match read(INPUT_NETWORK_TYPE) {
            Some(v) => v.parse::<AddressFamily>().map_err(ActionError::Configuration)?,
            None => DEFAULT_NETWORK_TYPE,
        };

        let ip_version = match read(INPUT_IP_VERSION) {
            Some(v) => v.parse::<IpVersion>().map_err(ActionError::Configuration)?,
            None => DEFAULT_IP_VERSION,
        };

        let api_base_url = sanitize_base_url(&read(INPUT_API_URL).unwrap_or_default());

        tracing::debug!(
            api_base_url = %api_base_url,
            tags = %tags,
            network_type = %network_type,
            ip_version = %ip_version,
            "Configuration loaded"
        );

        Ok(Config {
            api_token,
            api_base_url,
            tags,
            network_type,
            ip_version,
        })
    }
}
