pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod resolver;

pub use error::ActionError;

use config::{Config, OUTPUT_NAME};
use output::ActionOutput;

/// Run the action once: resolve the addresses for `config` and publish them.
/// Nothing is written to `output` unless resolution succeeds.
pub async fn run(config: &Config, output: &ActionOutput) -> Result<Vec<String>, ActionError> {
    let client = api::ApiClient::new(&config.api_base_url, &config.api_token)?;
    let addresses = resolver::resolve(
        &client,
        &config.tags,
        config.network_type,
        config.ip_version,
    )
    .await?;
    output.set_json_output(OUTPUT_NAME, &addresses)?;
    Ok(addresses)
}
