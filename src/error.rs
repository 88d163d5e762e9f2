/// Error types for the droplet resolver
use thiserror::Error;

use crate::models::{AddressFamily, IpVersion};

/// Errors that end an action run
#[derive(Debug, Error)]
pub enum ActionError {
    /// A required input is missing or an input value is not recognised
    #[error("{0}")]
    Configuration(String),

    /// The inventory request failed (transport, HTTP status or payload)
    #[error("{0}")]
    Provider(String),

    /// A droplet matched the tag filter but exposes no address of the requested kind
    #[error("Droplet {name} ({id}) has no {family} {version} address")]
    MissingAddress {
        id: u64,
        name: String,
        family: AddressFamily,
        version: IpVersion,
    },

    /// The step result could not be published
    #[error("Unable to write output: {0}")]
    Output(String),
}
