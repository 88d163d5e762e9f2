use serde::Deserialize;

use super::{AddressFamily, IpVersion};

/// A droplet as returned by `GET /v2/droplets`. Only the fields the resolver reads are kept.
#[derive(Clone, Debug, Deserialize)]
pub struct Droplet {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub networks: Networks,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkAttachment>,
    #[serde(default)]
    pub v6: Vec<NetworkAttachment>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NetworkAttachment {
    pub ip_address: String,
    /// "public" or "private"
    #[serde(rename = "type")]
    pub kind: String,
}

impl Droplet {
    /// First attachment of `family` in the `version` list, in listing order.
    pub fn address(&self, family: AddressFamily, version: IpVersion) -> Option<&str> {
        let attachments = match version {
            IpVersion::V4 => &self.networks.v4,
            IpVersion::V6 => &self.networks.v6,
        };
        attachments
            .iter()
            .find(|a| a.kind == family.as_str())
            .map(|a| a.ip_address.as_str())
    }
}
