//! Turns a tag filter into the list of droplet addresses published by the action.

use crate::api::{list_droplets, ApiClient};
use crate::error::ActionError;
use crate::models::{AddressFamily, Droplet, IpVersion, TagPredicate};

/// Droplets carrying a tag accepted by `tags`, in inventory order.
pub fn matching_droplets<'a>(droplets: &'a [Droplet], tags: &TagPredicate) -> Vec<&'a Droplet> {
    droplets.iter().filter(|d| tags.matches(d.tags.as_slice())).collect()
}

/// Droplets from `droplets` that expose no `family` address in their `version` list.
pub fn without_address<'a>(
    droplets: &[&'a Droplet],
    family: AddressFamily,
    version: IpVersion,
) -> Vec<&'a Droplet> {
    droplets
        .iter()
        .copied()
        .filter(|d| d.address(family, version).is_none())
        .collect()
}

/// Select one address per matching droplet.
///
/// Each droplet contributes the first attachment of `family` in its `version`
/// network list. A matching droplet without such an attachment fails the whole
/// selection so callers never receive a shortened list.
pub fn select_addresses(
    droplets: &[Droplet],
    tags: &TagPredicate,
    family: AddressFamily,
    version: IpVersion,
) -> Result<Vec<String>, ActionError> {
    matching_droplets(droplets, tags)
        .into_iter()
        .map(|d| {
            d.address(family, version)
                .map(str::to_string)
                .ok_or_else(|| ActionError::MissingAddress {
                    id: d.id,
                    name: d.name.clone(),
                    family,
                    version,
                })
        })
        .collect()
}

/// Fetch the inventory and resolve the addresses of droplets matching `tags`.
pub async fn resolve(
    client: &ApiClient,
    tags: &TagPredicate,
    family: AddressFamily,
    version: IpVersion,
) -> Result<Vec<String>, ActionError> {
    println!("Fetching droplets for tag {}", tags);
    let droplets = list_droplets(client).await?;

    let matched = matching_droplets(&droplets, tags).len();
    println!("Found {} matching droplets", matched);
    tracing::info!(matched, total = droplets.len(), "Filtered droplets by tag");

    let addresses = select_addresses(&droplets, tags, family, version)?;
    tracing::debug!(?addresses, "Resolved droplet addresses");
    Ok(addresses)
}
