use serde::Deserialize;

use super::client::ApiClient;
use crate::error::ActionError;
use crate::models::Droplet;

/// Page size requested from the droplets endpoint (the API maximum)
pub const DROPLETS_PER_PAGE: u32 = 200;

#[derive(Debug, Deserialize)]
struct DropletsPage {
    #[serde(default)]
    droplets: Vec<Droplet>,
    #[serde(default)]
    links: Links,
}

#[derive(Debug, Default, Deserialize)]
struct Links {
    #[serde(default)]
    pages: Pages,
}

#[derive(Debug, Default, Deserialize)]
struct Pages {
    #[serde(default)]
    next: Option<String>,
}

/// List every droplet on the account, following pagination until the API
/// stops advertising a next page. Droplets keep the order the API returns.
pub async fn list_droplets(client: &ApiClient) -> Result<Vec<Droplet>, ActionError> {
    let mut all = Vec::new();
    let mut page: u32 = 1;

    loop {
        let params = [
            ("page", page.to_string()),
            ("per_page", DROPLETS_PER_PAGE.to_string()),
        ];
        let body: DropletsPage = client.get_json("/v2/droplets", &params).await?;
        tracing::debug!(page, count = body.droplets.len(), "Fetched droplets page");

        let received = body.droplets.len();
        all.extend(body.droplets);

        if body.links.pages.next.is_none() || received == 0 {
            break;
        }
        page += 1;
    }

    tracing::info!(total = all.len(), "Fetched droplet inventory");
    Ok(all)
}
