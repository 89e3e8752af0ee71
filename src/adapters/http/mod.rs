pub mod maps;
pub mod pricing;

pub use maps::MapsClient;
pub use pricing::PricingClient;

use crate::utils::error::Result;
use reqwest::Client;

/// One connection pool shared by both remote clients.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("vehicles-api/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

pub(crate) fn join_endpoint(endpoint: &str, path: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), path)
}
