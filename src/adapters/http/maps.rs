use super::join_endpoint;
use crate::core::{Address, AddressClient, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Client for the maps service (`GET /maps?lat=&lon=`).
#[derive(Debug, Clone)]
pub struct MapsClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl MapsClient {
    pub fn new(client: Client, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_config<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self::new(client, config.maps_endpoint(), config.address_timeout())
    }
}

#[async_trait]
impl AddressClient for MapsClient {
    async fn get_address(&self, lat: f64, lon: f64) -> Result<Address> {
        let url = join_endpoint(&self.endpoint, "/maps");
        tracing::debug!("Requesting address for ({}, {}) from: {}", lat, lon, url);

        let response = self
            .client
            .get(&url)
            .query(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            .timeout(self.timeout)
            .send()
            .await?;

        tracing::debug!("Maps response status: {}", response.status());
        let address = response.error_for_status()?.json().await?;
        Ok(address)
    }
}
