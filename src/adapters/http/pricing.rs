use super::join_endpoint;
use crate::core::{ConfigProvider, Price, PriceClient, VehicleId};
use crate::utils::error::{Result, VehicleError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Client for the pricing service (`GET /services/price?vehicleId=`).
#[derive(Debug, Clone)]
pub struct PricingClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl PricingClient {
    pub fn new(client: Client, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_config<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self::new(client, config.pricing_endpoint(), config.price_timeout())
    }
}

#[async_trait]
impl PriceClient for PricingClient {
    async fn get_price(&self, vehicle_id: VehicleId) -> Result<Price> {
        let url = join_endpoint(&self.endpoint, "/services/price");
        tracing::debug!("Requesting price for vehicle {} from: {}", vehicle_id, url);

        let response = self
            .client
            .get(&url)
            .query(&[("vehicleId", vehicle_id)])
            .timeout(self.timeout)
            .send()
            .await?;

        tracing::debug!("Pricing response status: {}", response.status());
        let price: Price = response.error_for_status()?.json().await?;

        match price.vehicle_id {
            Some(priced) if priced != vehicle_id => Err(VehicleError::remote(
                "pricing",
                format!("asked for vehicle {} but got a price for {}", vehicle_id, priced),
            )),
            _ => Ok(price),
        }
    }
}
