//! IP-location seam and the ip-api.com implementation.

use async_trait::async_trait;
use serde::Deserialize;

use super::types::IpGeo;
use crate::config::{IP_LOOKUP_TIMEOUT, UNKNOWN};
use crate::error_handling::IpLookupError;

/// Locates the public IP of the machine making the request.
#[async_trait]
pub trait IpLocator: Send + Sync {
    async fn locate(&self) -> Result<IpGeo, IpLookupError>;
}

/// ip-api.com JSON endpoint. Keyless; locates the caller's IP.
#[derive(Debug, Clone)]
pub struct IpApiLocator {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    city: Option<String>,
    region_name: Option<String>,
    country: Option<String>,
}

impl IpApiLocator {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

fn or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[async_trait]
impl IpLocator for IpApiLocator {
    async fn locate(&self) -> Result<IpGeo, IpLookupError> {
        let body: IpApiResponse = self
            .client
            .get(&self.url)
            .timeout(IP_LOOKUP_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if body.status != "success" {
            return Err(IpLookupError::Failed);
        }

        Ok(IpGeo {
            city: or_unknown(body.city),
            region: or_unknown(body.region_name),
            country: or_unknown(body.country),
        })
    }
}
