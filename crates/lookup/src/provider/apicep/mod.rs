//! ApiCEP provider.
//!
//! # API Endpoint
//!
//! - Lookup: `https://cdn.apicep.com/file/apicep/{cep}.json` with `{cep}` as `XXXXX-XXX`
//!
//! Unknown CEPs come back with `"ok": false` and a `statusText`/`message`
//! describing the problem.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::ProviderError;
use crate::models::{ApiCepAddress, PostalCode, ProviderPayload};
use crate::provider::http::{build_client, get_json, path_segment};
use crate::provider::AddressProvider;

pub const BASE_URL: &str = "https://cdn.apicep.com";
pub const PROVIDER_ID: &str = "APICEP";

/// ApiCEP provider for Brazilian postal codes.
pub struct ApiCepProvider {
    client: Client,
    base_url: String,
}

impl ApiCepProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the provider at another host (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, cep: &str) -> Result<String, ProviderError> {
        let segment = path_segment(PROVIDER_ID, cep)?;
        Ok(format!("{}/file/apicep/{}.json", self.base_url, segment))
    }
}

impl Default for ApiCepProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressProvider for ApiCepProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup(&self, key: &PostalCode) -> Result<ProviderPayload, ProviderError> {
        let cep = self.format_key(key);
        let url = self.url_for(&cep)?;
        let address: ApiCepAddress = get_json(&self.client, PROVIDER_ID, &url).await?;

        if address.is_not_found() {
            debug!(
                "{} rejected {}: {}",
                PROVIDER_ID,
                cep,
                address.message.as_deref().unwrap_or(&address.status_text)
            );
            return Err(ProviderError::NotFound {
                provider: PROVIDER_ID.to_string(),
                cep,
            });
        }

        Ok(ProviderPayload::ApiCep(address))
    }
}
