//! ViaCEP provider.
//!
//! # API Endpoint
//!
//! - Lookup: `https://viacep.com.br/ws/{cep}/json/` with `{cep}` as 8 digits
//!
//! An invalid CEP answers HTTP 400. A well-formed but unknown CEP answers
//! HTTP 200 with `{"erro": true}`.

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::ProviderError;
use crate::models::{PostalCode, ProviderPayload, ViaCepAddress};
use crate::provider::http::{build_client, get_json, path_segment};
use crate::provider::AddressProvider;

pub const BASE_URL: &str = "https://viacep.com.br";
pub const PROVIDER_ID: &str = "VIACEP";

/// ViaCEP provider for Brazilian postal codes.
///
/// # Example
///
/// ```ignore
/// let provider = ViaCepProvider::new();
/// let payload = provider.lookup(&PostalCode::parse("01310-100")?).await?;
/// ```
pub struct ViaCepProvider {
    client: Client,
    base_url: String,
}

impl ViaCepProvider {
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
        Ok(format!("{}/ws/{}/json/", self.base_url, segment))
    }
}

impl Default for ViaCepProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressProvider for ViaCepProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn format_key(&self, key: &PostalCode) -> String {
        key.digits()
    }

    async fn lookup(&self, key: &PostalCode) -> Result<ProviderPayload, ProviderError> {
        let cep = self.format_key(key);
        let url = self.url_for(&cep)?;
        let address: ViaCepAddress = get_json(&self.client, PROVIDER_ID, &url).await?;

        if address.is_not_found() {
            return Err(ProviderError::NotFound {
                provider: PROVIDER_ID.to_string(),
                cep,
            });
        }

        Ok(ProviderPayload::ViaCep(address))
    }
}
