use serde::Deserialize;
use serde_json::Value;

use super::types::ProviderId;

/// Address as returned by ViaCEP (`/ws/{cep}/json/`).
///
/// Every field is optional on the wire: a not-found answer is just `{"erro": true}`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViaCepAddress {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub ibge: String,
    pub gia: String,
    pub ddd: String,
    pub siafi: String,
    /// Not-found marker. Older responses send `"true"`, newer ones `true`.
    pub erro: Option<Value>,
}

impl ViaCepAddress {
    /// Whether the body is ViaCEP's embedded "not found" answer.
    pub fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cep", self.cep.clone()),
            ("logradouro", self.logradouro.clone()),
            ("complemento", self.complemento.clone()),
            ("bairro", self.bairro.clone()),
            ("localidade", self.localidade.clone()),
            ("uf", self.uf.clone()),
            ("ibge", self.ibge.clone()),
            ("gia", self.gia.clone()),
            ("ddd", self.ddd.clone()),
            ("siafi", self.siafi.clone()),
        ]
    }
}

/// Address as returned by ApiCEP (`/file/apicep/{cep}.json`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiCepAddress {
    pub code: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub address: String,
    pub status: i64,
    pub ok: bool,
    pub status_text: String,
    /// Present on error bodies only
    pub message: Option<String>,
}

impl ApiCepAddress {
    /// Whether the body is ApiCEP's embedded "not found" answer.
    pub fn is_not_found(&self) -> bool {
        !self.ok
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("code", self.code.clone()),
            ("state", self.state.clone()),
            ("city", self.city.clone()),
            ("district", self.district.clone()),
            ("address", self.address.clone()),
            ("status", self.status.to_string()),
            ("ok", self.ok.to_string()),
            ("statusText", self.status_text.clone()),
        ]
    }
}

/// Successful payload of a single provider.
///
/// Providers do not share a schema, so each keeps its own shape. The race
/// treats the payload as opaque; the accessors here are for callers.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderPayload {
    ViaCep(ViaCepAddress),
    ApiCep(ApiCepAddress),
}

impl ProviderPayload {
    /// Identifier of the provider that produced this payload.
    pub fn provider(&self) -> ProviderId {
        match self {
            Self::ViaCep(_) => crate::provider::viacep::PROVIDER_ID,
            Self::ApiCep(_) => crate::provider::apicep::PROVIDER_ID,
        }
    }

    /// Human-readable provider name, e.g. `ViaCEP`.
    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::ViaCep(_) => "ViaCEP",
            Self::ApiCep(_) => "ApiCEP",
        }
    }

    pub fn city(&self) -> &str {
        match self {
            Self::ViaCep(address) => &address.localidade,
            Self::ApiCep(address) => &address.city,
        }
    }

    /// Two-letter state code (UF).
    pub fn state(&self) -> &str {
        match self {
            Self::ViaCep(address) => &address.uf,
            Self::ApiCep(address) => &address.state,
        }
    }

    /// Every field of the payload as `(label, value)`, in wire order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ViaCep(address) => address.fields(),
            Self::ApiCep(address) => address.fields(),
        }
    }
}
