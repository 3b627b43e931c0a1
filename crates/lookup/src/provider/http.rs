//! HTTP plumbing shared by the concrete providers.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::errors::ProviderError;

/// Default HTTP request timeout.
///
/// Transport-level only; the race deadline is enforced by the coordinator.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn build_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Percent-encode a key for use as a single URL path segment.
///
/// `/`, `?` and `#` are escaped so the key cannot leave its segment. A key made
/// only of dots would still be normalized away as `.` or `..` by the URL
/// parser, so it is reported as not found without issuing a request.
pub(crate) fn path_segment(provider: &str, key: &str) -> Result<String, ProviderError> {
    if key.is_empty() || key.chars().all(|c| c == '.') {
        return Err(ProviderError::NotFound {
            provider: provider.to_string(),
            cep: key.to_string(),
        });
    }
    Ok(encode(key).into_owned())
}

/// Issue one GET and decode the JSON body.
///
/// Any non-2xx status is reported as [`ProviderError::UnexpectedStatus`]
/// without looking at the body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &str,
    url: &str,
) -> Result<T, ProviderError> {
    debug!("{} GET {}", provider, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ProviderError::Transport {
            provider: provider.to_string(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::UnexpectedStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::Transport {
            provider: provider.to_string(),
            message: e.to_string(),
        })?;

    serde_json::from_str(&body).map_err(|e| ProviderError::MalformedBody {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment_escapes_delimiters() {
        assert_eq!(path_segment("APICEP", "01310-100").unwrap(), "01310-100");
        assert_eq!(
            path_segment("APICEP", "../../admin/x-1").unwrap(),
            "..%2F..%2Fadmin%2Fx-1"
        );
        assert_eq!(path_segment("VIACEP", "01310100?x=1").unwrap(), "01310100%3Fx%3D1");
        assert_eq!(path_segment("VIACEP", "01310100#frag").unwrap(), "01310100%23frag");
    }

    #[test]
    fn test_path_segment_rejects_dot_segments() {
        for key in ["", ".", ".."] {
            let error = path_segment("VIACEP", key).unwrap_err();
            assert!(error.is_not_found());
            assert_eq!(error.provider(), "VIACEP");
        }
    }
}
