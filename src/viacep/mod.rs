use log::debug;
use reqwest::Url;

use crate::config::Settings;
use crate::viacep::error::LookupError;
use crate::viacep::models::AddressResult;

pub mod error;
pub mod models;

/// Client for the ViaCEP lookup service.
///
/// Built once at startup and shared by every worker. Each call is bounded by
/// the configured timeout and is never retried.
#[derive(Clone, Debug)]
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: Url
}

impl ViaCepClient {
    pub fn new(settings: &Settings) -> Result<ViaCepClient, LookupError> {
        let base_url = Url::parse(&settings.viacep_base_url)
            .map_err(|err| LookupError::InvalidUrl(
                format!("{} ({})", settings.viacep_base_url, err)
            ))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(settings.viacep_base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout)
            .build()?;

        Ok(ViaCepClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{cep}/json`, with `cep` pushed as a single path segment.
    pub fn lookup_url(&self, cep: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        // `new` already rejects cannot-be-a-base urls, so this never fails.
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(cep)
            .push("json");
        Ok(url)
    }

    pub async fn lookup(&self, cep: &str) -> Result<AddressResult, LookupError> {
        let url = self.lookup_url(cep)?;
        debug!("Fetching address for cep {} at {}", cep, url);

        let response = self.client
            .get(url)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus(status));
        }

        let bytes = response.bytes().await?;
        let address = AddressResult::from_slice(&bytes)?;

        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::viacep::error::LookupError;

    use super::ViaCepClient;

    fn client_for(base_url: &str) -> Result<ViaCepClient, LookupError> {
        ViaCepClient::new(&Settings {
            viacep_base_url: base_url.into(),
            ..Settings::default()
        })
    }

    #[test]
    fn test_default_lookup_url() {
        let client = ViaCepClient::new(&Settings::default()).unwrap();
        let url = client.lookup_url("01001000").unwrap();
        assert_eq!(url.as_str(), "https://viacep.com.br/ws/01001000/json");
    }

    #[test]
    fn test_lookup_url_trailing_slash() {
        let client = client_for("https://viacep.com.br/ws/").unwrap();
        let url = client.lookup_url("01001000").unwrap();
        assert_eq!(url.as_str(), "https://viacep.com.br/ws/01001000/json");
    }

    #[test]
    fn test_lookup_url_keeps_cep_in_one_segment() {
        let client = ViaCepClient::new(&Settings::default()).unwrap();

        let url = client.lookup_url("01001/000").unwrap();
        assert_eq!(url.as_str(), "https://viacep.com.br/ws/01001%2F000/json");

        let url = client.lookup_url("0100 1000").unwrap();
        assert_eq!(url.as_str(), "https://viacep.com.br/ws/0100%201000/json");
    }

    #[test]
    fn test_lookup_url_forwards_unvalidated_input() {
        let client = ViaCepClient::new(&Settings::default()).unwrap();
        let url = client.lookup_url("abc").unwrap();
        assert_eq!(url.as_str(), "https://viacep.com.br/ws/abc/json");
    }

    #[test]
    fn test_invalid_base_url() {
        match client_for("not a url") {
            Err(LookupError::InvalidUrl(_)) => {},
            other => panic!("expected invalid url, got {:?}", other),
        }
        match client_for("mailto:someone@example.com") {
            Err(LookupError::InvalidUrl(_)) => {},
            other => panic!("expected invalid url, got {:?}", other),
        }
    }
}
