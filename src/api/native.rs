use super::{HttpReply, Transport};
use crate::config::ApiConfig;
use crate::error::RequestError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

/// Blocking transport. Runs on a worker thread, never on the UI thread.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<HttpReply, RequestError> {
        let url = self.config.url_for(endpoint);
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|err| RequestError::Transport {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|err| RequestError::Transport {
            endpoint: endpoint.to_string(),
            message: format!("could not read body: {err}"),
        })?;

        Ok(HttpReply { status, body })
    }
}
