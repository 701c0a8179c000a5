//! HTTP request pipeline: resolve, dispatch, validate, decode.

use reqwest::Client;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{NhlApiError, Result};

/// Resolved base URLs, one per endpoint group.
#[derive(Debug, Clone)]
pub(crate) struct EndpointUrls {
    urls: [Url; 4],
}

impl EndpointUrls {
    /// Resolves base URLs from the override table, falling back to each
    /// endpoint's default.
    pub(crate) fn resolve(overrides: [Option<Url>; 4]) -> Result<Self> {
        let mut resolved: Vec<Url> = Vec::with_capacity(Endpoint::ALL.len());
        for (endpoint, override_url) in Endpoint::ALL.into_iter().zip(overrides) {
            let url = match override_url {
                Some(url) => url,
                None => Url::parse(endpoint.default_base_url()).map_err(|e| {
                    NhlApiError::Other {
                        message: format!("invalid default base URL for {endpoint:?}: {e}"),
                    }
                })?,
            };
            resolved.push(url);
        }
        resolved
            .try_into()
            .map(|urls| Self { urls })
            .map_err(|_| NhlApiError::Other {
                message: String::from("endpoint table size mismatch"),
            })
    }

    // Index is always in range: the table is built from Endpoint::ALL.
    #[allow(clippy::indexing_slicing)]
    fn get(&self, endpoint: Endpoint) -> &Url {
        &self.urls[endpoint.index()]
    }
}

/// Stateless HTTP pipeline shared by all resource methods.
///
/// Holds only immutable configuration and the pooled `reqwest::Client`,
/// which is itself cheaply cloneable and safe for concurrent use; the
/// wrapping [`crate::NhlClient`] therefore needs no synchronization.
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: Client,
    base_urls: EndpointUrls,
}

impl HttpClient {
    /// Builds the underlying transport from the immutable configuration.
    pub(crate) fn new(config: &ClientConfig, base_urls: EndpointUrls) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout).gzip(true);

        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let policy = if config.follow_redirects {
            Policy::limited(10)
        } else {
            Policy::none()
        };

        let client = builder.redirect(policy).build()?;

        Ok(Self { client, base_urls })
    }

    /// Performs a single GET and decodes the JSON body into `T`.
    ///
    /// Exactly one network call per invocation; no retries, no caching.
    /// Non-2xx statuses map to the error taxonomy with `resource` embedded
    /// in the message. Decode failures surface the parse error and never
    /// fall back to a default value.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        resource: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.build_url(endpoint, resource, query)?;
        tracing::debug!(%url, "NHL API request");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NhlApiError::from_status(status, resource));
        }

        let body = response.text().await?;
        tracing::trace!(%resource, body_len = body.len(), "Response body received");

        serde_json::from_str(&body).map_err(|source| NhlApiError::Json { source })
    }

    /// Joins the base URL with the resource path and percent-encodes the
    /// query pairs.
    fn build_url(&self, endpoint: Endpoint, resource: &str, query: &[(&str, String)]) -> Result<Url> {
        let base = self.base_urls.get(endpoint);
        let mut url = base.join(resource).map_err(|e| NhlApiError::Other {
            message: format!("could not construct URL for {resource}: {e}"),
        })?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}
