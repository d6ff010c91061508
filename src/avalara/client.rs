//! AvaTax HTTP client for API interactions

use base64::Engine;
use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{api, client as client_config, environments};
use crate::error::{ApiErrorResponse, ConnectorError, Result};

use super::pagination::{PaginatedResponse, PaginationOptions};

/// Resolve the base URL for an environment selector
///
/// A selector starting with `http` is taken as an explicit base URL.
/// Unrecognized selectors fall back to production.
pub fn base_url_for(environment: &str) -> String {
    if environment.to_lowercase().starts_with("http") {
        return environment.trim_end_matches('/').to_string();
    }
    match environment {
        environments::SANDBOX => environments::SANDBOX_BASE_URL.to_string(),
        environments::TEST => environments::TEST_BASE_URL.to_string(),
        environments::PRODUCTION => environments::PRODUCTION_BASE_URL.to_string(),
        other => {
            warn!("Unknown environment '{}', using production", other);
            environments::PRODUCTION_BASE_URL.to_string()
        }
    }
}

/// Value of the `X-Avalara-Client` header sent with every request
pub fn client_identification() -> String {
    format!(
        "{}; {}; {}; {}",
        client_config::APP_NAME,
        env!("CARGO_PKG_VERSION"),
        client_config::LIBRARY_NAME,
        client_config::API_VERSION
    )
}

/// AvaTax API client
pub struct AvalaraClient {
    client: Client,
    base_url: String,
    /// base64 of `username:password`
    credentials: String,
    client_header: String,
}

impl AvalaraClient {
    /// Create a client for the given environment over an existing HTTP client
    pub fn new(environment: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url_for(environment),
            credentials: String::new(),
            client_header: client_identification(),
        }
    }

    /// Create a fully configured client with pooled connection settings
    pub fn connect(environment: &str, username: &str, password: &str) -> Self {
        let http = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        let mut client = Self::new(environment, http);
        client.add_credentials(username, password);
        debug!("Created AvaTax client for {}", client.base_url);
        client
    }

    /// Configure Basic-auth credentials used by every subsequent request
    pub fn add_credentials(&mut self, username: &str, password: &str) {
        self.credentials =
            base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", username, password));
    }

    /// Base URL all endpoint paths are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_header(&self) -> &str {
        &self.client_header
    }

    #[cfg(test)]
    pub(crate) fn credentials(&self) -> &str {
        &self.credentials
    }

    /// Build the target URL for a request
    ///
    /// A continuation link is parsed and used as-is, apart from the WHATWG
    /// normalization `Url` applies (e.g. `'` in the query becomes `%27`).
    /// Otherwise the endpoint
    /// is resolved against the base URL and non-empty options are encoded as
    /// OData query parameters.
    pub fn request_url(&self, endpoint: &str, options: Option<&PaginationOptions>) -> Result<Url> {
        if let Some(link) = options.and_then(|o| o.next_link()) {
            let absolute = if link.starts_with('/') {
                format!("{}{}", self.base_url, link)
            } else {
                link.to_string()
            };
            return Url::parse(&absolute)
                .map_err(|e| ConnectorError::Url(format!("'{}': {}", link, e)));
        }

        let raw = format!("{}{}", self.base_url, endpoint);
        let mut url =
            Url::parse(&raw).map_err(|e| ConnectorError::Url(format!("'{}': {}", raw, e)))?;

        if let Some(options) = options {
            let mut pairs: Vec<(&str, String)> = Vec::new();
            if options.top > 0 {
                pairs.push((api::query::TOP, options.top.to_string()));
            }
            if options.skip > 0 {
                pairs.push((api::query::SKIP, options.skip.to_string()));
            }
            if let Some(order_by) = options.order_by.as_deref().filter(|s| !s.is_empty()) {
                pairs.push((api::query::ORDER_BY, order_by.to_string()));
            }
            if let Some(filter) = options.filter.as_deref().filter(|s| !s.is_empty()) {
                pairs.push((api::query::FILTER, filter.to_string()));
            }
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        Ok(url)
    }

    /// Issue an authenticated GET and decode the JSON body into `T`
    pub(crate) async fn get<T>(&self, endpoint: &str, options: Option<&PaginationOptions>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.request_url(endpoint, options)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Basic {}", self.credentials))
            .header(client_config::HEADER, &self.client_header)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            if let Ok(parsed) = serde_json::from_slice::<ApiErrorResponse>(&body) {
                if !parsed.error.code.is_empty() {
                    return Err(ConnectorError::Api(parsed.error));
                }
            }
            return Err(ConnectorError::Status {
                status: status.as_u16(),
            });
        }

        serde_json::from_slice(&body).map_err(|e| ConnectorError::Format {
            details: e.to_string(),
        })
    }

    /// Fetch one page of a listing endpoint
    ///
    /// Returns the envelope together with the options for the next page,
    /// or `None` when the server issued no next link.
    pub(crate) async fn get_page<R>(
        &self,
        endpoint: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<(R, Option<PaginationOptions>)>
    where
        R: DeserializeOwned + PaginatedResponse,
    {
        let response: R = self.get(endpoint, options).await?;
        let next = options
            .cloned()
            .unwrap_or_default()
            .advance(&response);
        Ok((response, next))
    }

    /// Fetch a listing starting at `options`
    ///
    /// With `all` set, next links are followed until the server stops
    /// issuing them; otherwise only the first page is returned.
    pub async fn fetch_pages<R>(
        &self,
        endpoint: &str,
        options: PaginationOptions,
        all: bool,
        error_context: &str,
    ) -> Result<Vec<R::Item>>
    where
        R: DeserializeOwned + PaginatedResponse,
    {
        let mut items = Vec::new();
        let mut current = Some(options);
        let mut pages = 0usize;

        while let Some(options) = current.take() {
            let (response, next): (R, _) = self
                .get_page(endpoint, Some(&options))
                .await
                .map_err(|e| e.context(format!("failed to fetch {}", error_context)))?;
            pages += 1;
            items.extend(response.into_items());
            if all {
                current = next;
            }
        }

        debug!("Fetched {} {} over {} page(s)", items.len(), error_context, pages);
        Ok(items)
    }
}

#[cfg(test)]
impl AvalaraClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        let mut client = Self::new(base_url, Client::new());
        client.add_credentials("testuser", "testpass");
        client
    }
}
