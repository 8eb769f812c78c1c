//! Parivahan RC status HTTP client.
//!
//! A lookup is two requests on one cookie-carrying session: a GET of the
//! search page, which hands out the JSESSIONID cookie and the JSF view
//! state, then a POST of the search form. The server ties the view state to
//! the session, so both requests must go through the same client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use tracing::debug;

use crate::domain::RegistrationNumber;

use super::error::LookupError;
use super::form::SearchForm;

/// Default base URL of the Parivahan site.
const DEFAULT_BASE_URL: &str = "https://parivahan.gov.in";

/// Browser-identifying user agent sent with both requests.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Referer sent with both requests.
const DEFAULT_REFERER: &str = "https://parivahan.gov.in/";

/// Search page, relative to the base URL.
const SEARCH_PAGE_PATH: &str = "/rcdlstatus/?pur_cd=102";

/// Form submission endpoint, relative to the base URL.
const SEARCH_SUBMIT_PATH: &str = "/rcdlstatus/vahan/rcDlHome.xhtml";

/// Configuration for the Parivahan client.
#[derive(Debug, Clone)]
pub struct ParivahanConfig {
    /// Base URL of the site (defaults to production)
    pub base_url: String,
    /// `User-Agent` header value
    pub user_agent: String,
    /// `Referer` header value
    pub referer: String,
    /// Whole-request timeout in seconds; `None` leaves reqwest's default
    /// (no timeout)
    pub timeout_secs: Option<u64>,
}

impl Default for ParivahanConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParivahanConfig {
    /// Create a config pointing at the production site.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Client for the Parivahan RC status search.
#[derive(Debug, Clone)]
pub struct ParivahanClient {
    http: reqwest::Client,
    base_url: String,
}

impl ParivahanClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ParivahanConfig) -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| LookupError::InvalidHeader { name: "User-Agent" })?;
        headers.insert(USER_AGENT, user_agent);

        let referer = HeaderValue::from_str(&config.referer)
            .map_err(|_| LookupError::InvalidHeader { name: "Referer" })?;
        headers.insert(REFERER, referer);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run the search for `registration` and return the raw response body.
    ///
    /// Returns [`LookupError::StructureChanged`] without submitting anything
    /// if the search page no longer has the expected button.
    pub async fn fetch_result_page(
        &self,
        registration: &RegistrationNumber,
    ) -> Result<String, LookupError> {
        let search_url = format!("{}{}", self.base_url, SEARCH_PAGE_PATH);
        debug!(url = %search_url, "fetching search page");
        let response = self.http.get(&search_url).send().await?;
        let landing = success_body(response).await?;

        let form = SearchForm::from_landing_page(&landing)?;
        debug!(button = form.button_id(), "found search form");

        let submit_url = format!("{}{}", self.base_url, SEARCH_SUBMIT_PATH);
        debug!(url = %submit_url, %registration, "submitting search");
        let response = self
            .http
            .post(&submit_url)
            .form(&form.payload(registration))
            .send()
            .await?;

        success_body(response).await
    }
}

/// The response body, or [`LookupError::Status`] for a non-success status.
async fn success_body(response: reqwest::Response) -> Result<String, LookupError> {
    let status = response.status();

    if !status.is_success() {
        return Err(LookupError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    Ok(response.text().await?)
}
