//! API credentials and their redaction.
//!
//! Every request carries the organization API key and the application key as
//! the `api_key` and `application_key` query parameters. Neither value may
//! reach logs or error messages.

use datadog_config::AuthConfig;
use datadog_config::constants::{API_KEY_PARAM, APP_KEY_PARAM};
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

const REDACTED: &str = "REDACTED";

/// The two static keys that authenticate every request.
#[derive(Clone)]
pub struct Credentials {
    api_key: SecretString,
    app_key: SecretString,
}

impl Credentials {
    pub fn new(api_key: SecretString, app_key: SecretString) -> Self {
        Self { api_key, app_key }
    }

    /// Query parameters to append to a request URL.
    pub(crate) fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            (API_KEY_PARAM, self.api_key.expose_secret()),
            (APP_KEY_PARAM, self.app_key.expose_secret()),
        ]
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.api_key.expose_secret().is_empty() || self.app_key.expose_secret().is_empty()
    }
}

impl From<&AuthConfig> for Credentials {
    fn from(config: &AuthConfig) -> Self {
        Self::new(config.api_key.clone(), config.app_key.clone())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &REDACTED)
            .field("app_key", &REDACTED)
            .finish()
    }
}

/// Render a URL with credential query parameters masked.
pub(crate) fn redact_url(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == API_KEY_PARAM || key == APP_KEY_PARAM {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs.iter());
    redacted.to_string()
}
