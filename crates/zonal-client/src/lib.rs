//! # zonal-client
//!
//! HTTP client for the zones endpoint (`GET {base}/zones/all`).
//!
//! A fetch either yields the decoded zone list or a [`FetchError`]. A
//! malformed body is not an error: it is logged and read as an empty list.

mod decode;
mod error;
mod http;

pub use decode::{ZONES_FIELD, decode_zones};
pub use error::{DecodeError, FetchError};

use std::time::Duration;

use zonal_core::Zone;

/// Path appended to the base address.
pub const ZONES_PATH: &str = "zones/all";

/// HTTP client for the zones endpoint.
#[derive(Debug, Clone)]
pub struct ZoneClient {
    http: reqwest::Client,
    zones_url: reqwest::Url,
}

impl ZoneClient {
    /// Create a client for the endpoint rooted at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if `base_url` cannot be parsed
    /// or is not http(s), and [`FetchError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let zones_url = zones_url(base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("zonal/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { http, zones_url })
    }

    /// The fully resolved zones URL.
    #[must_use]
    pub const fn zones_url(&self) -> &reqwest::Url {
        &self.zones_url
    }

    /// Fetch every zone, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails or the endpoint answers
    /// with a non-success status. A body that does not decode yields
    /// `Ok(vec![])` instead.
    pub async fn fetch_all(&self) -> Result<Vec<Zone>, FetchError> {
        tracing::debug!(url = %self.zones_url, "fetching zones");
        let resp = self.http.get(self.zones_url.clone()).send().await?;
        let body = http::check_response(resp).await?.bytes().await?;

        match decode_zones(&body) {
            Ok(zones) => {
                tracing::debug!(count = zones.len(), "decoded zones");
                Ok(zones)
            }
            Err(error) => {
                tracing::debug!(%error, "zones payload did not decode; treating as empty");
                Ok(Vec::new())
            }
        }
    }
}

fn zones_url(base_url: &str) -> Result<reqwest::Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let base = base_url.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(&format!("{base}/{ZONES_PATH}"))
        .map_err(|error| invalid(error.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url)
}
