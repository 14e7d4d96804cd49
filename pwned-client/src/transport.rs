use std::future::Future;
use std::time::Duration;

use reqwest::header::USER_AGENT;

use crate::config::Config;
use crate::error::Error;

/// Outbound HTTP capability consumed by [`BreachChecker`](crate::BreachChecker).
///
/// Exactly one request per `fetch` call. Retry policy, if any, belongs to
/// the caller or to the implementation behind this trait, never to the
/// lookup itself.
pub trait Transport {
    /// Fetches `url` with the given `User-Agent` and returns the raw
    /// response body.
    fn fetch(&self, url: &str, user_agent: &str) -> impl Future<Output = Result<String, Error>>;
}

/// Production transport backed by a shared [`reqwest::Client`].
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a client with the timeouts from `config`.
    ///
    /// A timeout of zero leaves that limit off. `connection_timeout` bounds
    /// connection establishment only; `remote_processing_timeout` bounds
    /// the whole request.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();

        if config.connection_timeout > 0 {
            builder = builder.connect_timeout(Duration::from_secs(config.connection_timeout));
        }
        if config.remote_processing_timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.remote_processing_timeout));
        }

        let client = builder
            .build()
            .map_err(|e| Error::ConnectionFailed { detail: e.to_string() })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, user_agent: &str) -> Result<String, Error> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|e| Error::ConnectionFailed { detail: e.to_string() })?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus { status: response.status().as_u16() });
        }

        response
            .text()
            .await
            .map_err(|e| Error::ConnectionFailed { detail: e.to_string() })
    }
}
