use std::collections::HashMap;

use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::fingerprint::split;
use crate::transport::{HttpTransport, Transport};

/// Parses a range API response body into a selector -> occurrence count
/// table.
///
/// An empty or whitespace-only body is a valid "no breaches known for this
/// range" answer and yields an empty table. Any line that does not parse as
/// `SELECTOR:COUNT` aborts the whole parse with
/// [`Error::MalformedResponse`].
pub fn parse_range_body(body: &str) -> Result<HashMap<String, u64>, Error> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(HashMap::new());
    }

    let mut table = HashMap::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (selector, count) = line
            .split_once(':')
            .ok_or_else(|| Error::MalformedResponse { line: line.to_string() })?;
        let count: u64 = count
            .trim()
            .parse()
            .map_err(|_| Error::MalformedResponse { line: line.to_string() })?;

        table.insert(selector.trim().to_string(), count);
    }

    Ok(table)
}

/// Checks passwords against the breach dataset over the k-anonymity range
/// API.
///
/// Holds no per-call state: every lookup hashes, queries, parses, and
/// compares from scratch, so one checker is safe to share across concurrent
/// call sites. Each lookup makes exactly one outbound request through the
/// transport.
pub struct BreachChecker<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl BreachChecker<HttpTransport> {
    /// Creates a checker backed by an HTTP transport built from `config`.
    pub fn new(config: Config) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> BreachChecker<T> {
    /// Creates a checker with an injected transport.
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns how many breach datasets contain `password`.
    ///
    /// Only the 5-character range key of the password's SHA-1 fingerprint
    /// is sent; the selector never leaves the process. Returns 0 when the
    /// selector is absent from the returned range. Transport and parse
    /// failures propagate; they are never collapsed into a zero count.
    pub async fn count_for(&self, password: &str) -> Result<u64, Error> {
        // Full-fingerprint search would be a burden on the remote API (and
        // would leak the hash), so the query is ranged on the key alone.
        let (range_key, selector) = split(password);
        let url = format!("{}{}", self.config.endpoint, range_key);

        debug!(%range_key, "querying breach range");
        let body = self.transport.fetch(&url, &self.config.user_agent).await?;
        let table = parse_range_body(&body)?;
        debug!(%range_key, candidates = table.len(), "range response parsed");

        Ok(table.get(&selector).copied().unwrap_or(0))
    }

    /// Whether `password` appears in more breach datasets than the
    /// configured `minimum_occurrences`.
    pub async fn has_been_pwned(&self, password: &str) -> Result<bool, Error> {
        self.has_been_pwned_with_minimum(password, self.config.minimum_occurrences).await
    }

    /// Like [`BreachChecker::has_been_pwned`] with a per-call threshold.
    ///
    /// A count exactly equal to `minimum` is acceptable; only a strictly
    /// greater count marks the password compromised. This lets site owners
    /// tolerate passwords with one or two incidental appearances while
    /// still blocking regularly-compromised entries.
    pub async fn has_been_pwned_with_minimum(
        &self,
        password: &str,
        minimum: u64,
    ) -> Result<bool, Error> {
        let count = self.count_for(password).await?;
        Ok(count > minimum)
    }
}
