/// Configuration for the breach checker.
///
/// Built once at construction and read-only afterwards. Overrides arrive as
/// string key/value pairs through [`Config::merge`], which recognizes only
/// the keys named by the fields here and drops everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the range API; the range key is appended directly.
    pub endpoint: String,
    /// Value of the `User-Agent` header sent with every range query.
    pub user_agent: String,
    /// Limit in seconds on connection establishment. 0 disables the limit.
    pub connection_timeout: u64,
    /// Limit in seconds on waiting for the response after connecting.
    /// 0 disables the limit.
    pub remote_processing_timeout: u64,
    /// Occurrence count a password must exceed to be considered compromised.
    pub minimum_occurrences: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://api.pwnedpasswords.com/range/".to_string(),
            user_agent: concat!("pwned-client/", env!("CARGO_PKG_VERSION")).to_string(),
            connection_timeout: 0,
            remote_processing_timeout: 0,
            minimum_occurrences: 1,
        }
    }
}

impl Config {
    /// Applies recognized overrides on top of the current values.
    ///
    /// Unrecognized keys are filtered out silently, so an override set can
    /// never smuggle in a value this crate does not know about. A numeric
    /// key whose value fails to parse leaves the current value in place.
    pub fn merge<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in overrides {
            let value = value.as_ref();
            match key.as_ref() {
                "endpoint" => self.endpoint = value.to_string(),
                "user_agent" => self.user_agent = value.to_string(),
                "connection_timeout" => {
                    if let Ok(seconds) = value.parse() {
                        self.connection_timeout = seconds;
                    }
                }
                "remote_processing_timeout" => {
                    if let Ok(seconds) = value.parse() {
                        self.remote_processing_timeout = seconds;
                    }
                }
                "minimum_occurrences" => {
                    if let Ok(count) = value.parse() {
                        self.minimum_occurrences = count;
                    }
                }
                _ => {}
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://api.pwnedpasswords.com/range/");
        assert_eq!(config.connection_timeout, 0);
        assert_eq!(config.remote_processing_timeout, 0);
        assert_eq!(config.minimum_occurrences, 1);
        assert!(!config.user_agent.is_empty());
    }

    #[test]
    fn test_merge_recognized_keys() {
        let config = Config::default().merge([
            ("endpoint", "http://mytest.domain/range/"),
            ("user_agent", "my-app/2.0"),
            ("connection_timeout", "3"),
            ("remote_processing_timeout", "10"),
            ("minimum_occurrences", "5"),
        ]);

        assert_eq!(config.endpoint, "http://mytest.domain/range/");
        assert_eq!(config.user_agent, "my-app/2.0");
        assert_eq!(config.connection_timeout, 3);
        assert_eq!(config.remote_processing_timeout, 10);
        assert_eq!(config.minimum_occurrences, 5);
    }

    #[test]
    fn test_merge_ignores_unknown_keys() {
        let config = Config::default().merge([("unknown_field", "foo"), ("endpoint ", "bar")]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merge_unknown_keys_do_not_disturb_recognized_ones() {
        let config = Config::default()
            .merge([("minimum_occurrences", "7"), ("maximum_occurrences", "999")]);
        assert_eq!(config.minimum_occurrences, 7);
        assert_eq!(config.endpoint, Config::default().endpoint);
    }

    #[test]
    fn test_merge_keeps_value_on_unparseable_number() {
        let config = Config::default()
            .merge([("connection_timeout", "fast"), ("minimum_occurrences", "-1")]);
        assert_eq!(config.connection_timeout, 0);
        assert_eq!(config.minimum_occurrences, 1);
    }
}
