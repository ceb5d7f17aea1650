/// Search endpoint used when neither `--host` nor `ELSEQL_HOST` is set.
pub const DEFAULT_HOST: &str = "http://localhost:9200";

/// Where compiled requests are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the search engine, e.g. `http://localhost:9200`
    pub host: String,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        ClientConfig {
            host: host.trim_end_matches('/').to_string(),
        }
    }

    /// `<host>/<index>/_search`
    pub fn search_url(&self, index: &str) -> String {
        format!("{}/{}/_search", self.host, index)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url() {
        let config = ClientConfig::new("http://es:9200/");
        assert_eq!(config.search_url("logs"), "http://es:9200/logs/_search");
        assert_eq!(ClientConfig::default().host, DEFAULT_HOST);
    }
}
