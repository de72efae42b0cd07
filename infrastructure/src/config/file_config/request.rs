//! Request configuration from TOML (`[request]` section)

use apisnap_domain::RequestOptions;
use apisnap_domain::request::DEFAULT_API_VERSION;
use serde::{Deserialize, Serialize};

/// Raw request options from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRequestConfig {
    /// Timeout in milliseconds; absent means unlimited
    pub timeout_ms: Option<u64>,
    /// API revision to target
    pub api_version: String,
    /// Suppress automatic function execution
    pub disable_auto_function: bool,
}

impl Default for FileRequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            disable_auto_function: false,
        }
    }
}

impl FileRequestConfig {
    pub fn to_request_options(&self) -> RequestOptions {
        RequestOptions::from_millis(
            self.timeout_ms,
            self.api_version.clone(),
            self.disable_auto_function,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_domain_default() {
        assert_eq!(
            FileRequestConfig::default().to_request_options(),
            RequestOptions::default()
        );
    }

    #[test]
    fn test_zero_timeout_kept() {
        let config: FileRequestConfig = toml::from_str("timeout_ms = 0").unwrap();
        assert!(config.to_request_options().timeout().is_zero());
    }
}
