//! Request options value object
//!
//! [`RequestOptions`] describes how a single request to the backend should
//! behave. It is built once and handed to request-issuing code unchanged.
//!
//! Two named constructors exist, one taking a [`Duration`] and one taking an
//! optional millisecond count. Both normalize into the same `Duration`:
//!
//! ```
//! use apisnap_domain::RequestOptions;
//! use std::time::Duration;
//!
//! let a = RequestOptions::new(Duration::from_secs(30), "v1", false);
//! let b = RequestOptions::from_millis(Some(30_000), "v1", false);
//! assert_eq!(a, b);
//! ```

use std::time::Duration;

/// API version used when none is supplied.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Configurable options for how requests to the backend are performed.
///
/// Fields are private and there are no setters; an instance never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestOptions {
    timeout: Duration,
    api_version: String,
    disable_auto_function: bool,
}

impl RequestOptions {
    /// Create options with an explicit timeout.
    ///
    /// No validation is performed; a zero timeout is kept as-is and left to
    /// the transport to interpret.
    pub fn new(
        timeout: Duration,
        api_version: impl Into<String>,
        disable_auto_function: bool,
    ) -> Self {
        Self {
            timeout,
            api_version: api_version.into(),
            disable_auto_function,
        }
    }

    /// Create options from a timeout in milliseconds.
    ///
    /// `None` and `Some(u64::MAX)` both mean "unlimited" and map to
    /// [`Duration::MAX`].
    pub fn from_millis(
        timeout_ms: Option<u64>,
        api_version: impl Into<String>,
        disable_auto_function: bool,
    ) -> Self {
        Self::new(
            millis_to_timeout(timeout_ms),
            api_version,
            disable_auto_function,
        )
    }

    /// Maximum time allowed from sending the request to the first response.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// API revision the request targets (e.g. `"v1"`, `"v1beta"`).
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Whether automatic function execution is suppressed.
    pub fn disable_auto_function(&self) -> bool {
        self.disable_auto_function
    }

    /// Whether the timeout is the "unlimited" sentinel.
    pub fn is_unlimited(&self) -> bool {
        self.timeout == Duration::MAX
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::from_millis(None, DEFAULT_API_VERSION, false)
    }
}

fn millis_to_timeout(timeout_ms: Option<u64>) -> Duration {
    match timeout_ms {
        None | Some(u64::MAX) => Duration::MAX,
        Some(ms) => Duration::from_millis(ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let options = RequestOptions::default();
        assert_eq!(options.timeout(), Duration::MAX);
        assert_eq!(options.api_version(), "v1");
        assert!(!options.disable_auto_function());
        assert!(options.is_unlimited());
    }

    #[test]
    fn test_from_millis_converts_to_duration() {
        for ms in [0u64, 1, 999, 1_000, 30_000, 86_400_000] {
            let options = RequestOptions::from_millis(Some(ms), "v1", false);
            assert_eq!(options.timeout(), Duration::from_millis(ms));
        }
    }

    #[test]
    fn test_from_millis_none_is_unlimited() {
        let options = RequestOptions::from_millis(None, "v1beta", true);
        assert!(options.is_unlimited());
        assert_eq!(options.api_version(), "v1beta");
        assert!(options.disable_auto_function());
    }

    #[test]
    fn test_from_millis_max_is_unlimited() {
        let options = RequestOptions::from_millis(Some(u64::MAX), "v1", false);
        assert_eq!(options.timeout(), Duration::MAX);
    }

    #[test]
    fn test_zero_timeout_is_accepted() {
        let options = RequestOptions::new(Duration::ZERO, "v1", false);
        assert_eq!(options.timeout(), Duration::ZERO);
        assert!(!options.is_unlimited());
    }

    #[test]
    fn test_both_constructors_agree() {
        let by_duration = RequestOptions::new(Duration::from_millis(1_500), "v2", true);
        let by_millis = RequestOptions::from_millis(Some(1_500), "v2", true);
        assert_eq!(by_duration, by_millis);
    }
}
