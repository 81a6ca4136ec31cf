//! Optional credentials forwarded to converter constructors.

/// Authentication parameters for converters that talk to a hosted service.
///
/// Both fields are optional and forwarded verbatim to the backend
/// constructor; backends that need neither simply ignore them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// API key for hosted converters (marker LLM mode, unstructured API).
    pub api_key: Option<String>,

    /// Base URL override for hosted converters.
    pub base_url: Option<String>,
}

impl Credentials {
    /// Empty credentials.
    #[inline]
    #[must_use = "returns a new credentials value"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    #[inline]
    #[must_use = "returns credentials with the API key set"]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL.
    #[inline]
    #[must_use = "returns credentials with the base URL set"]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}
