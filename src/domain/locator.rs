//! Provider dataset URL construction.
//!
//! Builds the exact download URL for one symbol's daily CSV dataset. The
//! auth code travels with the locator that uses it, so two locators in one
//! process can point at different provider accounts.

pub const DEFAULT_PROVIDER_HOST: &str = "www.quandl.com";

/// Provider API credential for one locator.
///
/// Holds at most one code; `set` replaces any previous value. Unset codes
/// render as an empty token in the URL, which the provider rejects, so
/// callers that require a credential should check [`AuthCode::is_set`]
/// before building URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthCode {
    code: Option<String>,
}

impl AuthCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, code: impl Into<String>) {
        self.code = Some(code.into());
    }

    pub fn is_set(&self) -> bool {
        self.code.is_some()
    }

    pub fn as_str(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }
}

/// URL builder for one provider account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedLocator {
    host: String,
    auth_code: AuthCode,
}

impl FeedLocator {
    /// Locator against the default provider host with no credential set.
    pub fn new() -> Self {
        Self::with_host(DEFAULT_PROVIDER_HOST)
    }

    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            auth_code: AuthCode::new(),
        }
    }

    pub fn with_auth_code(mut self, code: impl Into<String>) -> Self {
        self.auth_code.set(code);
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn auth_code(&self) -> &AuthCode {
        &self.auth_code
    }

    pub fn auth_code_mut(&mut self) -> &mut AuthCode {
        &mut self.auth_code
    }

    /// The daily-dataset CSV URL for `symbol`. The symbol is interpolated
    /// verbatim; callers normalize case before calling.
    pub fn dataset_url(&self, symbol: &str) -> String {
        format!(
            "https://{}/api/v1/datasets/{}.csv?sort_order=asc&exclude_headers=false&auth_token={}",
            self.host,
            symbol,
            self.auth_code.as_str()
        )
    }
}
