//! Provider credentials
//!
//! Secrets come from the process environment only (a `.env` file is loaded
//! by the binary before this runs). An empty variable counts as missing.

use std::fmt;

/// Environment variable holding the SerpApi key
pub const SERPAPI_KEY_VAR: &str = "SERPAPI_KEY";

/// Environment variable holding the Apify token
pub const APIFY_TOKEN_VAR: &str = "APIFY_TOKEN";

/// Credentials for the outbound search providers
#[derive(Clone, Default)]
pub struct Credentials {
    /// SerpApi key (Google Hotels / Google Flights engines)
    pub serpapi_key: Option<String>,

    /// Apify platform token (Booking.com scraper actor)
    pub apify_token: Option<String>,
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            serpapi_key: read(SERPAPI_KEY_VAR),
            apify_token: read(APIFY_TOKEN_VAR),
        }
    }

    /// Credentials with nothing configured
    pub fn none() -> Self {
        Self::default()
    }
}

// Secrets never reach log output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("serpapi_key", &self.serpapi_key.as_ref().map(|_| "<redacted>"))
            .field("apify_token", &self.apify_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
