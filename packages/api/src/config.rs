//! Connection settings for the hosted Supabase project.
//!
//! The URL and anon key are checked in as compile-time defaults, the same way
//! the generated browser client ships them. Both can be overridden at build
//! time through `SUPABASE_URL` / `SUPABASE_ANON_KEY`.

/// Project URL and publishable anon key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub anon_key: String,
}

const DEFAULT_URL: &str = "https://nlzwrlgtjshcjfxnchgo.supabase.co";
const DEFAULT_ANON_KEY: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.anon-publishable-key";

impl Default for Config {
    fn default() -> Self {
        Self {
            url: option_env!("SUPABASE_URL").unwrap_or(DEFAULT_URL).to_string(),
            anon_key: option_env!("SUPABASE_ANON_KEY")
                .unwrap_or(DEFAULT_ANON_KEY)
                .to_string(),
        }
    }
}

impl Config {
    /// Base REST endpoint, without a trailing slash.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }

    /// Base auth endpoint, without a trailing slash.
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_strip_trailing_slash() {
        let config = Config {
            url: "https://example.supabase.co/".to_string(),
            anon_key: "key".to_string(),
        };
        assert_eq!(config.rest_url(), "https://example.supabase.co/rest/v1");
        assert_eq!(config.auth_url(), "https://example.supabase.co/auth/v1");
    }
}
