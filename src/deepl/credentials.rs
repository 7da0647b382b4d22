// DeepL authentication key handling

use crate::error::{GatewayError, Result};
use serde::Serialize;
use std::fmt;
use zeroize::Zeroizing;

/// Normalizes a raw key value: surrounding whitespace, then double quotes,
/// then single quotes are stripped. Returns `None` when nothing usable remains.
pub fn normalize_key(raw: &str) -> Option<String> {
    let key = raw.trim().trim_matches('"').trim_matches('\'');

    if key.trim().is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

/// A DeepL authentication key. Wiped from memory on drop and never printed.
#[derive(Clone)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    /// Build a key from a raw value, failing with a missing-credential error
    /// named after `var_name` when it is absent or blank.
    pub fn resolve(var_name: &str, raw: Option<&str>) -> Result<Self> {
        raw.and_then(normalize_key)
            .map(|key| Self(Zeroizing::new(key)))
            .ok_or_else(|| GatewayError::MissingCredential(var_name.to_string()))
    }

    /// Read and normalize the key from the process environment.
    pub fn from_env(var_name: &str) -> Result<Self> {
        let raw = std::env::var(var_name).ok();
        Self::resolve(var_name, raw.as_deref())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Keys issued for DeepL API Free end with `:fx`.
    pub fn is_free_account(&self) -> bool {
        self.0.ends_with(":fx")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Partial view of the configured key served by the opt-in debug endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialReport {
    pub has_key: bool,
    pub key_len: usize,
    pub key_tail: Option<String>,
}

impl CredentialReport {
    pub fn inspect(raw: Option<&str>) -> Self {
        let key = raw.map(|raw| raw.trim().trim_matches('"').trim_matches('\''));

        match key {
            Some(key) if !key.is_empty() => {
                let chars: Vec<char> = key.chars().collect();
                let key_tail = (chars.len() >= 3)
                    .then(|| chars[chars.len() - 3..].iter().collect());

                Self {
                    has_key: true,
                    key_len: chars.len(),
                    key_tail,
                }
            }
            _ => Self {
                has_key: false,
                key_len: 0,
                key_tail: None,
            },
        }
    }

    pub fn from_env(var_name: &str) -> Self {
        let raw = std::env::var(var_name).ok();
        Self::inspect(raw.as_deref())
    }
}
