//! Cookie-jar storage backend for one HTTP request/response pair.

use super::{ClientStorage, StorageError};
use std::collections::HashMap;
use std::time::Duration;

/// Reads items from a request's `Cookie` header and turns writes into
/// `Set-Cookie` header values for the response.
#[derive(Debug, Clone, Default)]
pub struct CookieStorage {
    cookies: HashMap<String, String>,
    max_age: Duration,
    pending: Vec<String>,
}

impl CookieStorage {
    /// Parse a `Cookie` request header (`a=1; b=2`).
    ///
    /// When a name repeats, the first occurrence wins, matching the
    /// most-specific-path-first order browsers send.
    pub fn from_header(header: Option<&str>, max_age: Duration) -> Self {
        let mut cookies = HashMap::new();
        for pair in header.unwrap_or_default().split(';') {
            let Some((name, value)) = pair.trim().split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            cookies
                .entry(name.to_string())
                .or_insert_with(|| value.trim().trim_matches('"').to_string());
        }

        Self {
            cookies,
            max_age,
            pending: Vec::new(),
        }
    }

    /// `Set-Cookie` values produced by writes so far, in write order.
    pub fn set_cookie_headers(&self) -> &[String] {
        &self.pending
    }

    pub fn into_set_cookie_headers(self) -> Vec<String> {
        self.pending
    }
}

/// RFC 6265 cookie-octet / token check, narrowed to what this crate writes.
fn is_cookie_safe(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

impl ClientStorage for CookieStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.cookies.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        for text in [key, value] {
            if !is_cookie_safe(text) {
                return Err(StorageError::Rejected {
                    key: key.to_string(),
                    reason: format!("{:?} is not a valid cookie token", text),
                });
            }
        }

        self.cookies.insert(key.to_string(), value.to_string());
        self.pending.push(format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            key,
            value,
            self.max_age.as_secs()
        ));
        Ok(())
    }
}
