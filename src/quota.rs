//! Quota retrieval: cache first, then one bounded call to the OAuth usage
//! endpoint, preferring stale data over blocking or failing.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::cache::{self, CACHE_TTL_MS, QuotaCache};
use crate::models::{QuotaCacheEntry, QuotaSnapshot};

const USAGE_ENDPOINT: &str = "https://api.anthropic.com/api/oauth/usage";
const ANTHROPIC_BETA: &str = "oauth-2025-04-20";
const API_TIMEOUT: Duration = Duration::from_millis(5_000);

/// One attempt against the usage endpoint. Implementations must resolve
/// within their own timeout and map every failure to `None`.
pub trait QuotaTransport {
    fn fetch(&self, token: &str) -> Option<QuotaSnapshot>;
}

impl<T: QuotaTransport + ?Sized> QuotaTransport for &T {
    fn fetch(&self, token: &str) -> Option<QuotaSnapshot> {
        (**self).fetch(token)
    }
}

/// Production transport: a single HTTPS GET with a hard 5-second budget.
#[derive(Debug, Default)]
pub struct HttpTransport;

impl QuotaTransport for HttpTransport {
    fn fetch(&self, token: &str) -> Option<QuotaSnapshot> {
        let agent = ureq::AgentBuilder::new().timeout(API_TIMEOUT).build();
        let response = agent
            .get(USAGE_ENDPOINT)
            .set("Authorization", &format!("Bearer {token}"))
            .set("anthropic-beta", ANTHROPIC_BETA)
            .set("Accept", "application/json")
            .call()
            .ok()?;
        if response.status() != 200 {
            return None;
        }
        response.into_json().ok()
    }
}

/// Resolves the freshest [`QuotaSnapshot`] available for this invocation.
/// The cache repository and credential path are injected so tests can run
/// the full ladder against temp files and a stub transport.
pub struct QuotaFetcher<T: QuotaTransport> {
    cache: QuotaCache,
    credentials_path: Option<PathBuf>,
    transport: T,
}

impl QuotaFetcher<HttpTransport> {
    /// Fetcher wired to the fixed per-user paths
    /// (`~/.claude/hooks/quota-cache.json`, `~/.claude/.credentials.json`).
    pub fn from_user_dirs() -> Option<Self> {
        Some(Self::new(
            QuotaCache::default_location()?,
            cache::claude_dir().map(|d| d.join(".credentials.json")),
            HttpTransport,
        ))
    }
}

impl<T: QuotaTransport> QuotaFetcher<T> {
    pub fn new(cache: QuotaCache, credentials_path: Option<PathBuf>, transport: T) -> Self {
        Self {
            cache,
            credentials_path,
            transport,
        }
    }

    /// Never fails, at most one transport call:
    /// fresh cache → cached data; no token → stale cache if any; fetch
    /// success → persist best-effort and return; fetch failure → stale cache.
    pub fn get(&self, now: DateTime<Utc>) -> Option<QuotaSnapshot> {
        let cached = self.cache.read();
        if let Some(entry) = &cached {
            if entry.age_ms(now) < CACHE_TTL_MS {
                return Some(entry.data.clone());
            }
        }

        let token = match self.access_token() {
            Some(token) if fetch_enabled() => token,
            _ => return cached.map(|e| e.data),
        };

        match self.transport.fetch(&token) {
            Some(data) => {
                let entry = QuotaCacheEntry {
                    timestamp: now.timestamp_millis(),
                    data: data.clone(),
                };
                let _ = self.cache.write(&entry);
                Some(data)
            }
            None => cached.map(|e| e.data),
        }
    }

    /// OAuth access token: env override first, then the credentials file.
    fn access_token(&self) -> Option<String> {
        for key in ["CLAUDE_CODE_OAUTH_TOKEN", "ANTHROPIC_AUTH_TOKEN"] {
            if let Ok(val) = std::env::var(key) {
                let trimmed = val.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }

        let raw = fs::read_to_string(self.credentials_path.as_deref()?).ok()?;
        let creds: serde_json::Value = serde_json::from_str(&raw).ok()?;
        let token = creds
            .get("claudeAiOauth")?
            .get("accessToken")?
            .as_str()?
            .trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

/// Kill switch for the network call; cached data is still served when off.
fn fetch_enabled() -> bool {
    match std::env::var("CLAUDE_QUOTALINE_FETCH") {
        Ok(val) => {
            let trimmed = val.trim();
            trimmed.is_empty()
                || matches!(
                    trimmed.to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes" | "on"
                )
        }
        Err(_) => true,
    }
}
