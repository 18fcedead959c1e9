// Cached token schema.
// Mirrors the cache file layout written by the AWS SSO client; every field is optional.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// One cache file's contents.
/// Token values are held only to report presence and are never printed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedToken {
    pub expires_at: Option<DateTime<Utc>>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub start_url: Option<String>,
    pub region: Option<String>,
}

/// Expiry classification relative to a reference instant.
/// Both durations are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    Valid {
        at: DateTime<Utc>,
        remaining: Duration,
    },
    Expired {
        at: DateTime<Utc>,
        since: Duration,
    },
}

/// Token kind discriminator for the presence report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Field name as it appears in the cache file.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Access => "accessToken",
            TokenKind::Refresh => "refreshToken",
        }
    }
}

impl CachedToken {
    /// Classify `expiresAt` against `now`, if the entry has one.
    pub fn expiry(&self, now: DateTime<Utc>) -> Option<Expiry> {
        let at = self.expires_at?;
        let remaining = at.signed_duration_since(now);
        Some(if remaining > Duration::zero() {
            Expiry::Valid { at, remaining }
        } else {
            Expiry::Expired { at, since: -remaining }
        })
    }

    /// Which token kinds the entry carries.
    pub fn token_kinds(&self) -> Vec<TokenKind> {
        let mut kinds = Vec::new();
        if self.access_token.is_some() {
            kinds.push(TokenKind::Access);
        }
        if self.refresh_token.is_some() {
            kinds.push(TokenKind::Refresh);
        }
        kinds
    }
}
