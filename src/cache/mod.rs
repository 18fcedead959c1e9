// Cache module for the on-disk SSO token cache.
// Reads the JSON files an external SSO client writes under ~/.aws/sso/cache.

pub mod entry;
pub mod paths;
pub mod scan;

pub use entry::{CachedToken, Expiry, TokenKind};
pub use scan::{CacheReport, scan_cache};
