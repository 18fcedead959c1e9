// Report formatting.
// Pure string producers so the output contract stays unit-testable.

use chrono::{DateTime, Duration, Utc};

use crate::cache::{CacheReport, Expiry};
use crate::identity::IdentityStatus;

/// Section header for the token cache listing.
pub const CACHE_HEADER: &str = "=== AWS SSO Token Cache ===";

/// Section header for the identity probe.
pub const IDENTITY_HEADER: &str = "=== STS Identity Check ===";

/// Timestamp format used throughout the report.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Duration as fractional hours with one decimal.
pub fn format_hours(duration: Duration) -> String {
    format!("{:.1}h", duration.num_milliseconds() as f64 / 3_600_000.0)
}

/// Render one cache entry as an indented block.
pub fn render_entry(report: &CacheReport, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {}\n", report.file_name));

    let age = now.signed_duration_since(report.modified_at);
    out.push_str(&format!(
        "    Modified:      {} ({} ago)\n",
        format_timestamp(report.modified_at),
        format_hours(age)
    ));

    match report.token.expiry(now) {
        Some(Expiry::Valid { at, remaining }) => {
            out.push_str(&format!(
                "    Expires:       {} ({} left)\n",
                format_timestamp(at),
                format_hours(remaining)
            ));
        }
        Some(Expiry::Expired { at, since }) => {
            out.push_str(&format!(
                "    EXPIRED:       {} ({} ago)\n",
                format_timestamp(at),
                format_hours(since)
            ));
        }
        None => {}
    }

    let kinds = report.token.token_kinds();
    if !kinds.is_empty() {
        let labels: Vec<&str> = kinds.iter().map(|kind| kind.label()).collect();
        out.push_str(&format!("    Tokens:        {}\n", labels.join(", ")));
    }
    if let Some(url) = &report.token.start_url {
        out.push_str(&format!("    SSO URL:       {}\n", url));
    }
    if let Some(region) = &report.token.region {
        out.push_str(&format!("    Region:        {}\n", region));
    }

    out
}

/// Render the identity probe outcome.
pub fn render_identity(status: &IdentityStatus) -> String {
    match status {
        IdentityStatus::Active(identity) => {
            let mut out = String::new();
            out.push_str("  Status:  ACTIVE\n");
            out.push_str(&format!("  ARN:     {}\n", identity.arn));
            out.push_str(&format!("  Account: {}\n", identity.account));
            if let Some(user_id) = &identity.user_id {
                out.push_str(&format!("  UserId:  {}\n", user_id));
            }
            out
        }
        IdentityStatus::Invalid { error } => {
            format!("  Status:  EXPIRED or INVALID\n  Error:   {}\n", error)
        }
    }
}
