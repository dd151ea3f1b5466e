//! Release-date formatting
//!
//! Upstream timestamps are RFC3339 in arbitrary offsets; pages display them
//! in the site's reference timezone (Europe/London). A timestamp that fails
//! to parse is returned unchanged so a bad upstream value degrades to raw
//! text rather than a broken page.

use chrono::DateTime;
use chrono_tz::Europe::London;
use tracing::error;

/// Format an RFC3339 timestamp as "02 January 2006".
pub fn date_format(s: &str) -> String {
    match DateTime::parse_from_rfc3339(s) {
        Ok(t) => t.with_timezone(&London).format("%d %B %Y").to_string(),
        Err(err) => {
            error!(input = s, %err, "failed to parse time");
            s.to_string()
        }
    }
}

/// Format an RFC3339 timestamp as "2006/01/02".
pub fn date_format_yyyy_mm_dd(s: &str) -> String {
    match DateTime::parse_from_rfc3339(s) {
        Ok(t) => t.with_timezone(&London).format("%Y/%m/%d").to_string(),
        Err(err) => {
            error!(input = s, %err, "failed to parse time");
            s.to_string()
        }
    }
}
