//! Timestamp formatting helper
//!
//! Renders UTC timestamps in the canonical `YYYY-MM-DD HH:MM:SS.ffffff+00`
//! form used when filter terms and log lines show timestamp values.

use chrono::{DateTime, Utc};

/// Format a UTC timestamp for display
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.6f+00").to_string()
}
