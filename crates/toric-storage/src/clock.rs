//! Timestamp assignment for stored records.

use chrono::Local;

/// The current local time as an ISO-8601 string with microsecond precision.
///
/// Format: `2026-08-06T14:03:21.123456`, matching what the frontend already
/// renders.
pub fn now_iso() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
