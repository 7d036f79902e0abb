use std::collections::HashSet;

use chrono::Utc;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Timestamp-derived record id.
///
/// Starts at `now_ms` and steps forward one millisecond at a time until the
/// rendered value is not among `taken`.
pub fn next_id<'a, I>(now_ms: i64, taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<&str> = taken.into_iter().collect();
    let mut candidate = now_ms;
    loop {
        let id = candidate.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}
