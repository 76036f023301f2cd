//! Small string helpers shared by the client and the report renderer.

/// Calendar-date part of an ISO-8601 timestamp: everything before the first `T`.
///
/// A value without a `T` is returned unchanged.
///
/// ```ignore
/// assert_eq!(date_portion("2024-03-05T10:00:00Z"), "2024-03-05");
/// assert_eq!(date_portion("March 5"), "March 5");
/// ```
pub fn date_portion(published_at: &str) -> &str {
    published_at
        .split_once('T')
        .map_or(published_at, |(date, _)| date)
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) and
/// get an ellipsis plus the number of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}
