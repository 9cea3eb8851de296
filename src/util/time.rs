use chrono::{DateTime, TimeZone, Utc};

/// Format an instant as UTC with a fixed-width numeric offset,
/// e.g. `2023-01-01T00:00:00+0000`.
///
/// This is the shape GitHub accepts both for the `since` variable of
/// `issues(filterBy:)` and for `created:>` comparisons inside a search query.
pub fn format_since<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%z")
        .to_string()
}
