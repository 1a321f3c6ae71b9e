use chrono::{DateTime, Local, NaiveDateTime};

/// Format of `created` timestamps in the task document
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time as a task timestamp
pub fn now_timestamp() -> String {
    Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp. Naive ISO-8601 (with or without fraction) is read
/// as local time; offset-carrying strings are converted to local time.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Compact age of a task: "now", "5m", "3h", "2d". Empty if unparseable.
pub fn time_ago(created: &str, now: NaiveDateTime) -> String {
    let Some(created) = parse_timestamp(created) else {
        return String::new();
    };
    let secs = now.signed_duration_since(created).num_seconds();
    if secs < 60 {
        "now".to_string()
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86_400)
    }
}

/// `time_ago` against the current local time
pub fn time_ago_now(created: &str) -> String {
    time_ago(created, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn buckets() {
        let created = "2025-03-10T12:00:00.000000";
        assert_eq!(time_ago(created, at("2025-03-10T12:00:59")), "now");
        assert_eq!(time_ago(created, at("2025-03-10T12:05:00")), "5m");
        assert_eq!(time_ago(created, at("2025-03-10T15:59:00")), "3h");
        assert_eq!(time_ago(created, at("2025-03-12T12:00:00")), "2d");
    }

    #[test]
    fn future_timestamp_is_now() {
        assert_eq!(time_ago("2025-03-10T12:00:00", at("2025-03-10T11:00:00")), "now");
    }

    #[test]
    fn unparseable_is_empty() {
        assert_eq!(time_ago("", at("2025-03-10T12:00:00")), "");
        assert_eq!(time_ago("yesterday", at("2025-03-10T12:00:00")), "");
    }

    #[test]
    fn offset_timestamps_parse() {
        assert!(parse_timestamp("2025-03-10T12:00:00+02:00").is_some());
        assert!(parse_timestamp("2025-03-10T12:00:00Z").is_some());
    }

    #[test]
    fn now_timestamp_has_microseconds() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "2025-03-10T12:00:00.000000".len());
        assert!(parse_timestamp(&ts).is_some());
    }
}
