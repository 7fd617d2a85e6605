//! Time helpers shared across crates

use chrono::{SecondsFormat, Utc};

/// Current UTC timestamp as an RFC 3339 string with millisecond
/// precision and `Z` suffix. Attribute stamps ("Cancelled On",
/// "Rescheduled On") are stored in this form.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_now_iso_round_trips() {
        let stamp = now_iso();
        let parsed = DateTime::parse_from_rfc3339(&stamp);
        assert!(parsed.is_ok(), "now_iso must produce valid RFC 3339");
        assert!(stamp.ends_with('Z'));
    }
}
