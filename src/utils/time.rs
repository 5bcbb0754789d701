//! Time utilities: parsing HH:MM, resolving the `now` punch token.

use chrono::{Local, NaiveTime};

/// Token that stands for the current wall-clock time.
pub const NOW: &str = "now";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn now() -> NaiveTime {
    Local::now().time()
}

/// Turn a punch argument into the value to store.
///
/// `now` becomes `now_time` as `HH:MM`; anything else is kept verbatim.
pub fn resolve_punch_value(input: &str, now_time: NaiveTime) -> String {
    if input == NOW {
        format_time(now_time)
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_token_uses_given_time() {
        let t = NaiveTime::from_hms_opt(7, 5, 59).unwrap();
        assert_eq!(resolve_punch_value("now", t), "07:05");
    }

    #[test]
    fn explicit_value_is_kept_verbatim() {
        let t = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
        assert_eq!(resolve_punch_value("9h30", t), "9h30");
        assert_eq!(resolve_punch_value("NOW", t), "NOW");
    }

    #[test]
    fn parse_time_accepts_hh_mm_only() {
        assert!(parse_time("09:30").is_some());
        assert!(parse_time("9h30").is_none());
        assert!(parse_time("25:00").is_none());
    }
}
