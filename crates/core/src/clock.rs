use chrono::{Local, NaiveDateTime};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the wall-clock instant stamped onto readings.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_to_second_resolution() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_milli_opt(9, 5, 2, 750)
            .unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-07 09:05:02");
        assert_eq!(format_timestamp(FixedClock(ts).now()), "2024-03-07 09:05:02");
    }

    #[test]
    fn system_clock_matches_layout() {
        let s = format_timestamp(SystemClock.now());
        assert!(NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(s.len(), 19);
    }
}
