use chrono::{Local, NaiveDateTime};

/// Source of the wall-clock value that `time` and `date` commands print.
///
/// Resolved at render time, so a long-lived command list keeps showing the
/// current time on every pass.
pub trait WallClock {
    fn now(&self) -> NaiveDateTime;
}

/// The local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl WallClock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Short time, e.g. `3:07 PM`.
pub fn format_time(now: &NaiveDateTime) -> String {
    now.format("%-I:%M %p").to_string()
}

/// Short date, e.g. `Oct 07, 2026`.
pub fn format_date(now: &NaiveDateTime) -> String {
    now.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 7)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .unwrap()
    }

    #[test]
    fn test_format_time_is_twelve_hour() {
        assert_eq!(format_time(&at(15, 7)), "3:07 PM");
        assert_eq!(format_time(&at(0, 30)), "12:30 AM");
    }

    #[test]
    fn test_format_date_pads_day() {
        assert_eq!(format_date(&at(9, 0)), "Oct 07, 2026");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(at(1, 2));
        assert_eq!(clock.now(), at(1, 2));
    }
}
