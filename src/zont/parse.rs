//! Free-form time token parsing.
//!
//! The grammar is deliberately small: `now`, a 12-hour time with an am/pm
//! suffix, a 24-hour `HH:MM`, or a full `YYYY-MM-DD HH:MM`. Unlike zone
//! resolution there is no fuzzy tier here; a token either matches a shape
//! exactly or fails.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Result, ZontError};

/// A parsed time token, not yet attached to any zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSpec {
    /// Resolved to the real current instant at conversion time, not at parse
    /// time, so an interactive session never converts a stale sample.
    Now,
    /// A wall-clock time on the source zone's current date.
    Wall { hour: u32, minute: u32 },
    /// An explicit date and time.
    Calendar(NaiveDateTime),
}

/// Parses one of the recognized shapes. Leading and trailing whitespace is
/// trimmed; out-of-range values are rejected, never clamped.
pub fn parse_time(input: &str) -> Result<ClockSpec> {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case("now") {
        return Ok(ClockSpec::Now);
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    match words.as_slice() {
        [token] => parse_wall(token),
        [date, time] => parse_calendar(trimmed, date, time),
        _ => Err(ZontError::MalformedTime(trimmed.to_string())),
    }
}

fn parse_wall(token: &str) -> Result<ClockSpec> {
    let malformed = || ZontError::MalformedTime(token.to_string());

    let (body, meridiem) = split_meridiem(token);

    let (hour_part, minute_part) = match body.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (body, None),
    };

    // Shape first: 1-2 digit hour, exactly 2 digit minute.
    if !is_digits(hour_part) || hour_part.len() > 2 {
        return Err(malformed());
    }
    if let Some(m) = minute_part {
        if !is_digits(m) || m.len() != 2 {
            return Err(malformed());
        }
    }

    let hour: u32 = hour_part.parse().map_err(|_| malformed())?;
    let minute: u32 = match minute_part {
        Some(m) => m.parse().map_err(|_| malformed())?,
        None => 0,
    };

    match meridiem {
        Some(is_pm) => {
            if !(1..=12).contains(&hour) {
                return Err(ZontError::InvalidTimeValue(format!(
                    "hour {} must be 1-12 with an am/pm suffix",
                    hour
                )));
            }
            check_minute(minute)?;
            let hour = hour % 12 + if is_pm { 12 } else { 0 };
            Ok(ClockSpec::Wall { hour, minute })
        }
        None => {
            // A bare hour without a suffix is ambiguous between 12- and
            // 24-hour readings; reject rather than guess.
            if minute_part.is_none() {
                return Err(malformed());
            }
            if hour > 23 {
                return Err(ZontError::InvalidTimeValue(format!("hour {}", hour)));
            }
            check_minute(minute)?;
            Ok(ClockSpec::Wall { hour, minute })
        }
    }
}

fn parse_calendar(full: &str, date: &str, time: &str) -> Result<ClockSpec> {
    let malformed = || ZontError::MalformedTime(full.to_string());

    let mut parts = date.split('-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d), None)
            if is_digits(y)
                && y.len() == 4
                && is_digits(m)
                && m.len() == 2
                && is_digits(d)
                && d.len() == 2 =>
        {
            (y, m, d)
        }
        _ => return Err(malformed()),
    };

    let (hour_part, minute_part) = time.split_once(':').ok_or_else(malformed)?;
    if !is_digits(hour_part)
        || hour_part.len() > 2
        || !is_digits(minute_part)
        || minute_part.len() != 2
    {
        return Err(malformed());
    }

    let year: i32 = year.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    let hour: u32 = hour_part.parse().map_err(|_| malformed())?;
    let minute: u32 = minute_part.parse().map_err(|_| malformed())?;

    let datetime = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| {
            ZontError::InvalidTimeValue(format!("date {}-{:02}-{:02}", year, month, day))
        })?
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| ZontError::InvalidTimeValue(format!("time {}:{:02}", hour, minute)))?;

    Ok(ClockSpec::Calendar(datetime))
}

fn split_meridiem(token: &str) -> (&str, Option<bool>) {
    if token.len() >= 2 && token.is_char_boundary(token.len() - 2) {
        let (body, suffix) = token.split_at(token.len() - 2);
        if suffix.eq_ignore_ascii_case("am") {
            return (body, Some(false));
        }
        if suffix.eq_ignore_ascii_case("pm") {
            return (body, Some(true));
        }
    }
    (token, None)
}

fn check_minute(minute: u32) -> Result<()> {
    if minute > 59 {
        return Err(ZontError::InvalidTimeValue(format!("minute {}", minute)));
    }
    Ok(())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(input: &str) -> (u32, u32) {
        match parse_time(input) {
            Ok(ClockSpec::Wall { hour, minute }) => (hour, minute),
            other => panic!("expected wall time for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn now_is_case_insensitive_and_trimmed() {
        assert_eq!(parse_time("now").unwrap(), ClockSpec::Now);
        assert_eq!(parse_time("NOW").unwrap(), ClockSpec::Now);
        assert_eq!(parse_time("  Now  ").unwrap(), ClockSpec::Now);
    }

    #[test]
    fn twelve_hour_arithmetic() {
        for h in 1u32..=12 {
            let (am_hour, _) = wall(&format!("{}am", h));
            assert_eq!(am_hour, h % 12);
            let (pm_hour, _) = wall(&format!("{}pm", h));
            assert_eq!(pm_hour, h % 12 + 12);
        }
    }

    #[test]
    fn twelve_hour_with_minutes() {
        assert_eq!(wall("3:30pm"), (15, 30));
        assert_eq!(wall("11:05am"), (11, 5));
        assert_eq!(wall("12:00am"), (0, 0));
        assert_eq!(wall("12:00PM"), (12, 0));
    }

    #[test]
    fn twenty_four_hour() {
        assert_eq!(wall("15:30"), (15, 30));
        assert_eq!(wall("03:30"), (3, 30));
        assert_eq!(wall("0:00"), (0, 0));
        assert_eq!(wall("23:59"), (23, 59));
    }

    #[test]
    fn whitespace_is_trimmed_not_guessed() {
        assert_eq!(wall("  3pm  "), (15, 0));
        assert!(matches!(
            parse_time("3 pm"),
            Err(ZontError::MalformedTime(_))
        ));
    }

    #[test]
    fn full_datetime() {
        let spec = parse_time("2024-01-15 15:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        assert_eq!(spec, ClockSpec::Calendar(expected));
    }

    #[test]
    fn full_datetime_tolerates_inner_whitespace_runs() {
        assert!(matches!(
            parse_time("2024-01-15    09:05"),
            Ok(ClockSpec::Calendar(_))
        ));
    }

    #[test]
    fn malformed_inputs() {
        for input in ["banana", "", "3", "15", "3:5", "1:2:3pm", "2024-1-15 10:00"] {
            assert!(
                matches!(parse_time(input), Err(ZontError::MalformedTime(_))),
                "expected MalformedTime for {:?}",
                input
            );
        }
    }

    #[test]
    fn out_of_range_values() {
        for input in ["25:99", "24:00", "12:60", "13pm", "0am", "2024-02-30 10:00"] {
            assert!(
                matches!(parse_time(input), Err(ZontError::InvalidTimeValue(_))),
                "expected InvalidTimeValue for {:?}",
                input
            );
        }
    }

    #[test]
    fn leap_day_is_valid() {
        assert!(matches!(
            parse_time("2024-02-29 12:00"),
            Ok(ClockSpec::Calendar(_))
        ));
    }
}
