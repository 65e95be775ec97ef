//! Plain-text result formatting.
//!
//! Produces `3:00 PM EST → 12:00 PM PST`, with a ` (+N day)` note when the
//! target lands on a different calendar date. Colorization belongs to the
//! CLI layer; the core string stays plain so tests and the prompt session
//! can reuse it.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

use crate::convert::Conversion;

pub fn format_conversion(conv: &Conversion) -> String {
    let mut out = format!(
        "{} {} → {} {}",
        clock12(&conv.source_local),
        conv.from.label(),
        clock12(&conv.target_local),
        conv.to.label(),
    );
    if let Some(note) = day_note(conv.day_offset) {
        out.push(' ');
        out.push_str(&note);
    }
    out
}

/// 12-hour clock without a leading zero on the hour.
pub fn clock12(time: &DateTime<Tz>) -> String {
    let (is_pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// The day-shift annotation, or `None` when the dates match. Singular for a
/// single day, plural otherwise.
pub fn day_note(day_offset: i64) -> Option<String> {
    if day_offset == 0 {
        return None;
    }
    let unit = if day_offset.abs() == 1 { "day" } else { "days" };
    Some(format!("({:+} {})", day_offset, unit))
}
