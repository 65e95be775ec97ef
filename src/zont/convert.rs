//! Conversion and day-shift computation.
//!
//! The converter attaches a [`ClockSpec`] to the source zone's calendar
//! rules, converts the resulting absolute instant into the target zone, and
//! derives the day offset from the calendar-date difference. All DST and
//! historical-offset rules are delegated to the zone database; no manual
//! offset arithmetic happens here.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::debug;

use crate::error::{Result, ZontError};
use crate::parse::ClockSpec;
use crate::zones::ZoneRef;

/// The outcome of a single conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub spec: ClockSpec,
    pub from: ZoneRef,
    pub to: ZoneRef,
    pub source_local: DateTime<Tz>,
    pub target_local: DateTime<Tz>,
    /// Target local date minus source local date, in days. Signed and
    /// unclamped; typical usage yields -1, 0, or +1.
    pub day_offset: i64,
}

pub fn convert(spec: ClockSpec, from: ZoneRef, to: ZoneRef) -> Result<Conversion> {
    let source_local = materialize(spec, from.zone())?;
    let target_local = source_local.with_timezone(&to.zone());
    let day_offset = (target_local.date_naive() - source_local.date_naive()).num_days();
    debug!(
        "{} -> {} (day offset {})",
        source_local, target_local, day_offset
    );

    Ok(Conversion {
        spec,
        from,
        to,
        source_local,
        target_local,
        day_offset,
    })
}

/// Turns a spec into an absolute instant expressed in `zone`. `Now` samples
/// the real current moment; `Wall` uses the zone's current date.
fn materialize(spec: ClockSpec, zone: Tz) -> Result<DateTime<Tz>> {
    match spec {
        ClockSpec::Now => Ok(Utc::now().with_timezone(&zone)),
        ClockSpec::Wall { hour, minute } => {
            let today = Utc::now().with_timezone(&zone).date_naive();
            let naive = today.and_hms_opt(hour, minute, 0).ok_or_else(|| {
                ZontError::InvalidTimeValue(format!("{:02}:{:02}", hour, minute))
            })?;
            local_instant(naive, zone)
        }
        ClockSpec::Calendar(naive) => local_instant(naive, zone),
    }
}

// Ambiguous local times (DST fall-back) take the earlier instant;
// nonexistent ones (spring-forward gap) have no valid mapping in the zone.
fn local_instant(naive: NaiveDateTime, zone: Tz) -> Result<DateTime<Tz>> {
    zone.from_local_datetime(&naive).earliest().ok_or_else(|| {
        ZontError::InvalidTimeValue(format!(
            "{} does not exist in {}",
            naive.format("%Y-%m-%d %H:%M"),
            zone.name()
        ))
    })
}
