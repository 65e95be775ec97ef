//! Fixed timezone abbreviation table.
//!
//! Ambiguous abbreviations resolve to a single designated zone: CST is North
//! American Central (not China Standard Time), IST is India (not Ireland or
//! Israel), GMT is London, AEST is Sydney. The table is compiled in and not
//! user-extensible; daylight variants map to the same zone as their standard
//! siblings and the zone database decides the effective offset.

pub const ZONE_ALIASES: &[(&str, &str)] = &[
    ("EST", "America/New_York"),
    ("EDT", "America/New_York"),
    ("PST", "America/Los_Angeles"),
    ("PDT", "America/Los_Angeles"),
    ("CST", "America/Chicago"),
    ("CDT", "America/Chicago"),
    ("MST", "America/Denver"),
    ("MDT", "America/Denver"),
    ("GMT", "Europe/London"),
    ("BST", "Europe/London"),
    ("UTC", "UTC"),
    ("CET", "Europe/Paris"),
    ("CEST", "Europe/Paris"),
    ("JST", "Asia/Tokyo"),
    ("KST", "Asia/Seoul"),
    ("IST", "Asia/Kolkata"),
    ("AEST", "Australia/Sydney"),
    ("AEDT", "Australia/Sydney"),
    ("NZST", "Pacific/Auckland"),
    ("NZDT", "Pacific/Auckland"),
];

/// Case-insensitive alias lookup. Full IANA identifiers are not aliases and
/// return `None` here.
pub fn alias_lookup(token: &str) -> Option<&'static str> {
    ZONE_ALIASES
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(token))
        .map(|(_, zone)| *zone)
}

/// The alias keys, for autocomplete and fuzzy candidate sets.
pub fn alias_keys() -> impl Iterator<Item = &'static str> {
    ZONE_ALIASES.iter().map(|(abbr, _)| *abbr)
}
