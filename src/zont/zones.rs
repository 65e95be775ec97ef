//! Zone resolution.
//!
//! Resolution runs three tiers: exact alias hit, exact IANA identifier hit,
//! then a ranked fuzzy match over the whole candidate catalog. The fuzzy tier
//! never silently accepts a weak match; below the confidence threshold it
//! fails with the top-ranked candidates as suggestions. Ranking is fully
//! deterministic (score descending, then lexical order), independent of any
//! map iteration order.

use chrono_tz::{Tz, TZ_VARIANTS};
use log::debug;
use once_cell::sync::Lazy;

use crate::aliases;
use crate::error::{Result, ZontError};

/// Scores at or above this clear the fuzzy tier (0-1000 scale). Substring
/// containment starts at 750, so any containment hit resolves; pure
/// edit-distance matches have to be close.
const ACCEPT_SCORE: u32 = 700;

const MAX_SUGGESTIONS: usize = 5;

/// Every completion candidate: all IANA identifiers plus the alias keys,
/// lexically sorted. Built once per process.
static CATALOG: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut names: Vec<&'static str> = TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
    names.extend(aliases::alias_keys());
    names.sort_unstable();
    names.dedup();
    names
});

/// A resolved timezone: the user's original token plus the canonical zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRef {
    token: String,
    canonical: Tz,
    via_alias: bool,
}

impl ZoneRef {
    pub fn zone(&self) -> Tz {
        self.canonical
    }

    /// The display label: the user's token when it was a recognized alias,
    /// else the canonical identifier.
    pub fn label(&self) -> &str {
        if self.via_alias {
            &self.token
        } else {
            self.canonical.name()
        }
    }
}

/// The combined alias + identifier catalog, lexically sorted. Exposed for
/// interactive autocompletion.
pub fn candidates() -> &'static [&'static str] {
    &CATALOG
}

/// Resolves a zone token to a verified canonical zone.
pub fn resolve(token: &str) -> Result<ZoneRef> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(ZontError::UnknownZone {
            input: token.to_string(),
            suggestions: Vec::new(),
        });
    }

    // Tier 1: alias table.
    if let Some(name) = aliases::alias_lookup(trimmed) {
        debug!("resolved {:?} via alias table to {}", trimmed, name);
        if let Ok(canonical) = name.parse::<Tz>() {
            return Ok(ZoneRef {
                token: trimmed.to_string(),
                canonical,
                via_alias: true,
            });
        }
    }

    // Tier 2: exact identifier.
    if let Some(tz) = TZ_VARIANTS
        .iter()
        .find(|tz| tz.name().eq_ignore_ascii_case(trimmed))
    {
        debug!("resolved {:?} as identifier {}", trimmed, tz.name());
        return Ok(ZoneRef {
            token: trimmed.to_string(),
            canonical: *tz,
            via_alias: false,
        });
    }

    // Tier 3: ranked fuzzy match.
    let ranked = rank_candidates(trimmed);
    if let Some((best, score)) = ranked.first() {
        if *score >= ACCEPT_SCORE {
            if let Some(canonical) = zone_for_candidate(best) {
                debug!("fuzzy-resolved {:?} to {} (score {})", trimmed, best, score);
                return Ok(ZoneRef {
                    token: trimmed.to_string(),
                    canonical,
                    via_alias: false,
                });
            }
        }
    }

    Err(ZontError::UnknownZone {
        input: trimmed.to_string(),
        suggestions: ranked
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(name, _)| name.to_string())
            .collect(),
    })
}

/// Scores every catalog entry against the input and returns them ranked:
/// score descending, ties broken by lexical order.
fn rank_candidates(input: &str) -> Vec<(&'static str, u32)> {
    let needle = input.to_ascii_lowercase();
    let mut ranked: Vec<(&'static str, u32)> = CATALOG
        .iter()
        .map(|name| (*name, similarity(&needle, name)))
        .filter(|(_, score)| *score > 0)
        .collect();
    ranked.sort_by(|(name_a, score_a), (name_b, score_b)| {
        score_b.cmp(score_a).then_with(|| name_a.cmp(name_b))
    });
    ranked
}

/// A fuzzy-matched candidate may be an alias key; follow it to its zone.
fn zone_for_candidate(name: &str) -> Option<Tz> {
    match aliases::alias_lookup(name) {
        Some(target) => target.parse().ok(),
        None => name.parse().ok(),
    }
}

/// Similarity on a 0-1000 scale. The needle must already be lowercase.
///
/// Exact match scores 1000; substring containment 750 plus up to 250 for
/// coverage of the candidate; everything else by normalized edit distance
/// against both the full identifier and its final path segment (so a typo'd
/// city name still ranks the right zone).
fn similarity(needle: &str, candidate: &str) -> u32 {
    let hay = candidate.to_ascii_lowercase();
    if hay == needle {
        return 1000;
    }
    if hay.contains(needle) {
        return 750 + (250 * needle.len() / hay.len()) as u32;
    }
    let segment = hay.rsplit('/').next().unwrap_or(&hay);
    edit_score(needle, &hay).max(edit_score(needle, segment))
}

/// Levenshtein distance mapped onto 0-1000, where 1000 is identical.
fn edit_score(a: &str, b: &str) -> u32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0;
    }
    let dist = levenshtein(a, b);
    (1000 * (max_len - dist) / max_len) as u32
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let substitute = prev + usize::from(ca != *cb);
            prev = row[j + 1];
            row[j + 1] = substitute.min(prev + 1).min(row[j] + 1);
        }
    }

    row[b_chars.len()]
}
