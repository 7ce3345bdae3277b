//! Date grammar descriptors.
//!
//! One table, built once, keyed by the full selector tuple
//! (kind, region, delimiter, am/pm). Each entry is pure data: a full-match
//! shape pattern plus the exact chrono templates tried in order. Bare-date
//! patterns encode calendar correctness (days per month, leap years with the
//! century exception); date-time patterns are looser shape checks and defer
//! exactness to the template parse.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::types::{DateGrammar, DateKind, Delimiter, GrammarKey, Region};

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("no date grammar for {kind:?}/{region:?}/{delimiter:?} am_pm={am_pm}")]
    Unsupported {
        kind: DateKind,
        region: Region,
        delimiter: Delimiter,
        am_pm: bool,
    },
}

/// Years in which February 29 exists: divisible by 4, excluding plain
/// century years but keeping those divisible by 400.
const LEAP_YEAR: &str = r"(?:\d{2}(?:0[48]|[2468][048]|[13579][26])|(?:[02468][048]|[13579][26])00)";

const TIME_24H: &str = r"(?:[01]?\d|2[0-3]):[0-5]\d(?::[0-5]\d)?";
const TIME_12H: &str = r"(?:0?[1-9]|1[0-2]):[0-5]\d(?::[0-5]\d)? ?(?:AM|PM)";

fn month_day(d: &str) -> String {
    format!(
        r"(?:(?:0?[13578]|1[02]){d}(?:0?[1-9]|[12]\d|3[01])|(?:0?[469]|11){d}(?:0?[1-9]|[12]\d|30)|0?2{d}(?:0?[1-9]|1\d|2[0-8]))"
    )
}

fn day_month(d: &str) -> String {
    format!(
        r"(?:(?:0?[1-9]|[12]\d|3[01]){d}(?:0?[13578]|1[02])|(?:0?[1-9]|[12]\d|30){d}(?:0?[469]|11)|(?:0?[1-9]|1\d|2[0-8]){d}0?2)"
    )
}

fn mdy_date(d: &str) -> String {
    format!(
        r"^{md}{d}\d{{4}}$|^0?2{d}29{d}{leap}$",
        md = month_day(d),
        leap = LEAP_YEAR
    )
}

fn dmy_date(d: &str) -> String {
    format!(
        r"^{dm}{d}\d{{4}}$|^29{d}0?2{d}{leap}$",
        dm = day_month(d),
        leap = LEAP_YEAR
    )
}

fn ymd_date(d: &str) -> String {
    format!(
        r"^\d{{4}}{d}{md}$|^{leap}{d}0?2{d}29$",
        md = month_day(d),
        leap = LEAP_YEAR
    )
}

fn datetime_pattern(date_shape: &str, time: &str) -> String {
    format!(r"^{date_shape} {time}$")
}

fn date_grammar(pattern: String, formats: Vec<String>) -> DateGrammar {
    DateGrammar { pattern, formats }
}

/// Date-part chrono template for a region with a single-char delimiter.
fn date_format(region: Region, c: char) -> String {
    match region {
        Region::Us => format!("%m{c}%d{c}%Y"),
        Region::Spain => format!("%d{c}%m{c}%Y"),
        Region::China | Region::SqlServer => format!("%Y{c}%m{c}%d"),
    }
}

/// Loose date-part shape for date-times.
fn date_shape(region: Region, d: &str) -> String {
    match region {
        Region::Us | Region::Spain => format!(r"\d{{1,2}}{d}\d{{1,2}}{d}\d{{4}}"),
        Region::China | Region::SqlServer => format!(r"\d{{4}}{d}\d{{1,2}}{d}\d{{1,2}}"),
    }
}

/// Calendar-correct bare-date pattern for a region.
fn strict_date(region: Region, d: &str) -> String {
    match region {
        Region::Us => mdy_date(d),
        Region::Spain => dmy_date(d),
        Region::China | Region::SqlServer => ymd_date(d),
    }
}

static TABLE: Lazy<HashMap<GrammarKey, DateGrammar>> = Lazy::new(|| {
    let mut table = HashMap::new();

    for region in [Region::Us, Region::Spain, Region::China] {
        for (delimiter, c) in [
            (Delimiter::Slash, '/'),
            (Delimiter::Dash, '-'),
            (Delimiter::Dot, '.'),
        ] {
            let d = regex::escape(&c.to_string());
            let df = date_format(region, c);

            table.insert(
                GrammarKey {
                    kind: DateKind::Date,
                    region,
                    delimiter,
                    am_pm: false,
                },
                date_grammar(strict_date(region, &d), vec![df.clone()]),
            );
            table.insert(
                GrammarKey {
                    kind: DateKind::DateTime,
                    region,
                    delimiter,
                    am_pm: false,
                },
                date_grammar(
                    datetime_pattern(&date_shape(region, &d), TIME_24H),
                    vec![format!("{df} %H:%M:%S"), format!("{df} %H:%M")],
                ),
            );
            table.insert(
                GrammarKey {
                    kind: DateKind::DateTime,
                    region,
                    delimiter,
                    am_pm: true,
                },
                date_grammar(
                    datetime_pattern(&date_shape(region, &d), TIME_12H),
                    vec![format!("{df} %I:%M:%S %p"), format!("{df} %I:%M %p")],
                ),
            );
        }
    }

    // Fixed SQL-Server style: dash-delimited, zero-padded friendly, seconds
    // required on the date-time form.
    table.insert(
        GrammarKey {
            kind: DateKind::Date,
            region: Region::SqlServer,
            delimiter: Delimiter::Dash,
            am_pm: false,
        },
        date_grammar(ymd_date("-"), vec!["%Y-%m-%d".to_string()]),
    );
    table.insert(
        GrammarKey {
            kind: DateKind::DateTime,
            region: Region::SqlServer,
            delimiter: Delimiter::Dash,
            am_pm: false,
        },
        date_grammar(
            r"^\d{4}-\d{1,2}-\d{1,2} [0-2]?\d:[0-5]\d:[0-5]\d$".to_string(),
            vec!["%Y-%m-%d %H:%M:%S".to_string()],
        ),
    );

    // ISO-8601 instants. Region-independent; inserted for every region so
    // the lookup stays a plain map over the full selector tuple.
    for region in [Region::Us, Region::Spain, Region::China, Region::SqlServer] {
        table.insert(
            GrammarKey {
                kind: DateKind::Date,
                region,
                delimiter: Delimiter::Utc,
                am_pm: false,
            },
            date_grammar(ymd_date("-"), vec!["%Y-%m-%d".to_string()]),
        );
        table.insert(
            GrammarKey {
                kind: DateKind::DateTime,
                region,
                delimiter: Delimiter::Utc,
                am_pm: false,
            },
            date_grammar(
                r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(?::\d{2})?(?:Z|[+-]\d{2}:?\d{2})?$"
                    .to_string(),
                vec![
                    "%Y-%m-%dT%H:%M:%SZ".to_string(),
                    "%Y-%m-%dT%H:%M:%S%z".to_string(),
                    "%Y-%m-%dT%H:%M:%S".to_string(),
                    "%Y-%m-%d %H:%M:%S".to_string(),
                    "%Y-%m-%dT%H:%MZ".to_string(),
                    "%Y-%m-%dT%H:%M".to_string(),
                    "%Y-%m-%d %H:%M".to_string(),
                ],
            ),
        );
    }

    table
});

/// Bare dates carry no time, so am/pm never selects a different grammar.
fn canonical(key: GrammarKey) -> GrammarKey {
    match key.kind {
        DateKind::Date => GrammarKey {
            am_pm: false,
            ..key
        },
        DateKind::DateTime => key,
    }
}

/// Look up the descriptor for a selector tuple.
pub fn lookup(key: GrammarKey) -> Option<&'static DateGrammar> {
    TABLE.get(&canonical(key))
}

/// Like [`lookup`], but an unsupported combination is a typed error the
/// caller can report as a misconfiguration.
pub fn require(key: GrammarKey) -> Result<&'static DateGrammar, GrammarError> {
    lookup(key).ok_or(GrammarError::Unsupported {
        kind: key.kind,
        region: key.region,
        delimiter: key.delimiter,
        am_pm: key.am_pm,
    })
}

/// Every descriptor in the table, for eager pattern compilation.
pub fn entries() -> impl Iterator<Item = (&'static GrammarKey, &'static DateGrammar)> {
    TABLE.iter()
}
