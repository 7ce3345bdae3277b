use serde::{Deserialize, Serialize};

/// Regional parsing convention for dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Month/day/year ordering.
    Us,
    /// Day/month/year ordering.
    Spain,
    /// Year/month/day ordering.
    China,
    /// Fixed `YYYY-MM-DD HH:MM:SS` style.
    SqlServer,
}

/// Delimiter family a date string is expected to use. `Utc` is not a single
/// character but the fixed ISO-8601 token set (T, Z, ':', '+', '-', ' ').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    Slash,
    Dash,
    Dot,
    Utc,
}

impl Delimiter {
    /// The literal separator character, when there is exactly one.
    pub fn literal(self) -> Option<char> {
        match self {
            Delimiter::Slash => Some('/'),
            Delimiter::Dash => Some('-'),
            Delimiter::Dot => Some('.'),
            Delimiter::Utc => None,
        }
    }
}

/// Whether a value is a bare calendar date or a date with a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateKind {
    Date,
    DateTime,
}

/// Grouping/decimal separator convention for decimal parsing. Exactly one
/// convention is applied per call; there is no auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorStyle {
    CommaGroupDotDecimal,
    DotGroupCommaDecimal,
    SpaceGroupDotDecimal,
    SpaceGroupCommaDecimal,
}

/// Character repertoire a comparison normalizes into before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareMode {
    /// Reduce both sides to printable ASCII (diacritics folded) first.
    Ascii,
    /// NFKC-normalize both sides, keeping non-ASCII letters.
    Unicode,
}

/// Lookup key into the date grammar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrammarKey {
    pub kind: DateKind,
    pub region: Region,
    pub delimiter: Delimiter,
    pub am_pm: bool,
}

/// A data-only date grammar: a full-match shape pattern plus the exact
/// parse templates tried in order (first success wins).
#[derive(Debug, Clone)]
pub struct DateGrammar {
    pub pattern: String,
    pub formats: Vec<String>,
}

/// Grouping and decimal characters for one [`SeparatorStyle`].
#[derive(Debug, Clone, Copy)]
pub struct NumberConvention {
    pub group: char,
    pub decimal: char,
}
