//! Character-set reductions. Every reduction is idempotent and lossy by
//! contract; the pipeline always bounds length first, then reduces, to stay
//! conservative against pathological-length input.

use grammars::fold;
use grammars::types::{DateKind, Delimiter};

use crate::services::bounder::{take_utf16_prefix, DATE_TIME_CAP};

/// NFKC compatibility composition, then strip non-spacing combining marks.
/// Neutralizes confusable look-alike sequences while keeping base letters.
pub fn normalize_unicode(value: &str) -> String {
    fold::nfkc_strip_marks(value)
}

/// NFKC, fold the fixed Latin diacritic table, then drop every character
/// outside printable ASCII [0x20, 0x7E]. Callers must accept lossy
/// reduction.
pub fn to_ascii_only(value: &str) -> String {
    fold::to_printable_ascii(value)
}

/// Which numeric-adjacent characters survive [`to_ascii_numbers_only`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericCharset {
    pub allow_spaces: bool,
    pub allow_parens: bool,
    pub allow_negative_sign: bool,
    pub allow_comma_and_dot: bool,
}

/// ASCII-reduce, then keep only digits plus the separators enabled by the
/// flags.
pub fn to_ascii_numbers_only(value: &str, charset: NumericCharset) -> String {
    to_ascii_only(value)
        .chars()
        .filter(|c| match c {
            '0'..='9' => true,
            ' ' => charset.allow_spaces,
            '(' | ')' => charset.allow_parens,
            '-' => charset.allow_negative_sign,
            ',' | '.' => charset.allow_comma_and_dot,
            _ => false,
        })
        .collect()
}

/// Keep only the characters a date/time in the given delimiter family can
/// contain: digits plus a delimiter-specific allow-list, never one generic
/// filter. Bounds to the longest supported literal format first. AM/PM
/// letters are kept (uppercased) only when `allow_am_pm` is set.
pub fn to_ascii_date_time_only(
    value: &str,
    delimiter: Delimiter,
    kind: DateKind,
    allow_am_pm: bool,
) -> String {
    let bounded = take_utf16_prefix(value, DATE_TIME_CAP);
    let mut out = String::with_capacity(bounded.len());
    // Time-of-day separators are only part of the repertoire for date-times.
    let time = kind == DateKind::DateTime;
    for ch in fold::nfkc(&bounded).chars() {
        let keep = match delimiter {
            Delimiter::Slash => {
                matches!(ch, '0'..='9' | '/') || (time && matches!(ch, ':' | ' '))
            }
            Delimiter::Dash => {
                matches!(ch, '0'..='9' | '-') || (time && matches!(ch, ':' | ' '))
            }
            Delimiter::Dot => {
                matches!(ch, '0'..='9' | '.') || (time && matches!(ch, ':' | ' '))
            }
            Delimiter::Utc => {
                matches!(ch, '0'..='9' | ':' | '+' | '-' | ' ')
                    || matches!(ch.to_ascii_uppercase(), 'T' | 'Z')
            }
        };
        if keep {
            out.push(match delimiter {
                Delimiter::Utc => ch.to_ascii_uppercase(),
                _ => ch,
            });
            continue;
        }
        if allow_am_pm && matches!(ch.to_ascii_uppercase(), 'A' | 'M' | 'P') {
            out.push(ch.to_ascii_uppercase());
        }
    }
    out
}

/// Decode raw bytes with substitution-on-error and report whether the
/// substitution marker appeared — true means the byte sequence was never
/// valid in that encoding.
pub fn detect_malformed_bytes(raw: &[u8], as_ascii: bool) -> bool {
    if as_ascii {
        return raw.iter().any(|b| *b > 0x7F);
    }
    String::from_utf8_lossy(raw).contains('\u{FFFD}')
}
