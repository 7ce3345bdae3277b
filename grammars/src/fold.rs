//! Character-level normalization primitives used for reductions and
//! case-insensitive matching.
//!
//! Policy:
//! - NFKC compatibility composition before any comparison or reduction.
//! - Drop non-spacing combining marks after composition.
//! - Fold the fixed Latin diacritic table to ASCII base letters.
//! - Drop common zero-width characters (ZWS/ZWNJ/ZWJ/WJ/BOM).
//!
//! Keep this logic single-sourced to avoid drift between the reductions and
//! the comparators.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Apply NFKC compatibility composition.
pub fn nfkc(s: &str) -> String {
    s.nfkc().collect()
}

/// NFKC, then strip non-spacing combining marks. Neutralizes confusable
/// combining sequences while keeping base letters.
pub fn nfkc_strip_marks(s: &str) -> String {
    s.nfkc().filter(|c| !is_combining_mark(*c)).collect()
}

/// True for the zero-width characters dropped everywhere.
pub fn is_zero_width(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}'
    )
}

/// Fold a Latin letter with a diacritic to its unaccented ASCII base letter.
/// Returns `None` for characters outside the fixed table.
pub fn fold_diacritic(c: char) -> Option<char> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        // ő/Ő carry the double acute
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ő' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ő' => 'O',
        // ű/Ű carry the double acute
        'ù' | 'ú' | 'û' | 'ü' | 'ű' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ű' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        _ => return None,
    };
    Some(folded)
}

/// NFKC-normalize, fold diacritics, then drop everything outside printable
/// ASCII [0x20, 0x7E]. Lossy on purpose; idempotent.
pub fn to_printable_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.nfkc() {
        let ch = fold_diacritic(ch).unwrap_or(ch);
        if ('\u{20}'..='\u{7E}').contains(&ch) {
            out.push(ch);
        }
    }
    out
}

/// Normalize text for case-insensitive rule matching: NFKC, lowercase,
/// drop controls and zero-width characters.
pub fn for_matching(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.nfkc() {
        if ch.is_control() || is_zero_width(ch) {
            continue;
        }
        for lc in ch.to_lowercase() {
            out.push(lc);
        }
    }
    out
}
