//! Separator conventions for decimal parsing.

use crate::types::{NumberConvention, SeparatorStyle};

/// Rare numeric-adjacent tokens stripped before reduction. Order matters:
/// multi-character tokens are removed before single characters.
pub const NUMERIC_NOISE_TOKENS: &[&str] = &["NaN", "Infinity", "%", "\u{2030}", "+"];

/// The grouping/decimal characters for one style. Total mapping; the closed
/// enumeration is the whole point (no auto-detection).
pub fn convention(style: SeparatorStyle) -> NumberConvention {
    match style {
        SeparatorStyle::CommaGroupDotDecimal => NumberConvention {
            group: ',',
            decimal: '.',
        },
        SeparatorStyle::DotGroupCommaDecimal => NumberConvention {
            group: '.',
            decimal: ',',
        },
        SeparatorStyle::SpaceGroupDotDecimal => NumberConvention {
            group: ' ',
            decimal: '.',
        },
        SeparatorStyle::SpaceGroupCommaDecimal => NumberConvention {
            group: ' ',
            decimal: ',',
        },
    }
}
