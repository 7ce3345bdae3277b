//! Numeric range clamping. Parse under one explicit separator convention,
//! then snap into the caller's [min, max] — clamping is a hard floor and
//! ceiling, never a rejection.

use grammars::numbers::{convention, NUMERIC_NOISE_TOKENS};
use grammars::types::SeparatorStyle;
use tracing::debug;

use crate::context::SanitizerContext;
use crate::services::faults::{Fault, FaultKind};
use crate::services::normalizer::{to_ascii_numbers_only, NumericCharset};
use crate::services::range::Bounds;

/// Parse `text` as an integer and clamp it into [min, max].
///
/// Blank input is a no-op success. A range where `min > max` is itself a
/// fault, reported rather than silently corrected.
pub fn clamp_integer(
    ctx: &mut SanitizerContext,
    text: &str,
    max: i64,
    min: i64,
) -> Result<Option<i64>, Fault> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let Some(bounds) = Bounds::checked(min, max) else {
        ctx.report(
            FaultKind::NumberClamp,
            text,
            format!("invalid range: min {min} > max {max}"),
        )?;
        return Ok(None);
    };
    let reduced = to_ascii_numbers_only(
        text,
        NumericCharset {
            allow_negative_sign: true,
            ..Default::default()
        },
    );
    match reduced.parse::<i64>() {
        Ok(value) => Ok(Some(snap("integer", value, &bounds))),
        Err(e) => {
            ctx.report(
                FaultKind::NumberClamp,
                text,
                format!("integer parse failed: {e}"),
            )?;
            Ok(None)
        }
    }
}

/// Parse `text` as a decimal under exactly one separator convention — no
/// auto-detection — and clamp it into [min, max].
pub fn clamp_decimal(
    ctx: &mut SanitizerContext,
    text: &str,
    max: f64,
    min: f64,
    allow_negative: bool,
    style: SeparatorStyle,
) -> Result<Option<f64>, Fault> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    // Also refuses NaN endpoints, which are unordered.
    let Some(bounds) = Bounds::checked(min, max) else {
        ctx.report(
            FaultKind::NumberClamp,
            text,
            format!("invalid range: min {min} > max {max}"),
        )?;
        return Ok(None);
    };
    // A disallowed sign is rejected, not silently stripped.
    if !allow_negative && trimmed.starts_with('-') {
        ctx.report(FaultKind::NumberClamp, text, "negative sign not allowed")?;
        return Ok(None);
    }

    // Rare numeric-adjacent tokens go first, before reduction.
    let mut stripped = trimmed.to_string();
    for token in NUMERIC_NOISE_TOKENS {
        if stripped.contains(token) {
            stripped = stripped.replace(token, "");
        }
    }

    let conv = convention(style);
    let reduced = to_ascii_numbers_only(
        &stripped,
        NumericCharset {
            allow_spaces: conv.group == ' ',
            allow_negative_sign: true,
            allow_comma_and_dot: true,
            ..Default::default()
        },
    );
    // Drop grouping, then rewrite the decimal separator to '.'.
    let mut numeric = reduced.replace(conv.group, "");
    if conv.decimal != '.' {
        numeric = numeric.replace(conv.decimal, ".");
    }

    match numeric.parse::<f64>() {
        Ok(value) => Ok(Some(snap("decimal", value, &bounds))),
        Err(e) => {
            ctx.report(
                FaultKind::NumberClamp,
                text,
                format!("decimal parse failed: {e}"),
            )?;
            Ok(None)
        }
    }
}

fn snap<T: PartialOrd + Copy + std::fmt::Display>(label: &str, value: T, bounds: &Bounds<T>) -> T {
    let snapped = bounds.clamp(value);
    if snapped < value {
        debug!(%value, ceiling = %bounds.max, "{label} clamped to ceiling");
    } else if snapped > value {
        debug!(%value, floor = %bounds.min, "{label} clamped to floor");
    }
    snapped
}
