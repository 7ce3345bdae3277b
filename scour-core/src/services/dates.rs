//! Date/time range clamping.
//!
//! Pipeline: literal-delimiter fast reject, charset reduction (bounds to the
//! longest supported format), grammar full-match from the descriptor table,
//! exact template parse (first success wins), then clamping on an absolute
//! UTC timeline — never by local wall clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::debug;

use grammars::dates::require;
use grammars::types::{DateKind, Delimiter, GrammarKey, Region};

use crate::context::SanitizerContext;
use crate::services::faults::{Fault, FaultKind};
use crate::services::normalizer::to_ascii_date_time_only;
use crate::services::range::Bounds;

#[allow(clippy::too_many_arguments)]
pub fn clamp_date(
    ctx: &mut SanitizerContext,
    text: &str,
    max: DateTime<Utc>,
    min: DateTime<Utc>,
    kind: DateKind,
    delimiter: Delimiter,
    region: Region,
    expect_am_pm: bool,
) -> Result<Option<DateTime<Utc>>, Fault> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    // Comparison happens on the absolute UTC timeline, min and max included.
    let Some(bounds) = Bounds::checked(min, max) else {
        ctx.report(
            FaultKind::DateClamp,
            text,
            format!("invalid range: min {min} > max {max}"),
        )?;
        return Ok(None);
    };
    // Fast reject before any reduction or pattern work.
    if let Some(c) = delimiter.literal() {
        if !text.contains(c) {
            ctx.report(
                FaultKind::DateClamp,
                text,
                format!("expected delimiter {c:?} not present"),
            )?;
            return Ok(None);
        }
    }

    // Bare dates carry no time-of-day, so am/pm never varies their grammar.
    let key = GrammarKey {
        kind,
        region,
        delimiter,
        am_pm: kind == DateKind::DateTime && expect_am_pm,
    };
    let grammar = match require(key) {
        Ok(g) => g,
        Err(e) => {
            ctx.report(FaultKind::DateClamp, text, e.to_string())?;
            return Ok(None);
        }
    };

    let reduced = to_ascii_date_time_only(text, delimiter, kind, key.am_pm);
    let matched = match ctx.date_pattern_matches(key, &grammar.pattern, &reduced) {
        Ok(m) => m,
        Err(e) => {
            ctx.report(FaultKind::DateClamp, text, format!("grammar error: {e}"))?;
            return Ok(None);
        }
    };
    if !matched {
        ctx.report(
            FaultKind::DateClamp,
            text,
            format!("value does not match the {region:?}/{delimiter:?} grammar"),
        )?;
        return Ok(None);
    }

    let parsed = grammar
        .formats
        .iter()
        .find_map(|template| parse_template(kind, template, &reduced));
    let Some(value) = parsed else {
        ctx.report(FaultKind::DateClamp, text, "no exact format template matched")?;
        return Ok(None);
    };

    let snapped = bounds.clamp(value);
    if snapped != value {
        debug!(%value, %snapped, "date clamped into range");
    }
    Ok(Some(snapped))
}

/// Parse one exact template into a UTC instant. Offset-bearing templates
/// normalize through the offset; naive ones are taken as already-UTC.
fn parse_template(kind: DateKind, template: &str, text: &str) -> Option<DateTime<Utc>> {
    match kind {
        DateKind::Date => NaiveDate::parse_from_str(text, template)
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
        DateKind::DateTime => {
            if template.contains("%z") {
                DateTime::parse_from_str(text, template)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc))
            } else {
                NaiveDateTime::parse_from_str(text, template)
                    .ok()
                    .map(|n| n.and_utc())
            }
        }
    }
}
