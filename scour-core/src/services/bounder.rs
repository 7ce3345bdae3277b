//! Length bounding. Always the first stage of every pipeline: hostile input
//! is cut down to size before any normalization or pattern work runs.

use crate::context::SanitizerContext;
use crate::services::faults::{Fault, FaultKind};

/// Longest literal date/time format the pipeline supports; date reductions
/// bound to this before anything else.
pub(crate) const DATE_TIME_CAP: usize = 33;

/// First `max_units` UTF-16 code units of `s`, never splitting a character:
/// a char whose units would straddle the cap is dropped whole.
pub(crate) fn take_utf16_prefix(s: &str, max_units: usize) -> String {
    let mut units = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.len_utf16();
        if units + w > max_units {
            break;
        }
        units += w;
        out.push(ch);
    }
    out
}

/// Cap `value` at `max_len` UTF-16 code units.
///
/// Blank or whitespace-only input is a no-op success (`Ok(None)`), never a
/// fault. A cap of zero is a caller contract violation and faults; the
/// `usize` parameter makes the negative caps of other hosts unrepresentable.
pub fn bound(
    ctx: &mut SanitizerContext,
    value: &str,
    max_len: usize,
) -> Result<Option<String>, Fault> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    if max_len == 0 {
        ctx.report(FaultKind::LengthBound, value, "length cap of zero")?;
        return Ok(None);
    }
    Ok(Some(take_utf16_prefix(value, max_len)))
}
