//! Filename validation: bounding, malicious-marker stripping, dot-count
//! rules, ASCII reduction, and the filename grammar.

use grammars::restricted::{FILENAME_MALICIOUS_MARKERS, RESERVED_DEVICE_STEMS};

use crate::context::SanitizerContext;
use crate::services::bounder::bound;
use crate::services::faults::{Fault, FaultKind};
use crate::services::normalizer::to_ascii_only;

/// Reduce an untrusted filename to a safe form, or fault.
///
/// Any malicious marker (embedded NUL, NBSP, bidi override marks, literal
/// "%00"/"% 00") faults the call even though the stripped name is computed —
/// a name that needed cleansing is never trusted. The grammar additionally
/// forbids reserved device stems, control characters, path specials, and a
/// trailing space or dot.
pub fn sanitize_filename(
    ctx: &mut SanitizerContext,
    name: &str,
    max_len: usize,
    disallow_multiple_dots: bool,
) -> Result<Option<String>, Fault> {
    let Some(bounded) = bound(ctx, name, max_len)? else {
        return Ok(None);
    };

    let mut cleansed = bounded.clone();
    for marker in FILENAME_MALICIOUS_MARKERS {
        if cleansed.contains(marker) {
            cleansed = cleansed.replace(marker, "");
        }
    }
    if cleansed != bounded {
        ctx.report(FaultKind::Filename, name, "malicious marker removed")?;
        return Ok(None);
    }

    let dots = cleansed.matches('.').count();
    if dots == 0 {
        ctx.report(FaultKind::Filename, name, "no extension")?;
        return Ok(None);
    }
    if dots > 1 && disallow_multiple_dots {
        ctx.report(FaultKind::Filename, name, "multiple dots not allowed")?;
        return Ok(None);
    }

    let ascii = to_ascii_only(&cleansed);
    let matched = match ctx.filename_matches(&ascii) {
        Ok(m) => m,
        Err(e) => {
            ctx.report(FaultKind::Filename, name, format!("grammar error: {e}"))?;
            return Ok(None);
        }
    };
    if !matched {
        ctx.report(FaultKind::Filename, name, "filename grammar mismatch")?;
        return Ok(None);
    }

    let stem = ascii.split('.').next().unwrap_or_default();
    if RESERVED_DEVICE_STEMS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(stem))
    {
        ctx.report(FaultKind::Filename, name, "reserved device name")?;
        return Ok(None);
    }

    Ok(Some(ascii))
}
