//! List-based comparison: allow-list checks against caller-supplied
//! reference values, and restricted-list review against known-bad literal
//! substrings.

use tracing::debug;

use grammars::fold;
use grammars::restricted::{COMMON_DANGEROUS_SEQUENCES, HEX_ESCAPE_TOKENS};
use grammars::types::CompareMode;

use crate::context::SanitizerContext;
use crate::services::bounder::bound;
use crate::services::faults::{Fault, FaultKind};
use crate::services::normalizer::{normalize_unicode, to_ascii_only};

/// Three-way outcome of a comparison. `SkippedBlank` is the "blank input is
/// a no-op success" rule made visible in the type: it is distinct from
/// `Rejected`, which means the check actually failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
    SkippedBlank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompareOp {
    StartsWith,
    EndsWith,
    Equals,
}

impl CompareOp {
    fn label(self) -> &'static str {
        match self {
            CompareOp::StartsWith => "starts-with",
            CompareOp::EndsWith => "ends-with",
            CompareOp::Equals => "equals",
        }
    }
}

fn reduce(value: &str, mode: CompareMode) -> String {
    match mode {
        CompareMode::Ascii => to_ascii_only(value),
        CompareMode::Unicode => normalize_unicode(value),
    }
}

/// Allow-list engine behind `starts_with`/`ends_with`/`equals` and their
/// case-insensitive variants.
///
/// An empty reference is a misconfiguration fault. A blank subject skips.
/// On a match the subject is replaced by the canonical form: the normalized
/// subject for the prefix/suffix checks, the reference literal's exact
/// casing for `equals` — canonicalizing accepted input to the expected
/// representation is the point. A mismatch faults, so `Verdict::Rejected`
/// never escapes this module under the Throw policy.
pub(crate) fn compare(
    ctx: &mut SanitizerContext,
    subject: &str,
    reference: &str,
    bound_len: usize,
    mode: CompareMode,
    op: CompareOp,
    ignore_case: bool,
) -> Result<Option<String>, Fault> {
    if reference.is_empty() {
        ctx.report(FaultKind::ListCompare, subject, "empty reference value")?;
        return Ok(None);
    }

    let mut canonical = None;
    let verdict = match bound(ctx, subject, bound_len)? {
        None => Verdict::SkippedBlank,
        Some(bounded) => {
            let norm_subject = reduce(&bounded, mode);
            let norm_reference = reduce(reference, mode);
            let (s, r) = if ignore_case {
                (
                    fold::for_matching(&norm_subject),
                    fold::for_matching(&norm_reference),
                )
            } else {
                (norm_subject.clone(), norm_reference.clone())
            };
            let hit = match op {
                CompareOp::StartsWith => s.starts_with(&r),
                CompareOp::EndsWith => s.ends_with(&r),
                CompareOp::Equals => s == r,
            };
            if hit {
                canonical = Some(match op {
                    CompareOp::Equals => reference.to_string(),
                    _ => norm_subject,
                });
                Verdict::Accepted
            } else {
                Verdict::Rejected
            }
        }
    };

    match verdict {
        Verdict::SkippedBlank => Ok(None),
        Verdict::Accepted => Ok(canonical),
        Verdict::Rejected => {
            ctx.report(
                FaultKind::ListCompare,
                subject,
                format!("{} check failed against reference", op.label()),
            )?;
            Ok(None)
        }
    }
}

/// Strip every occurrence of every pattern, case-insensitively. Operates on
/// ASCII-safe text, so byte indices from the lowercased copy are stable.
fn strip_all_ascii_ci(text: &str, patterns: &[&str]) -> String {
    let mut out = text.to_string();
    for pat in patterns {
        let pat = to_ascii_only(pat).to_ascii_lowercase();
        if pat.is_empty() {
            continue;
        }
        loop {
            let hay = out.to_ascii_lowercase();
            match hay.find(&pat) {
                Some(pos) => out.replace_range(pos..pos + pat.len(), ""),
                None => break,
            }
        }
    }
    out
}

/// Review a subject against restricted literal substrings.
///
/// Two optional passes: the built-in dangerous control/format/zero-width
/// sequences are stripped from a Unicode-normalized copy, then the built-in
/// hex/escape tokens (prepended to the caller's restricted values) are
/// stripped from an ASCII-reduced copy. Textual shrinkage in either pass
/// flags a finding. Any cleansing faults the call, but the cleansed value is
/// still returned — fail-open-with-cleansing, not fail-closed.
pub fn review_ignore_case(
    ctx: &mut SanitizerContext,
    subject: &str,
    restricted: &[&str],
    bound_len: usize,
    check_common_chars: bool,
    check_hex_escapes: bool,
) -> Result<Option<String>, Fault> {
    let Some(bounded) = bound(ctx, subject, bound_len)? else {
        return Ok(None);
    };

    let mut findings: Vec<&str> = Vec::new();

    let mut current = normalize_unicode(&bounded);
    if check_common_chars {
        let before = current.chars().count();
        for seq in COMMON_DANGEROUS_SEQUENCES {
            if current.contains(seq) {
                current = current.replace(seq, "");
            }
        }
        if current.chars().count() < before {
            findings.push("dangerous character sequence removed");
        }
    }

    let mut ascii = to_ascii_only(&current);
    let before = ascii.chars().count();
    if check_hex_escapes {
        ascii = strip_all_ascii_ci(&ascii, HEX_ESCAPE_TOKENS);
    }
    ascii = strip_all_ascii_ci(&ascii, restricted);
    if ascii.chars().count() < before {
        findings.push("restricted value removed");
    }

    if findings.is_empty() {
        return Ok(Some(bounded));
    }
    debug!(removed = findings.len(), "subject cleansed during review");
    ctx.report(FaultKind::ListCompare, subject, findings.join("; "))?;
    Ok(Some(ascii))
}
