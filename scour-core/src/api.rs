// src/api.rs
use anyhow::Result;
use chrono::{DateTime, Utc};

use grammars::types::{CompareMode, DateKind, Delimiter, Region, SeparatorStyle};

use crate::config::{CoreConfig, FaultPolicy};
use crate::context::SanitizerContext;
use crate::services::compare::{self, CompareOp};
use crate::services::faults::{Fault, FaultLog, FaultRecord};
use crate::services::{bounder, dates, filename, normalizer, numbers};

/// The top-level sanitizer. Owns its context (fault policy, fault log,
/// pattern cache) exclusively — independent instances never share state.
///
/// Every operation takes `&mut self`: the pipeline is synchronous and
/// single-writer by construction, which is the whole concurrency model.
pub struct Sanitizer {
    ctx: SanitizerContext,
}

impl Sanitizer {
    pub fn new(cfg: &CoreConfig) -> Result<Self> {
        Ok(Self {
            ctx: SanitizerContext::new(cfg)?,
        })
    }

    /// Shorthand for the common case: default configuration with an explicit
    /// fault policy.
    pub fn with_policy(policy: FaultPolicy) -> Result<Self> {
        Self::new(&CoreConfig::with_policy(policy))
    }

    // ---------- length bounding ----------

    /// Cap `value` at `max_len` UTF-16 code units. Blank input skips.
    pub fn bound(&mut self, value: &str, max_len: usize) -> Result<Option<String>, Fault> {
        bounder::bound(&mut self.ctx, value, max_len)
    }

    // ---------- reductions (pure, never fault) ----------

    pub fn normalize_unicode(&self, value: &str) -> String {
        normalizer::normalize_unicode(value)
    }

    pub fn to_ascii_only(&self, value: &str) -> String {
        normalizer::to_ascii_only(value)
    }

    pub fn to_ascii_numbers_only(
        &self,
        value: &str,
        charset: normalizer::NumericCharset,
    ) -> String {
        normalizer::to_ascii_numbers_only(value, charset)
    }

    pub fn to_ascii_date_time_only(
        &self,
        value: &str,
        delimiter: Delimiter,
        kind: DateKind,
        allow_am_pm: bool,
    ) -> String {
        normalizer::to_ascii_date_time_only(value, delimiter, kind, allow_am_pm)
    }

    pub fn detect_malformed_bytes(&self, raw: &[u8], as_ascii: bool) -> bool {
        normalizer::detect_malformed_bytes(raw, as_ascii)
    }

    // ---------- range clamps ----------

    pub fn clamp_integer(
        &mut self,
        text: &str,
        max: i64,
        min: i64,
    ) -> Result<Option<i64>, Fault> {
        numbers::clamp_integer(&mut self.ctx, text, max, min)
    }

    pub fn clamp_decimal(
        &mut self,
        text: &str,
        max: f64,
        min: f64,
        allow_negative: bool,
        style: SeparatorStyle,
    ) -> Result<Option<f64>, Fault> {
        numbers::clamp_decimal(&mut self.ctx, text, max, min, allow_negative, style)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn clamp_date(
        &mut self,
        text: &str,
        max: DateTime<Utc>,
        min: DateTime<Utc>,
        kind: DateKind,
        delimiter: Delimiter,
        region: Region,
        expect_am_pm: bool,
    ) -> Result<Option<DateTime<Utc>>, Fault> {
        dates::clamp_date(
            &mut self.ctx,
            text,
            max,
            min,
            kind,
            delimiter,
            region,
            expect_am_pm,
        )
    }

    // ---------- allow-list comparison ----------

    pub fn starts_with(
        &mut self,
        subject: &str,
        reference: &str,
        bound_len: usize,
        mode: CompareMode,
    ) -> Result<Option<String>, Fault> {
        compare::compare(
            &mut self.ctx,
            subject,
            reference,
            bound_len,
            mode,
            CompareOp::StartsWith,
            false,
        )
    }

    pub fn starts_with_ignore_case(
        &mut self,
        subject: &str,
        reference: &str,
        bound_len: usize,
        mode: CompareMode,
    ) -> Result<Option<String>, Fault> {
        compare::compare(
            &mut self.ctx,
            subject,
            reference,
            bound_len,
            mode,
            CompareOp::StartsWith,
            true,
        )
    }

    pub fn ends_with(
        &mut self,
        subject: &str,
        reference: &str,
        bound_len: usize,
        mode: CompareMode,
    ) -> Result<Option<String>, Fault> {
        compare::compare(
            &mut self.ctx,
            subject,
            reference,
            bound_len,
            mode,
            CompareOp::EndsWith,
            false,
        )
    }

    pub fn ends_with_ignore_case(
        &mut self,
        subject: &str,
        reference: &str,
        bound_len: usize,
        mode: CompareMode,
    ) -> Result<Option<String>, Fault> {
        compare::compare(
            &mut self.ctx,
            subject,
            reference,
            bound_len,
            mode,
            CompareOp::EndsWith,
            true,
        )
    }

    pub fn equals(
        &mut self,
        subject: &str,
        reference: &str,
        bound_len: usize,
        mode: CompareMode,
    ) -> Result<Option<String>, Fault> {
        compare::compare(
            &mut self.ctx,
            subject,
            reference,
            bound_len,
            mode,
            CompareOp::Equals,
            false,
        )
    }

    /// Case-insensitive equality. On a match the subject is replaced by the
    /// reference literal's exact casing, whatever the subject's casing was.
    pub fn equals_ignore_case(
        &mut self,
        subject: &str,
        reference: &str,
        bound_len: usize,
        mode: CompareMode,
    ) -> Result<Option<String>, Fault> {
        compare::compare(
            &mut self.ctx,
            subject,
            reference,
            bound_len,
            mode,
            CompareOp::Equals,
            true,
        )
    }

    // ---------- restricted-list review ----------

    pub fn review_ignore_case(
        &mut self,
        subject: &str,
        restricted: &[&str],
        bound_len: usize,
        check_common_chars: bool,
        check_hex_escapes: bool,
    ) -> Result<Option<String>, Fault> {
        compare::review_ignore_case(
            &mut self.ctx,
            subject,
            restricted,
            bound_len,
            check_common_chars,
            check_hex_escapes,
        )
    }

    // ---------- filename validation ----------

    pub fn sanitize_filename(
        &mut self,
        name: &str,
        max_len: usize,
        disallow_multiple_dots: bool,
    ) -> Result<Option<String>, Fault> {
        filename::sanitize_filename(&mut self.ctx, name, max_len, disallow_multiple_dots)
    }

    // ---------- fault log access ----------

    pub fn policy(&self) -> FaultPolicy {
        self.ctx.policy()
    }

    pub fn faults(&self) -> &FaultLog {
        self.ctx.faults()
    }

    pub fn fault_count(&self) -> usize {
        self.ctx.faults().len()
    }

    /// Take every record out of the log. The log may retain fragments of
    /// sensitive input, so consumers are expected to drain or clear it after
    /// inspection.
    pub fn drain_faults(&mut self) -> Vec<FaultRecord> {
        self.ctx.drain_faults()
    }

    pub fn clear_faults(&mut self) {
        self.ctx.clear_faults()
    }
}
