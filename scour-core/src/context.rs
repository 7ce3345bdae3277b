//! The per-instance sanitizer context: fault policy, fault log, and the
//! optional eagerly-compiled pattern cache.
//!
//! One context per top-level [`crate::Sanitizer`]; components borrow it,
//! never copy it. Two sanitizer instances are fully isolated — there is no
//! process-global state anywhere in the pipeline.

use anyhow::{Context as _, Result};
use regex::Regex;
use std::collections::HashMap;

use grammars::restricted::FILENAME_PATTERN;
use grammars::types::GrammarKey;

use crate::config::{CoreConfig, FaultPolicy};
use crate::services::faults::{truncate_snippet, Fault, FaultKind, FaultLog, FaultRecord};

pub struct SanitizerContext {
    policy: FaultPolicy,
    log: FaultLog,
    date_patterns: HashMap<GrammarKey, Regex>,
    filename_pattern: Option<Regex>,
}

impl SanitizerContext {
    pub fn new(cfg: &CoreConfig) -> Result<Self> {
        let mut date_patterns = HashMap::new();
        let mut filename_pattern = None;
        if cfg.patterns.compile_eagerly {
            for (key, grammar) in grammars::dates::entries() {
                let re = Regex::new(&grammar.pattern)
                    .with_context(|| format!("compiling date grammar {key:?}"))?;
                date_patterns.insert(*key, re);
            }
            filename_pattern =
                Some(Regex::new(FILENAME_PATTERN).context("compiling filename grammar")?);
        }
        Ok(Self {
            policy: cfg.faults.policy,
            log: FaultLog::new(cfg.faults.max_entries),
            date_patterns,
            filename_pattern,
        })
    }

    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    pub fn faults(&self) -> &FaultLog {
        &self.log
    }

    pub fn clear_faults(&mut self) {
        self.log.clear();
    }

    pub fn drain_faults(&mut self) -> Vec<FaultRecord> {
        self.log.drain()
    }

    /// The single funnel every failed operation goes through, exactly once
    /// per failure. Under Throw the typed fault aborts the caller via `?`;
    /// under Collect it is appended to the log and the caller continues with
    /// a best-effort result. Never both.
    pub(crate) fn report(
        &mut self,
        kind: FaultKind,
        raw_value: &str,
        cause: impl Into<String>,
    ) -> Result<(), Fault> {
        let cause = cause.into();
        tracing::warn!(
            kind = %kind,
            cause = %cause,
            snippet = %truncate_snippet(raw_value, kind.snippet_cap()),
            "sanitization fault"
        );
        match self.policy {
            FaultPolicy::Throw => Err(Fault {
                kind,
                snippet: truncate_snippet(raw_value, kind.snippet_cap()),
                cause,
            }),
            FaultPolicy::Collect => {
                self.log.append(FaultRecord::new(kind, raw_value, &cause));
                Ok(())
            }
        }
    }

    /// Match `text` against the grammar pattern for `key`, using the eager
    /// cache when present and compiling ad hoc otherwise. Identical results
    /// either way.
    pub(crate) fn date_pattern_matches(
        &self,
        key: GrammarKey,
        pattern: &str,
        text: &str,
    ) -> Result<bool, regex::Error> {
        if let Some(re) = self.date_patterns.get(&key) {
            return Ok(re.is_match(text));
        }
        Ok(Regex::new(pattern)?.is_match(text))
    }

    pub(crate) fn filename_matches(&self, text: &str) -> Result<bool, regex::Error> {
        if let Some(re) = &self.filename_pattern {
            return Ok(re.is_match(text));
        }
        Ok(Regex::new(FILENAME_PATTERN)?.is_match(text))
    }
}
