//! services/faults.rs
//! The fault taxonomy and the per-instance fault log.
//!
//! Every failed operation in the pipeline funnels through exactly one
//! [`crate::context::SanitizerContext::report`] call; this module supplies
//! the record, log, and typed error that call works with.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Operation category a fault was raised by. Each category carries its own
/// snippet cap so log entries never retain more of a hostile payload than
/// needed to recognize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    LengthBound,
    Normalize,
    NumberClamp,
    DateClamp,
    ListCompare,
    Filename,
}

impl FaultKind {
    /// Maximum characters of the offending value kept in a record.
    pub fn snippet_cap(self) -> usize {
        match self {
            FaultKind::LengthBound => 5,
            FaultKind::Normalize => 10,
            FaultKind::NumberClamp => 10,
            // Longest supported literal date format.
            FaultKind::DateClamp => 33,
            FaultKind::ListCompare => 15,
            FaultKind::Filename => 15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FaultKind::LengthBound => "length_bound",
            FaultKind::Normalize => "normalize",
            FaultKind::NumberClamp => "number_clamp",
            FaultKind::DateClamp => "date_clamp",
            FaultKind::ListCompare => "list_compare",
            FaultKind::Filename => "filename",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Typed sanitizer fault raised under [`crate::config::FaultPolicy::Throw`].
/// Carries the category, the truncated snippet, and the cause text.
#[derive(Debug, Clone, Error)]
#[error("{kind} fault: {cause} (input: {snippet:?})")]
pub struct Fault {
    pub kind: FaultKind,
    pub snippet: String,
    pub cause: String,
}

/// A recorded failure, keyed by a unique id in the [`FaultLog`].
///
/// The snippet is the offending value truncated to the category cap; the
/// invariant `snippet.chars().count() <= kind.snippet_cap()` holds for every
/// record ever appended.
#[derive(Debug, Clone, Serialize)]
pub struct FaultRecord {
    pub id: Uuid,
    pub kind: FaultKind,
    pub snippet: String,
    pub cause: String,
    pub recorded_at: DateTime<Utc>,
}

impl FaultRecord {
    pub(crate) fn new(kind: FaultKind, raw_value: &str, cause: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            snippet: truncate_snippet(raw_value, kind.snippet_cap()),
            cause: cause.to_string(),
            recorded_at: Utc::now(),
        }
    }
}

/// Truncate an offending value to `cap` characters for logging.
pub(crate) fn truncate_snippet(s: &str, cap: usize) -> String {
    s.chars().take(cap).collect()
}

/// Per-instance record of collected faults. Append-only, capacity-capped,
/// cleared explicitly by the caller (it may retain fragments of sensitive
/// input). Insertion order is irrelevant; ids are unique.
#[derive(Debug)]
pub struct FaultLog {
    entries: HashMap<Uuid, FaultRecord>,
    max_entries: usize,
}

impl FaultLog {
    pub(crate) fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries,
        }
    }

    /// Append a record. Appends beyond the capacity cap are dropped; an
    /// unbounded log would undo the length-cap resource model.
    pub(crate) fn append(&mut self, record: FaultRecord) {
        if self.entries.len() >= self.max_entries {
            tracing::warn!(
                kind = %record.kind,
                max_entries = self.max_entries,
                "fault log full, dropping record"
            );
            return;
        }
        self.entries.insert(record.id, record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&FaultRecord> {
        self.entries.get(id)
    }

    pub fn records(&self) -> impl Iterator<Item = &FaultRecord> {
        self.entries.values()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn drain(&mut self) -> Vec<FaultRecord> {
        self.entries.drain().map(|(_, r)| r).collect()
    }

    /// JSON view of the log for inspection or shipping to an external sink.
    pub fn export(&self) -> serde_json::Value {
        let records: Vec<_> = self.entries.values().collect();
        json!({ "faults": records, "count": records.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippets_respect_category_caps() {
        let long = "a".repeat(100);
        for kind in [
            FaultKind::LengthBound,
            FaultKind::Normalize,
            FaultKind::NumberClamp,
            FaultKind::DateClamp,
            FaultKind::ListCompare,
            FaultKind::Filename,
        ] {
            let rec = FaultRecord::new(kind, &long, "cause");
            assert_eq!(rec.snippet.chars().count(), kind.snippet_cap());
        }
    }

    #[test]
    fn truncation_is_char_boundary_safe() {
        assert_eq!(truncate_snippet("åäöåäöåäöåäö", 5), "åäöåä");
    }

    #[test]
    fn log_drops_appends_beyond_capacity() {
        let mut log = FaultLog::new(2);
        for _ in 0..5 {
            log.append(FaultRecord::new(FaultKind::Normalize, "x", "cause"));
        }
        assert_eq!(log.len(), 2);
    }
}
