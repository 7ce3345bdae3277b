//! Scour: an input-sanitization pipeline.
//!
//! Takes untrusted, possibly hostile strings (or byte buffers) and reduces
//! them to values that are safe to store, compare, or log. Every public
//! operation bounds length first, then normalizes, then runs its specific
//! check or parse; every failure funnels through one fault policy — raise
//! immediately (Throw) or record for later inspection (Collect).
//!
//! This crate decides whether and how to accept or reduce a value. It never
//! performs output escaping or encoding.

pub mod api;
pub mod config;
pub mod context;
pub mod services;

pub use api::Sanitizer;
pub use config::{CoreConfig, FaultPolicy, FaultsConfig, PatternsConfig};
pub use context::SanitizerContext;
pub use services::compare::Verdict;
pub use services::faults::{Fault, FaultKind, FaultLog, FaultRecord};
pub use services::normalizer::NumericCharset;
pub use services::range::Bounds;

// Selector enumerations live in the data-only `grammars` crate; re-exported
// so callers need only one dependency.
pub use grammars::types::{CompareMode, DateKind, Delimiter, Region, SeparatorStyle};
