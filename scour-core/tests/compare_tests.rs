use scour_core::{CompareMode, FaultKind, FaultPolicy, Sanitizer};

fn collector() -> Sanitizer {
    Sanitizer::with_policy(FaultPolicy::Collect).unwrap()
}

#[test]
fn equals_ignore_case_canonicalizes_to_the_reference_casing() {
    let mut s = collector();
    let got = s
        .equals_ignore_case("JOHN SMITH", "John Smith", 32, CompareMode::Ascii)
        .unwrap();
    assert_eq!(got.as_deref(), Some("John Smith"));
    assert_eq!(s.fault_count(), 0);
}

#[test]
fn equals_is_case_sensitive_without_the_variant() {
    let mut s = Sanitizer::with_policy(FaultPolicy::Throw).unwrap();
    let err = s
        .equals("JOHN SMITH", "John Smith", 32, CompareMode::Ascii)
        .unwrap_err();
    assert_eq!(err.kind, FaultKind::ListCompare);
}

#[test]
fn ascii_mode_folds_diacritics_before_comparing() {
    let mut s = collector();
    let got = s
        .equals("Renée", "Renee", 16, CompareMode::Ascii)
        .unwrap();
    assert_eq!(got.as_deref(), Some("Renee"));
}

#[test]
fn unicode_mode_keeps_non_ascii_letters() {
    let mut s = collector();
    let got = s
        .equals("Renée", "Renée", 16, CompareMode::Unicode)
        .unwrap();
    assert_eq!(got.as_deref(), Some("Renée"));
    // Under Unicode mode the folded form is NOT equal.
    assert_eq!(s.equals("Renée", "Renee", 16, CompareMode::Unicode).unwrap(), None);
    assert_eq!(s.fault_count(), 1);
}

#[test]
fn prefix_and_suffix_checks_return_the_normalized_subject() {
    let mut s = collector();
    let got = s
        .starts_with("report-2020-05.pdf", "report-", 64, CompareMode::Ascii)
        .unwrap();
    assert_eq!(got.as_deref(), Some("report-2020-05.pdf"));

    let got = s
        .ends_with_ignore_case("report-2020-05.PDF", ".pdf", 64, CompareMode::Ascii)
        .unwrap();
    assert_eq!(got.as_deref(), Some("report-2020-05.PDF"));
}

#[test]
fn empty_reference_is_a_misconfiguration() {
    let mut s = collector();
    assert_eq!(s.equals("value", "", 16, CompareMode::Ascii).unwrap(), None);
    let records = s.drain_faults();
    assert_eq!(records.len(), 1);
    assert!(records[0].cause.contains("empty reference"));
}

#[test]
fn blank_subject_skips_under_both_policies() {
    for policy in [FaultPolicy::Throw, FaultPolicy::Collect] {
        let mut s = Sanitizer::with_policy(policy).unwrap();
        assert_eq!(s.equals("   ", "ref", 16, CompareMode::Ascii).unwrap(), None);
        assert_eq!(
            s.review_ignore_case("   ", &["x"], 16, true, true).unwrap(),
            None
        );
        assert_eq!(s.fault_count(), 0);
    }
}

#[test]
fn mismatch_faults_instead_of_returning_false() {
    let mut s = Sanitizer::with_policy(FaultPolicy::Throw).unwrap();
    let err = s
        .starts_with("other.txt", "report-", 64, CompareMode::Ascii)
        .unwrap_err();
    assert_eq!(err.kind, FaultKind::ListCompare);
}

#[test]
fn review_passes_clean_subjects_through() {
    let mut s = collector();
    let got = s
        .review_ignore_case("perfectly ordinary text", &["secret"], 64, true, true)
        .unwrap();
    assert_eq!(got.as_deref(), Some("perfectly ordinary text"));
    assert_eq!(s.fault_count(), 0);
}

#[test]
fn review_strips_restricted_values_and_still_returns_the_cleansed_text() {
    let mut s = collector();
    let got = s
        .review_ignore_case("please DROP TABLE users now", &["drop table"], 64, true, true)
        .unwrap()
        .unwrap();
    assert!(!got.to_lowercase().contains("drop table"), "got: {got}");
    // Fail-open with cleansing: the value comes back, but the call faulted.
    assert_eq!(s.fault_count(), 1);
}

#[test]
fn review_strips_hex_escape_tokens() {
    let mut s = collector();
    let got = s
        .review_ignore_case("payload 0x41 %00 end", &[], 64, false, true)
        .unwrap()
        .unwrap();
    assert!(!got.contains("0x"));
    assert!(!got.contains("%00"));
    assert_eq!(s.fault_count(), 1);
}

#[test]
fn builtin_only_hits_still_fault() {
    // Conservative by design: cleansing triggered solely by the built-in
    // dangerous-sequence list is reported like any other finding.
    let mut s = collector();
    let got = s
        .review_ignore_case("hello\u{200B}world", &[], 64, true, false)
        .unwrap();
    assert_eq!(got.as_deref(), Some("helloworld"));
    assert_eq!(s.fault_count(), 1);

    let mut t = Sanitizer::with_policy(FaultPolicy::Throw).unwrap();
    assert!(t
        .review_ignore_case("hello\u{200B}world", &[], 64, true, false)
        .is_err());
}

#[test]
fn review_without_either_check_only_strips_caller_values() {
    let mut s = collector();
    let got = s
        .review_ignore_case("keep 0x41 marker", &[], 64, false, false)
        .unwrap();
    assert_eq!(got.as_deref(), Some("keep 0x41 marker"));
    assert_eq!(s.fault_count(), 0);
}
