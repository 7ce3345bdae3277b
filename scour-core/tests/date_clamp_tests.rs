use chrono::{DateTime, TimeZone, Utc};
use scour_core::{CoreConfig, DateKind, Delimiter, FaultKind, FaultPolicy, Region, Sanitizer};

fn collector() -> Sanitizer {
    Sanitizer::with_policy(FaultPolicy::Collect).unwrap()
}

fn year_2020() -> (DateTime<Utc>, DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2020, 12, 31, 23, 59, 59).unwrap(),
    )
}

#[test]
fn us_slash_date_parses_to_utc_midnight() {
    let (min, max) = year_2020();
    let mut s = collector();
    let got = s
        .clamp_date("05/29/2020", max, min, DateKind::Date, Delimiter::Slash, Region::Us, false)
        .unwrap();
    assert_eq!(got, Some(Utc.with_ymd_and_hms(2020, 5, 29, 0, 0, 0).unwrap()));
    assert_eq!(s.fault_count(), 0);
}

#[test]
fn out_of_range_dates_snap_to_the_bounds() {
    let (min, max) = year_2020();
    let mut s = collector();
    let before = s
        .clamp_date("01/15/2019", max, min, DateKind::Date, Delimiter::Slash, Region::Us, false)
        .unwrap();
    assert_eq!(before, Some(min));
    let after = s
        .clamp_date("03/01/2021", max, min, DateKind::Date, Delimiter::Slash, Region::Us, false)
        .unwrap();
    assert_eq!(after, Some(max));
    assert_eq!(s.fault_count(), 0);
}

#[test]
fn blank_date_skips_without_fault() {
    let (min, max) = year_2020();
    for policy in [FaultPolicy::Throw, FaultPolicy::Collect] {
        let mut s = Sanitizer::with_policy(policy).unwrap();
        let got = s
            .clamp_date("  ", max, min, DateKind::Date, Delimiter::Slash, Region::Us, false)
            .unwrap();
        assert_eq!(got, None);
        assert_eq!(s.fault_count(), 0);
    }
}

#[test]
fn inverted_range_faults_before_parsing() {
    let (min, max) = year_2020();
    let mut s = Sanitizer::with_policy(FaultPolicy::Throw).unwrap();
    let err = s
        .clamp_date("05/29/2020", min, max, DateKind::Date, Delimiter::Slash, Region::Us, false)
        .unwrap_err();
    assert_eq!(err.kind, FaultKind::DateClamp);
    assert!(err.cause.contains("invalid range"));
}

#[test]
fn missing_literal_delimiter_is_a_fast_reject() {
    let (min, max) = year_2020();
    let mut s = collector();
    let got = s
        .clamp_date("05-29-2020", max, min, DateKind::Date, Delimiter::Slash, Region::Us, false)
        .unwrap();
    assert_eq!(got, None);
    let records = s.drain_faults();
    assert_eq!(records.len(), 1);
    assert!(records[0].cause.contains("delimiter"));
}

#[test]
fn calendar_impossible_dates_fail_the_grammar() {
    let (min, max) = year_2020();
    let mut s = collector();
    for bad in ["02/30/2020", "04/31/2020", "02/29/2021"] {
        let got = s
            .clamp_date(bad, max, min, DateKind::Date, Delimiter::Slash, Region::Us, false)
            .unwrap();
        assert_eq!(got, None, "{bad} should not parse");
    }
    assert_eq!(s.fault_count(), 3);
}

#[test]
fn leap_day_2000_is_valid() {
    let min = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
    let max = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
    let mut s = collector();
    let got = s
        .clamp_date("02/29/2000", max, min, DateKind::Date, Delimiter::Slash, Region::Us, false)
        .unwrap();
    assert_eq!(got, Some(Utc.with_ymd_and_hms(2000, 2, 29, 0, 0, 0).unwrap()));
}

#[test]
fn spain_reads_day_before_month() {
    let (min, max) = year_2020();
    let mut s = collector();
    let got = s
        .clamp_date("29/05/2020", max, min, DateKind::Date, Delimiter::Slash, Region::Spain, false)
        .unwrap();
    assert_eq!(got, Some(Utc.with_ymd_and_hms(2020, 5, 29, 0, 0, 0).unwrap()));
}

#[test]
fn china_reads_year_first_with_dots() {
    let (min, max) = year_2020();
    let mut s = collector();
    let got = s
        .clamp_date("2020.05.29", max, min, DateKind::Date, Delimiter::Dot, Region::China, false)
        .unwrap();
    assert_eq!(got, Some(Utc.with_ymd_and_hms(2020, 5, 29, 0, 0, 0).unwrap()));
}

#[test]
fn sql_server_style_datetime() {
    let (min, max) = year_2020();
    let mut s = collector();
    let got = s
        .clamp_date(
            "2020-05-29 17:45:10",
            max,
            min,
            DateKind::DateTime,
            Delimiter::Dash,
            Region::SqlServer,
            false,
        )
        .unwrap();
    assert_eq!(got, Some(Utc.with_ymd_and_hms(2020, 5, 29, 17, 45, 10).unwrap()));
}

#[test]
fn utc_instants_normalize_offsets() {
    let (min, max) = year_2020();
    let mut s = collector();
    let zulu = s
        .clamp_date(
            "2020-05-29T17:45:00Z",
            max,
            min,
            DateKind::DateTime,
            Delimiter::Utc,
            Region::Us,
            false,
        )
        .unwrap();
    assert_eq!(zulu, Some(Utc.with_ymd_and_hms(2020, 5, 29, 17, 45, 0).unwrap()));
    let offset = s
        .clamp_date(
            "2020-05-29T17:45:00+02:00",
            max,
            min,
            DateKind::DateTime,
            Delimiter::Utc,
            Region::Us,
            false,
        )
        .unwrap();
    assert_eq!(offset, Some(Utc.with_ymd_and_hms(2020, 5, 29, 15, 45, 0).unwrap()));
}

#[test]
fn twelve_hour_times_need_the_am_pm_selector() {
    let (min, max) = year_2020();
    let mut s = collector();
    let got = s
        .clamp_date(
            "5/29/2020 5:45 PM",
            max,
            min,
            DateKind::DateTime,
            Delimiter::Slash,
            Region::Us,
            true,
        )
        .unwrap();
    assert_eq!(got, Some(Utc.with_ymd_and_hms(2020, 5, 29, 17, 45, 0).unwrap()));

    let rejected = s
        .clamp_date(
            "5/29/2020 5:45 PM",
            max,
            min,
            DateKind::DateTime,
            Delimiter::Slash,
            Region::Us,
            false,
        )
        .unwrap();
    assert_eq!(rejected, None);
}

#[test]
fn unsupported_selector_combination_is_a_misconfiguration_fault() {
    let (min, max) = year_2020();
    let mut s = Sanitizer::with_policy(FaultPolicy::Throw).unwrap();
    let err = s
        .clamp_date(
            "2020/05/29",
            max,
            min,
            DateKind::Date,
            Delimiter::Slash,
            Region::SqlServer,
            false,
        )
        .unwrap_err();
    assert_eq!(err.kind, FaultKind::DateClamp);
    assert!(err.cause.contains("no date grammar"));
}

#[test]
fn eager_and_lazy_compilation_behave_identically() {
    let (min, max) = year_2020();
    let mut eager_cfg = CoreConfig::default();
    eager_cfg.patterns.compile_eagerly = true;
    let mut eager = Sanitizer::new(&eager_cfg).unwrap();
    let mut lazy = Sanitizer::new(&CoreConfig::default()).unwrap();

    for text in ["05/29/2020", "02/30/2020", "5/9/2020"] {
        let a = eager.clamp_date(text, max, min, DateKind::Date, Delimiter::Slash, Region::Us, false);
        let b = lazy.clamp_date(text, max, min, DateKind::Date, Delimiter::Slash, Region::Us, false);
        match (a, b) {
            (Ok(x), Ok(y)) => assert_eq!(x, y),
            (Err(x), Err(y)) => assert_eq!(x.kind, y.kind),
            other => panic!("eager/lazy diverged on {text:?}: {other:?}"),
        }
    }
}
