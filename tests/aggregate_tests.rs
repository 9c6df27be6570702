use test_reporter::record::record_model::{RawCaseRecord, RawIssue, RawSuiteRecord};
use test_reporter::summary::aggregator::{MAX_MESSAGE_CHARS, aggregate, truncate_chars};

// ============================================================================
// Helper builders
// ============================================================================

fn record(name: &str, tests: u64, failures: u64, errors: u64, skipped: u64, time: f64) -> RawSuiteRecord {
    RawSuiteRecord {
        name: Some(name.to_string()),
        tests: Some(tests.to_string()),
        failures: Some(failures.to_string()),
        errors: Some(errors.to_string()),
        skipped: Some(skipped.to_string()),
        time: Some(time.to_string()),
        cases: Vec::new(),
    }
}

fn failing_case(name: &str, classname: &str, message: &str) -> RawCaseRecord {
    RawCaseRecord {
        name: Some(name.to_string()),
        classname: Some(classname.to_string()),
        failure: Some(RawIssue {
            message: Some(message.to_string()),
            body: None,
        }),
        error: None,
    }
}

fn passing_case(name: &str) -> RawCaseRecord {
    RawCaseRecord {
        name: Some(name.to_string()),
        classname: Some("com.example.SomeTest".to_string()),
        failure: None,
        error: None,
    }
}

// ============================================================================
// 1. Totals
// ============================================================================

#[test]
fn aggregate_single_suite_totals() {
    let summary = aggregate(vec![record("com.example.FooTest", 10, 1, 1, 0, 2.5)]);

    assert_eq!(summary.total_tests, 10);
    assert_eq!(summary.total_failures, 1);
    assert_eq!(summary.total_errors, 1);
    assert_eq!(summary.total_skipped, 0);
    assert_eq!(summary.total_passed, 8);
    assert!(!summary.all_passed());
}

#[test]
fn aggregate_sums_across_suites() {
    let summary = aggregate(vec![
        record("A", 4, 1, 0, 1, 1.0),
        record("B", 6, 0, 2, 0, 0.5),
    ]);

    assert_eq!(summary.total_tests, 10);
    assert_eq!(summary.total_failures, 1);
    assert_eq!(summary.total_errors, 2);
    assert_eq!(summary.total_skipped, 1);
    assert_eq!(summary.total_passed, 6);
    assert!((summary.total_elapsed_seconds - 1.5).abs() < 1e-9);
}

#[test]
fn aggregate_zero_suites() {
    let summary = aggregate(Vec::new());

    assert!(summary.suites.is_empty());
    assert_eq!(summary.total_tests, 0);
    assert_eq!(summary.total_passed, 0);
    assert!(summary.all_passed());
}

#[test]
fn total_passed_equals_sum_of_suite_passed() {
    let summary = aggregate(vec![
        record("A", 5, 1, 0, 1, 0.1),
        record("B", 7, 0, 0, 0, 0.2),
        record("C", 3, 2, 1, 0, 0.3),
    ]);

    let per_suite: u64 = summary.suites.iter().map(|s| s.passed()).sum();
    assert_eq!(summary.total_passed, per_suite);
    assert_eq!(
        summary.total_passed,
        summary.total_tests - summary.total_failures - summary.total_errors - summary.total_skipped
    );
}

#[test]
fn skips_do_not_fail_the_run() {
    let summary = aggregate(vec![record("A", 5, 0, 0, 3, 0.1)]);
    assert!(summary.all_passed());
}

// ============================================================================
// 2. Ordering
// ============================================================================

#[test]
fn suite_order_matches_input_order() {
    let summary = aggregate(vec![
        record("zeta", 1, 0, 0, 0, 0.0),
        record("alpha", 1, 0, 0, 0, 0.0),
        record("midway", 1, 0, 0, 0, 0.0),
    ]);

    let names: Vec<&str> = summary.suites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["zeta", "alpha", "midway"]);
}

#[test]
fn case_order_matches_source_order() {
    let mut rec = record("Suite", 3, 2, 0, 0, 0.0);
    rec.cases = vec![
        failing_case("fails first", "C", "m1"),
        passing_case("passes"),
        failing_case("fails later", "C", "m2"),
    ];

    let summary = aggregate(vec![rec]);
    let cases = &summary.suites[0].failed_cases;
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].case_name, "fails first");
    assert_eq!(cases[1].case_name, "fails later");
}

// ============================================================================
// 3. Marker precedence and message extraction
// ============================================================================

#[test]
fn failure_marker_takes_precedence_over_error() {
    let mut rec = record("Suite", 1, 1, 0, 0, 0.0);
    rec.cases = vec![RawCaseRecord {
        name: Some("case".into()),
        classname: Some("C".into()),
        failure: Some(RawIssue {
            message: Some("A".into()),
            body: None,
        }),
        error: Some(RawIssue {
            message: Some("B".into()),
            body: None,
        }),
    }];

    let summary = aggregate(vec![rec]);
    assert_eq!(summary.suites[0].failed_cases[0].message, "A");
}

#[test]
fn error_marker_used_when_failure_absent() {
    let mut rec = record("Suite", 1, 0, 1, 0, 0.0);
    rec.cases = vec![RawCaseRecord {
        name: Some("case".into()),
        classname: None,
        failure: None,
        error: Some(RawIssue {
            message: Some("boom".into()),
            body: None,
        }),
    }];

    let summary = aggregate(vec![rec]);
    let case = &summary.suites[0].failed_cases[0];
    assert_eq!(case.message, "boom");
    assert_eq!(case.class_name, "");
}

#[test]
fn message_falls_back_to_body_text() {
    let mut rec = record("Suite", 1, 1, 0, 0, 0.0);
    rec.cases = vec![RawCaseRecord {
        name: Some("case".into()),
        classname: Some("C".into()),
        failure: Some(RawIssue {
            message: None,
            body: Some("stack trace text".into()),
        }),
        error: None,
    }];

    let summary = aggregate(vec![rec]);
    assert_eq!(summary.suites[0].failed_cases[0].message, "stack trace text");
}

#[test]
fn empty_message_attribute_falls_back_to_body() {
    let mut rec = record("Suite", 1, 1, 0, 0, 0.0);
    rec.cases = vec![RawCaseRecord {
        name: Some("case".into()),
        classname: None,
        failure: Some(RawIssue {
            message: Some(String::new()),
            body: Some("body wins".into()),
        }),
        error: None,
    }];

    let summary = aggregate(vec![rec]);
    assert_eq!(summary.suites[0].failed_cases[0].message, "body wins");
}

#[test]
fn message_empty_when_marker_has_no_text() {
    let mut rec = record("Suite", 1, 1, 0, 0, 0.0);
    rec.cases = vec![RawCaseRecord {
        name: None,
        classname: None,
        failure: Some(RawIssue {
            message: None,
            body: None,
        }),
        error: None,
    }];

    let summary = aggregate(vec![rec]);
    let case = &summary.suites[0].failed_cases[0];
    assert_eq!(case.message, "");
    assert_eq!(case.case_name, "");
}

// ============================================================================
// 4. Truncation
// ============================================================================

#[test]
fn message_truncated_to_300_chars() {
    let long = "x".repeat(400);
    let mut rec = record("Suite", 1, 1, 0, 0, 0.0);
    rec.cases = vec![failing_case("case", "C", &long)];

    let summary = aggregate(vec![rec]);
    let message = &summary.suites[0].failed_cases[0].message;
    assert_eq!(message.chars().count(), MAX_MESSAGE_CHARS);
    assert_eq!(message.as_str(), "x".repeat(300));
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let long: String = "한".repeat(350);
    let mut rec = record("Suite", 1, 1, 0, 0, 0.0);
    rec.cases = vec![failing_case("case", "C", &long)];

    let summary = aggregate(vec![rec]);
    let message = &summary.suites[0].failed_cases[0].message;
    assert_eq!(message.chars().count(), 300);
    assert_eq!(message.as_str(), "한".repeat(300));
}

#[test]
fn short_messages_kept_whole() {
    assert_eq!(truncate_chars("hello", 300), "hello");
    assert_eq!(truncate_chars("", 300), "");
}

// ============================================================================
// 5. Malformed record recovery
// ============================================================================

#[test]
fn missing_attributes_default_to_zero() {
    let rec = RawSuiteRecord {
        name: Some("Bare".into()),
        ..RawSuiteRecord::default()
    };

    let summary = aggregate(vec![rec]);
    let suite = &summary.suites[0];
    assert_eq!(suite.name, "Bare");
    assert_eq!(suite.total, 0);
    assert_eq!(suite.passed(), 0);
    assert!((suite.elapsed_seconds - 0.0).abs() < 1e-9);
}

#[test]
fn unparsable_counts_default_to_zero() {
    let rec = RawSuiteRecord {
        name: Some("Garbled".into()),
        tests: Some("many".into()),
        failures: Some("-3".into()),
        time: Some("fast".into()),
        ..RawSuiteRecord::default()
    };

    let summary = aggregate(vec![rec]);
    assert_eq!(summary.total_tests, 0);
    assert_eq!(summary.total_failures, 0);
    assert!((summary.total_elapsed_seconds - 0.0).abs() < 1e-9);
}

#[test]
fn nameless_records_get_positional_placeholders() {
    let summary = aggregate(vec![
        RawSuiteRecord::default(),
        record("Named", 1, 0, 0, 0, 0.0),
        RawSuiteRecord {
            name: Some(String::new()),
            ..RawSuiteRecord::default()
        },
    ]);

    assert_eq!(summary.suites[0].name, "suite-1");
    assert_eq!(summary.suites[1].name, "Named");
    assert_eq!(summary.suites[2].name, "suite-3");
}

#[test]
fn every_record_contributes_a_suite() {
    let summary = aggregate(vec![
        RawSuiteRecord::default(),
        RawSuiteRecord::default(),
        record("Real", 2, 0, 0, 0, 0.1),
    ]);

    assert_eq!(summary.suites.len(), 3);
    assert_eq!(summary.total_tests, 2);
}

#[test]
fn count_mismatch_zeroes_counts_but_keeps_detail() {
    let mut rec = record("Inconsistent", 2, 5, 0, 0, 1.25);
    rec.cases = vec![failing_case("case", "C", "kept")];

    let summary = aggregate(vec![rec]);
    let suite = &summary.suites[0];

    assert_eq!(suite.total, 0);
    assert_eq!(suite.failures, 0);
    assert_eq!(suite.passed(), 0);
    assert_eq!(suite.name, "Inconsistent");
    assert!((suite.elapsed_seconds - 1.25).abs() < 1e-9);
    assert_eq!(suite.failed_cases.len(), 1);
    assert_eq!(suite.failed_cases[0].message, "kept");
}
