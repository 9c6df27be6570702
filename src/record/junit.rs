use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::record::record_model::{RawCaseRecord, RawIssue, RawSuiteRecord};

// ============================================================================
// JUnit XML reader — one result file becomes one RawSuiteRecord
// ============================================================================

const TAG_TEST_SUITES: &[u8] = b"testsuites";
const TAG_TEST_SUITE: &[u8] = b"testsuite";
const TAG_TEST_CASE: &[u8] = b"testcase";
const TAG_FAILURE: &[u8] = b"failure";
const TAG_ERROR: &[u8] = b"error";

#[derive(Debug, Clone, Copy, PartialEq)]
enum IssueKind {
    Failure,
    Error,
}

/// Parse one JUnit-style result file into a raw suite record.
///
/// Gradle writes one `<testsuite>` root element per file; a `<testsuites>`
/// wrapper is tolerated and skipped. Attributes are kept verbatim as strings
/// (the defaulting accessors on `RawSuiteRecord` handle absent or unparsable
/// values), so a record missing any attribute still parses. Only malformed
/// XML itself is an error.
pub fn parse_record<R: BufRead>(xml: R) -> Result<RawSuiteRecord, quick_xml::Error> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut record = RawSuiteRecord::default();
    let mut suite_seen = false;
    let mut current_case: Option<RawCaseRecord> = None;
    let mut open_issue: Option<(IssueKind, RawIssue)> = None;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(e) => match e.name().as_ref() {
                TAG_TEST_SUITES => {}
                TAG_TEST_SUITE => {
                    if !suite_seen {
                        read_suite_attrs(&e, &mut record);
                        suite_seen = true;
                    }
                }
                TAG_TEST_CASE => {
                    if let Some(case) = current_case.take() {
                        record.cases.push(case);
                    }
                    current_case = Some(read_case_attrs(&e));
                }
                TAG_FAILURE | TAG_ERROR => {
                    if current_case.is_some() {
                        open_issue = Some((issue_kind(&e), read_issue_attrs(&e)));
                    }
                }
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                TAG_TEST_SUITE => {
                    if !suite_seen {
                        read_suite_attrs(&e, &mut record);
                        suite_seen = true;
                    }
                }
                TAG_TEST_CASE => {
                    record.cases.push(read_case_attrs(&e));
                }
                TAG_FAILURE | TAG_ERROR => {
                    if let Some(case) = current_case.as_mut() {
                        attach_issue(case, issue_kind(&e), read_issue_attrs(&e));
                    }
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                TAG_TEST_CASE => {
                    if let Some(case) = current_case.take() {
                        record.cases.push(case);
                    }
                }
                TAG_FAILURE | TAG_ERROR => {
                    if let (Some(case), Some((kind, issue))) =
                        (current_case.as_mut(), open_issue.take())
                    {
                        attach_issue(case, kind, issue);
                    }
                }
                _ => {}
            },
            Event::Text(e) => {
                if let Some((_, issue)) = open_issue.as_mut() {
                    if let Ok(text) = e.unescape() {
                        append_body(issue, &text);
                    }
                }
            }
            Event::CData(e) => {
                if let Some((_, issue)) = open_issue.as_mut() {
                    let text = String::from_utf8_lossy(&e);
                    append_body(issue, &text);
                }
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(record)
}

fn issue_kind(e: &BytesStart) -> IssueKind {
    if e.name().as_ref() == TAG_FAILURE {
        IssueKind::Failure
    } else {
        IssueKind::Error
    }
}

/// First marker of each kind wins; later duplicates are ignored.
fn attach_issue(case: &mut RawCaseRecord, kind: IssueKind, issue: RawIssue) {
    match kind {
        IssueKind::Failure => {
            if case.failure.is_none() {
                case.failure = Some(issue);
            }
        }
        IssueKind::Error => {
            if case.error.is_none() {
                case.error = Some(issue);
            }
        }
    }
}

fn append_body(issue: &mut RawIssue, text: &str) {
    if text.is_empty() {
        return;
    }
    match issue.body.as_mut() {
        Some(body) => {
            body.push('\n');
            body.push_str(text);
        }
        None => issue.body = Some(text.to_string()),
    }
}

fn read_suite_attrs(e: &BytesStart, record: &mut RawSuiteRecord) {
    record.name = attr_value(e, b"name");
    record.tests = attr_value(e, b"tests");
    record.failures = attr_value(e, b"failures");
    record.errors = attr_value(e, b"errors");
    record.skipped = attr_value(e, b"skipped");
    record.time = attr_value(e, b"time");
}

fn read_case_attrs(e: &BytesStart) -> RawCaseRecord {
    RawCaseRecord {
        name: attr_value(e, b"name"),
        classname: attr_value(e, b"classname"),
        failure: None,
        error: None,
    }
}

fn read_issue_attrs(e: &BytesStart) -> RawIssue {
    RawIssue {
        message: attr_value(e, b"message"),
        body: None,
    }
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}
