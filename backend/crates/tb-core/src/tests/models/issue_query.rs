use crate::{IssueQuery, IssueSortKey, SortOrder};

use googletest::prelude::*;

#[test]
fn given_no_parameters_when_parsed_then_defaults_to_number_descending() {
    let query = IssueQuery::parse(None, None, None).unwrap();

    assert_that!(query.label, none());
    assert_that!(query.sort, eq(IssueSortKey::Number));
    assert_that!(query.order, eq(SortOrder::Desc));
}

#[test]
fn given_blank_parameters_when_parsed_then_treated_as_absent() {
    let query = IssueQuery::parse(Some("  "), Some(""), Some("")).unwrap();

    assert_that!(query, eq(&IssueQuery::default()));
}

#[test]
fn given_allowed_sort_key_when_parsed_then_maps_to_column() {
    let query = IssueQuery::parse(Some("bug"), Some("author"), Some("ASC")).unwrap();

    assert_that!(query.label.as_deref(), some(eq("bug")));
    assert_that!(query.sort.column(), eq("user"));
    assert_that!(query.order.keyword(), eq("ASC"));
}

#[test]
fn given_injection_attempt_in_sort_when_parsed_then_rejected() {
    let result = IssueQuery::parse(None, Some("number; DROP TABLE issues"), None);

    assert_that!(result, err(anything()));
}

#[test]
fn given_unknown_order_when_parsed_then_rejected() {
    let result = IssueQuery::parse(None, Some("title"), Some("sideways"));

    assert_that!(result, err(anything()));
}

#[test]
fn given_every_sort_key_then_column_is_a_plain_identifier() {
    for key in IssueSortKey::ALL {
        assert!(
            key.column()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'),
            "unexpected column identifier {}",
            key.column()
        );
    }
}
