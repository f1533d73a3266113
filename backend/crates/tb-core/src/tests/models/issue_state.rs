use crate::IssueState;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_valid_strings_when_parsed_then_round_trip_through_as_str() {
    for state in IssueState::ALL {
        assert_that!(IssueState::from_str(state.as_str()).unwrap(), eq(state));
    }
}

#[test]
fn given_unknown_state_when_parsed_then_error() {
    let result = IssueState::from_str("merged");

    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("merged"));
}

#[test]
fn given_partitions_then_open_is_fetched_before_closed() {
    assert_eq!(IssueState::ALL, [IssueState::Open, IssueState::Closed]);
}
