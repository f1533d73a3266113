use crate::SyncStatus;

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_watermark_when_formatted_then_matches_api_format() {
    let status = SyncStatus::new(Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap());

    assert_that!(status.since_param(), eq("2024-03-09T07:05:01Z"));
}

#[test]
fn given_no_previous_watermark_when_advanced_then_uses_run_start() {
    let started = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

    let next = SyncStatus::advance(None, started);

    assert_that!(next.last_sync, eq(started));
}

#[test]
fn given_previous_watermark_in_future_when_advanced_then_does_not_move_backwards() {
    let started = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let previous = SyncStatus::new(started + Duration::hours(1));

    let next = SyncStatus::advance(Some(previous), started);

    assert_that!(next, eq(previous));
}

#[test]
fn given_sub_second_start_when_advanced_then_truncated_to_seconds() {
    let started = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + Duration::milliseconds(750);

    let next = SyncStatus::advance(None, started);

    assert_that!(next.since_param(), eq("2024-01-01T12:00:00Z"));
    assert!(next.last_sync <= started);
}
