//! Timestamp columns are TEXT in the remote API's own format, which sorts
//! chronologically as a string.

use crate::{DbError, Result as DbErrorResult};

use tb_core::WATERMARK_FORMAT;

use chrono::{DateTime, Utc};

pub(crate) fn to_db(value: &DateTime<Utc>) -> String {
    value.format(WATERMARK_FORMAT).to_string()
}

pub(crate) fn from_db(value: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::corrupt(format!("timestamp '{}': {}", value, e)))
}

pub(crate) fn from_db_opt(value: Option<&str>) -> DbErrorResult<Option<DateTime<Utc>>> {
    value.map(from_db).transpose()
}
