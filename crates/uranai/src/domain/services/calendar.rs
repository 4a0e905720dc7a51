//! Calendar day in the fixed UTC+9 offset used for file naming

use chrono::{DateTime, Duration, NaiveDate, Utc};

const JST_OFFSET_HOURS: i64 = 9;

/// UTC+9 calendar date of an instant
pub fn jst_date(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::hours(JST_OFFSET_HOURS)).date_naive()
}

pub fn today_jst() -> NaiveDate {
    jst_date(Utc::now())
}
