//! Short date badges ("Mar 3").

use crate::constants::SHORT_DATE_FORMAT;
use crate::model::DateValue;
use chrono::{DateTime, NaiveDate, Utc};

/// Formats the publish date, or the creation time when the page has no
/// usable publish date.
///
/// A publish date is shown as the calendar day it was written with, without
/// converting between time zones. Creation times are shown in UTC.
pub fn display_date(publish: Option<&DateValue>, created: DateTime<Utc>) -> String {
    publish
        .and_then(|date| parse_calendar_date(&date.start))
        .unwrap_or_else(|| created.date_naive())
        .format(SHORT_DATE_FORMAT)
        .to_string()
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    })
}
