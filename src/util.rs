use crate::model::GRID_WEEKS;
use chrono::{Datelike, Duration, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// True when `input` contains glob metacharacters.
pub fn is_glob(input: &str) -> bool {
    input.contains(&['*', '?', '['][..])
}

/// A week starts a month when its anchor falls on days 1 through 7.
pub fn is_month_start(anchor: NaiveDate) -> bool {
    anchor.day() <= 7
}

/// Column ticks for the x-axis: `(week index, "Jan")` for every week whose
/// anchor date (`start + 7 * week`) starts a month.
pub fn month_ticks(start: NaiveDate) -> Vec<(usize, String)> {
    (0..GRID_WEEKS)
        .filter_map(|week| {
            let anchor = start + Duration::days(7 * week as i64);
            is_month_start(anchor).then(|| (week, anchor.format("%b").to_string()))
        })
        .collect()
}

/// Parses a date written exactly as `YYYY-MM-DD`. Unpadded fields or a sign
/// are rejected even though chrono would accept them.
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    let well_formed = input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}
