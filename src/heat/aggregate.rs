use crate::error::{HeatError, Result};
use crate::model::{CommitDateRecord, Window, GRID_DAYS, GRID_ROWS, GRID_WEEKS};
use crate::util::parse_day;
use chrono::{Datelike, Duration, NaiveDate};
use log::warn;
use std::collections::BTreeMap;

pub type DateCounts = BTreeMap<NaiveDate, u32>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub accepted: usize,
    pub rejected: Vec<String>,
}

/// Counts commits per day. Blank entries are skipped; anything that is not a
/// `YYYY-MM-DD` date is rejected and reported.
pub fn parse_dates<I, S>(raw: I) -> (DateCounts, ParseReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ParseReport::default();
    let counts = raw.into_iter().fold(DateCounts::new(), |mut counts, entry| {
        let entry = entry.as_ref().trim();
        if entry.is_empty() {
            return counts;
        }
        match parse_day(entry) {
            Some(day) => {
                *counts.entry(day).or_insert(0) += 1;
                report.accepted += 1;
            }
            None => {
                warn!("ignoring malformed date '{entry}'");
                report.rejected.push(entry.to_string());
            }
        }
        counts
    });
    (counts, report)
}

/// Commits per day laid out as weekday rows by week columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    start: NaiveDate,
    cells: [[u32; GRID_WEEKS]; GRID_ROWS],
}

impl CalendarGrid {
    pub fn empty(start: NaiveDate) -> Self {
        Self {
            start,
            cells: [[0; GRID_WEEKS]; GRID_ROWS],
        }
    }

    /// Lays out the 365 days starting at `today - window`. Row is the weekday
    /// (Monday = 0), column is `day_index / 7`. Fails when the window reaches
    /// outside the representable calendar.
    pub fn build(counts: &DateCounts, today: NaiveDate, window: Window) -> Result<Self> {
        let start = Duration::try_days(window.days())
            .and_then(|span| today.checked_sub_signed(span))
            .filter(|start| start.checked_add_signed(Duration::days(GRID_DAYS as i64)).is_some())
            .ok_or_else(|| {
                HeatError::InvalidDate(format!(
                    "a {} month window before {today} is out of range",
                    window.months()
                ))
            })?;
        let mut grid = Self::empty(start);

        for i in 0..GRID_DAYS {
            let day = start + Duration::days(i as i64);
            let weekday = day.weekday().num_days_from_monday() as usize;
            grid.cells[weekday][i / 7] = counts.get(&day).copied().unwrap_or(0);
        }

        Ok(grid)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day covered by the grid (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(GRID_DAYS as i64 - 1)
    }

    pub fn get(&self, weekday: usize, week: usize) -> u32 {
        self.cells
            .get(weekday)
            .and_then(|row| row.get(week))
            .copied()
            .unwrap_or(0)
    }

    pub fn rows(&self) -> &[[u32; GRID_WEEKS]; GRID_ROWS] {
        &self.cells
    }

    pub fn max(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn min(&self) -> u32 {
        self.cells.iter().flatten().copied().min().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().map(|&c| u64::from(c)).sum()
    }

    /// Calendar day shown at a cell, if the cell falls inside the laid out days.
    pub fn day_at(&self, weekday: usize, week: usize) -> Option<NaiveDate> {
        if weekday >= GRID_ROWS || week >= GRID_WEEKS {
            return None;
        }
        let first = self.start + Duration::days(7 * week as i64);
        let offset = (weekday as i64 - first.weekday().num_days_from_monday() as i64).rem_euclid(7);
        let day = first + Duration::days(offset);
        let index = (day - self.start).num_days();
        (index < GRID_DAYS as i64).then_some(day)
    }

    /// Non-empty days, oldest first.
    pub fn records(&self) -> Vec<CommitDateRecord> {
        (0..GRID_DAYS)
            .filter_map(|i| {
                let date = self.start + Duration::days(i as i64);
                let weekday = date.weekday().num_days_from_monday() as usize;
                let count = self.cells[weekday][i / 7];
                (count > 0).then_some(CommitDateRecord { date, count })
            })
            .collect()
    }
}
