use crate::error::{HeatError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const SCHEMA_VERSION: u32 = 1;

/// Number of days laid out on the calendar grid.
pub const GRID_DAYS: usize = 365;
pub const GRID_ROWS: usize = 7;
pub const GRID_WEEKS: usize = 53;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Gradient,
    Github,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CommitDateRecord {
    pub date: NaiveDate,
    pub count: u32,
}

/// Trailing span of history covered by the heatmap, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    months: u32,
    days: i64,
}

impl Window {
    /// A month counts as 30 days when anchoring the grid.
    pub fn from_months(months: u32) -> Self {
        Self {
            months,
            days: i64::from(months) * 30,
        }
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn days(&self) -> i64 {
        self.days
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::from_months(12)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("svg") => Ok(OutputFormat::Svg),
            Some("png") => Ok(OutputFormat::Png),
            Some("json") => Ok(OutputFormat::Json),
            _ => Err(HeatError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub theme: Theme,
    pub style: Style,
    pub transparent: bool,
    pub title: String,
    pub start: NaiveDate,
    pub output: PathBuf,
}

impl RenderConfig {
    pub fn format(&self) -> Result<OutputFormat> {
        OutputFormat::from_path(&self.output)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub title: String,
    pub theme: Theme,
    pub style: Style,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_commits: u64,
    pub max_daily: u32,
    pub days: Vec<CommitDateRecord>,
}
