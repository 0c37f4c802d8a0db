use super::aggregate::{parse_dates, CalendarGrid};
use super::fetch::DateSource;
use crate::cli::HeatArgs;
use crate::git::{GitLogQuery, LogQuery};
use crate::model::{RenderConfig, Window};
use crate::palette;
use crate::render;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use console::style;
use log::warn;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    NoDates,
}

impl HeatArgs {
    pub fn source(&self) -> DateSource {
        match (&self.git_dir, &self.input) {
            (Some(pattern), _) => DateSource::Git(pattern.clone()),
            (None, Some(path)) => DateSource::File(path.clone()),
            (None, None) => DateSource::Static(Vec::new()),
        }
    }

    pub fn window(&self) -> Window {
        Window::from_months(self.range)
    }

    pub fn query(&self) -> GitLogQuery {
        GitLogQuery::new(self.range).with_program(self.git_bin.clone())
    }
}

pub fn exec(args: HeatArgs) -> anyhow::Result<Outcome> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let query = args.query();
    run(&args, &query, today)
}

/// Collect, aggregate and render with an explicit query backend and reference
/// date.
pub fn run<Q: LogQuery + ?Sized>(args: &HeatArgs, query: &Q, today: NaiveDate) -> anyhow::Result<Outcome> {
    let raw = args
        .source()
        .collect(query)
        .context("Failed to collect commit dates")?;

    let (counts, report) = parse_dates(&raw);
    if !report.rejected.is_empty() {
        warn!("{} entries were not YYYY-MM-DD dates and were skipped", report.rejected.len());
    }

    if counts.is_empty() {
        println!("{}", style("[!] No commit dates found.").yellow());
        return Ok(Outcome::NoDates);
    }

    let grid = CalendarGrid::build(&counts, today, args.window())
        .context("Failed to lay out the calendar grid")?;
    let palette = palette::resolve(args.theme, args.style);
    let config = RenderConfig {
        theme: args.theme,
        style: args.style,
        transparent: args.transparent,
        title: args.title.clone(),
        start: grid.start(),
        output: args.output.clone(),
    };

    let path = render::render(&grid, &palette, &config)
        .with_context(|| format!("Failed to write heatmap to {}", config.output.display()))?;

    println!("{} Saved heatmap to {}", style("[✓]").green(), path.display());
    Ok(Outcome::Written(path))
}
