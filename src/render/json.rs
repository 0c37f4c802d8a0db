use crate::error::Result;
use crate::heat::CalendarGrid;
use crate::model::{HeatOutput, RenderConfig, SCHEMA_VERSION};
use chrono::Utc;

pub fn heat_output(grid: &CalendarGrid, config: &RenderConfig) -> HeatOutput {
    HeatOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        title: config.title.clone(),
        theme: config.theme,
        style: config.style,
        start: grid.start(),
        end: grid.end(),
        total_commits: grid.total(),
        max_daily: grid.max(),
        days: grid.records(),
    }
}

pub fn to_json(grid: &CalendarGrid, config: &RenderConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&heat_output(grid, config))?)
}
