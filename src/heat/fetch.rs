use crate::error::Result;
use crate::git::{collect_dates, LogQuery};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Where raw commit dates come from.
#[derive(Debug, Clone)]
pub enum DateSource {
    Static(Vec<String>),
    /// One date per line.
    File(PathBuf),
    /// A repository, a directory of repositories, or a glob of either.
    Git(String),
}

impl DateSource {
    pub fn collect<Q: LogQuery + ?Sized>(&self, query: &Q) -> Result<Vec<String>> {
        match self {
            DateSource::Static(dates) => Ok(dates.clone()),
            DateSource::File(path) => {
                let content = fs::read_to_string(path)?;
                let dates: Vec<String> = content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                info!("read {} dates from {}", dates.len(), path.display());
                Ok(dates)
            }
            DateSource::Git(pattern) => collect_dates(pattern, query),
        }
    }
}
