use super::query::LogQuery;
use crate::error::Result;
use crate::util::is_glob;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

const REPOSITORY_MARKER: &str = ".git";

/// A repository root carries a `.git` directory, or a `.git` file for worktrees
/// and submodules.
pub fn is_repository_root(path: &Path) -> bool {
    path.join(REPOSITORY_MARKER).exists()
}

/// Expands a `--git-dir` argument into candidate directories.
///
/// Patterns containing `*`, `?` or `[` go through glob expansion and keep only
/// directories. Anything else is taken literally.
pub fn expand_candidates(pattern: &str) -> Result<Vec<PathBuf>> {
    if !is_glob(pattern) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let mut dirs: Vec<PathBuf> = glob::glob(pattern)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("skipping unreadable glob match: {e}");
                None
            }
        })
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// The directory itself when it is a repository root, otherwise every immediate
/// child that is one. Never searches deeper than one level.
pub fn resolve_repositories(path: &Path) -> Vec<PathBuf> {
    if is_repository_root(path) {
        return vec![path.to_path_buf()];
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("cannot read {}: {e}", path.display());
            return Vec::new();
        }
    };

    let mut repos: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|child| child.is_dir() && is_repository_root(child))
        .collect();
    repos.sort();
    repos
}

/// Queries every repository reachable from `pattern` and concatenates their
/// dates. A failing repository contributes nothing.
pub fn collect_dates<Q: LogQuery + ?Sized>(pattern: &str, query: &Q) -> Result<Vec<String>> {
    let repos: Vec<PathBuf> = expand_candidates(pattern)?
        .iter()
        .flat_map(|candidate| resolve_repositories(candidate))
        .collect();

    info!("found {} repositories under {pattern}", repos.len());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let mut dates = Vec::new();
    let mut failed = 0usize;
    for repo in &repos {
        pb.set_message(format!("Reading {}", repo.display()));
        pb.tick();

        let outcome = query.query(repo);
        if outcome.is_failed() {
            failed += 1;
            debug!("no dates from {}: {outcome:?}", repo.display());
        }
        dates.extend(outcome.into_dates());
    }

    pb.finish_and_clear();
    if failed > 0 {
        info!("{failed} of {} repositories could not be read", repos.len());
    }
    Ok(dates)
}
