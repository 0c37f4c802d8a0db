use log::debug;
use std::path::Path;
use std::process::Command;

/// Result of asking a single repository for its commit dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The query ran; the list may be empty.
    Dates(Vec<String>),
    /// The query could not run or exited unsuccessfully.
    Failed(String),
}

impl QueryOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, QueryOutcome::Failed(_))
    }

    /// Collapses a failure into "no dates".
    pub fn into_dates(self) -> Vec<String> {
        match self {
            QueryOutcome::Dates(dates) => dates,
            QueryOutcome::Failed(_) => Vec::new(),
        }
    }
}

pub trait LogQuery {
    fn query(&self, repo: &Path) -> QueryOutcome;
}

/// Runs `git -C <repo> log --since=<N>.months --date=short --pretty=format:%ad`.
#[derive(Debug, Clone)]
pub struct GitLogQuery {
    program: String,
    months: u32,
}

impl GitLogQuery {
    pub fn new(months: u32) -> Self {
        Self {
            program: "git".to_string(),
            months,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, repo: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-C")
            .arg(repo)
            .arg("log")
            .arg(format!("--since={}.months", self.months))
            .args(["--date=short", "--pretty=format:%ad"]);
        cmd
    }
}

impl LogQuery for GitLogQuery {
    fn query(&self, repo: &Path) -> QueryOutcome {
        let output = match self.command(repo).output() {
            Ok(output) => output,
            Err(e) => return QueryOutcome::Failed(format!("failed to run {}: {e}", self.program)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("{} log failed in {}: {}", self.program, repo.display(), stderr.trim());
            return QueryOutcome::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let dates = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        QueryOutcome::Dates(dates)
    }
}
