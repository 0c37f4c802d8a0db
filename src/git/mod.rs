pub mod query;
pub mod repo;

pub use query::{GitLogQuery, LogQuery, QueryOutcome};
pub use repo::{collect_dates, expand_candidates, is_repository_root, resolve_repositories};
