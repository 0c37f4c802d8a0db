pub mod aggregate;
pub mod exec;
pub mod fetch;

pub use aggregate::{parse_dates, CalendarGrid, DateCounts, ParseReport};
pub use exec::{exec, Outcome};
pub use fetch::DateSource;
