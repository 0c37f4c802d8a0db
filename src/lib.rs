pub mod cli;
pub mod error;
pub mod git;
pub mod heat;
pub mod model;
pub mod palette;
pub mod render;
pub mod util;

pub use error::{HeatError, Result};
