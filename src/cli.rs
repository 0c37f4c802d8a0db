use crate::model::{Style, Theme};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "commitheat")]
#[command(about = "Render a GitHub-style commit activity heatmap from git history")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub heat: HeatArgs,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug)")]
    pub verbose: u8,
}

#[derive(Args, Clone, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["git_dir", "input"])))]
pub struct HeatArgs {
    #[arg(long, help = "Path to a git repo, a directory of repos, or a glob of either")]
    pub git_dir: Option<String>,

    #[arg(long, help = "File with one YYYY-MM-DD date per line")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Path to output image (.svg, .png or .json); title and axis labels are drawn in SVG only")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = Theme::Light, help = "Color theme")]
    pub theme: Theme,

    #[arg(long, value_enum, default_value_t = Style::Gradient, help = "Color style")]
    pub style: Style,

    #[arg(long, help = "Transparent background")]
    pub transparent: bool,

    #[arg(long, default_value = "Dev Activity", help = "Chart title")]
    pub title: String,

    #[arg(
        long,
        default_value_t = 9,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Range for the activity in months"
    )]
    pub range: u32,

    #[arg(long, default_value = "git", help = "Git executable used to read history")]
    pub git_bin: String,

    #[arg(long, hide = true, value_parser = parse_today, help = "Reference date instead of today (YYYY-MM-DD)")]
    pub today: Option<NaiveDate>,
}

fn parse_today(input: &str) -> std::result::Result<NaiveDate, String> {
    crate::util::parse_day(input).ok_or_else(|| format!("expected YYYY-MM-DD, got '{input}'"))
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// `RUST_LOG` takes precedence over `-v`.
    pub fn init_logging(&self) {
        let _ = env_logger::Builder::new()
            .filter_level(self.log_level())
            .parse_default_env()
            .format_timestamp(None)
            .try_init();
    }

    pub fn execute(self) -> Result<()> {
        crate::heat::exec(self.heat).map(|_| ())
    }
}
