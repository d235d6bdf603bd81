// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use tracing::Level;

use super::parsers::{self, StripPrefixArg, ThemeArg};

/// Top-level CLI arguments parsed via clap.
///
/// Without `--config` or `--theme` the two default icon sets are bundled:
/// `Light_mode/` into `Light_mode.txt` and `Dark_Mode/` into `Dark_mode.txt`.
#[derive(Parser, Debug)]
#[command(
    name = "svg_bundle",
    version = crate::VERSION,
    about = "Concatenate SVG icon sets into one text resource per theme"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Load themes from a JSON or YAML file
    #[arg(long, short = 'c', value_hint = ValueHint::FilePath, help_heading = "Themes")]
    pub config: Option<PathBuf>,

    /// Add a theme as NAME=DIR; its resource is written to <OUT_DIR>/<NAME>.txt
    #[arg(long = "theme", value_name = "NAME=DIR", help_heading = "Themes")]
    pub themes: Vec<ThemeArg>,

    /// Directory receiving the resources of --theme entries
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath, help_heading = "Themes")]
    pub out_dir: PathBuf,

    /// Extension of the files to bundle (for --theme and the default themes)
    #[arg(long, default_value = "svg", value_parser = parsers::parse_extension, help_heading = "Naming")]
    pub ext: String,

    /// Prefix removed from file names, for every theme or as NAME=PREFIX for one;
    /// an empty PREFIX keeps names unchanged (default themes strip LM_ and DM_)
    #[arg(long = "strip-prefix", value_name = "[NAME=]PREFIX", help_heading = "Naming")]
    pub strip_prefixes: Vec<StripPrefixArg>,

    /// Name entries by their root-relative path instead of the bare file name
    #[arg(long, help_heading = "Naming")]
    pub relative_names: bool,

    /// Include hidden files and directories
    #[arg(long, help_heading = "Scan")]
    pub hidden: bool,

    /// Follow symbolic links
    #[arg(long, help_heading = "Scan")]
    pub follow: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
