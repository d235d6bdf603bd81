mod args;
mod config;
mod parsers;

pub use args::Args;
pub use parsers::{StripPrefixArg, ThemeArg};
