use std::path::PathBuf;

/// Outcome of writing one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeReport {
    pub theme: String,
    pub output: PathBuf,
    pub entries: usize,
    pub bytes: usize,
}

/// Outcome of a whole build, in theme order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub themes: Vec<ThemeReport>,
}

impl BuildReport {
    pub fn total_entries(&self) -> usize {
        self.themes.iter().map(|t| t.entries).sum()
    }
}
