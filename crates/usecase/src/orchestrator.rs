use svg_bundle_domain::{BundleConfig, Resource, ThemeSpec};
use svg_bundle_ports::{
    filesystem::{ContentReader, FileEnumerator, ScanPlan},
    output::ResourceWriter,
    progress::{NoProgress, ProgressSink},
};
use svg_bundle_shared_kernel::{ApplicationError, BundleError, Result, path::logical_absolute};

use crate::{
    assemble::assemble_resource,
    dto::{BuildReport, ThemeReport},
};

/// Scanner switches applied to every theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub include_hidden: bool,
    pub follow_links: bool,
}

/// Builds every theme of a [`BundleConfig`].
///
/// All themes are assembled before the first output is written, so a scan or
/// read failure in any theme leaves every output file untouched. A write
/// failure stops the run before later themes are written.
pub struct BuildBundles<'a> {
    enumerator: &'a dyn FileEnumerator,
    reader: &'a dyn ContentReader,
    writer: &'a dyn ResourceWriter,
    progress: &'a dyn ProgressSink,
    options: BuildOptions,
}

impl<'a> BuildBundles<'a> {
    pub fn new(
        enumerator: &'a dyn FileEnumerator,
        reader: &'a dyn ContentReader,
        writer: &'a dyn ResourceWriter,
    ) -> Self {
        Self { enumerator, reader, writer, progress: &NoProgress, options: BuildOptions::default() }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self, config: &BundleConfig) -> Result<BuildReport> {
        config.validate()?;

        let assembled = config
            .themes
            .iter()
            .map(|theme| self.assemble_theme(theme).map(|resource| (theme, resource)))
            .collect::<Result<Vec<_>>>()?;

        let mut report = BuildReport::default();
        for (theme, resource) in &assembled {
            report.themes.push(self.write_theme(theme, resource)?);
        }
        Ok(report)
    }

    /// Scan and assemble one theme without writing anything.
    pub fn assemble_theme(&self, theme: &ThemeSpec) -> Result<Resource> {
        self.try_assemble(theme).map_err(|source| theme_failed(theme, source))
    }

    fn try_assemble(&self, theme: &ThemeSpec) -> Result<Resource> {
        let root = logical_absolute(&theme.input);
        let plan = ScanPlan {
            root: root.clone(),
            extension: theme.extension.clone(),
            include_hidden: self.options.include_hidden,
            follow_links: self.options.follow_links,
        };
        let paths = self.enumerator.enumerate(&plan)?;
        tracing::debug!(theme = %theme.name, files = paths.len(), "theme scanned");

        let rule = theme.short_name_rule(&root);
        assemble_resource(&theme.name, &rule, &paths, self.reader, self.progress)
    }

    fn write_theme(&self, theme: &ThemeSpec, resource: &Resource) -> Result<ThemeReport> {
        let rendered = resource.render();
        self.writer
            .write(&theme.output, &rendered)
            .map_err(|source| theme_failed(theme, source))?;
        self.progress.on_written(&theme.name, &theme.output, rendered.len())?;

        Ok(ThemeReport {
            theme: theme.name.clone(),
            output: theme.output.clone(),
            entries: resource.len(),
            bytes: rendered.len(),
        })
    }
}

fn theme_failed(theme: &ThemeSpec, source: BundleError) -> BundleError {
    ApplicationError::ThemeFailed { theme: theme.name.clone(), source: Box::new(source) }.into()
}
