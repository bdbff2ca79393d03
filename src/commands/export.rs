use crate::formatting::FormattingConfig;
use crate::io::{FileDestination, OutputDestination, StdoutDestination};
use crate::model::CampaignInputs;
use crate::notify::TerminalNotifier;
use crate::report::{ExportFormat, ReportExporter, ReportOptions};
use crate::session::CalculatorSession;
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub inputs: CampaignInputs,
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
    pub options: ReportOptions,
    pub formatting_config: FormattingConfig,
}

pub fn handle_export(config: ExportConfig) -> Result<()> {
    for warning in super::slider_range_warnings(&config.inputs, &config.options.locale) {
        log::warn!("{}", warning);
    }

    let mut session = CalculatorSession::new(config.inputs);
    session.recalculate();

    let file_name = config.options.file_name_for(config.format);
    let destination = resolve_destination(config.output.as_deref(), &file_name);
    let exporter = ReportExporter::new(config.options, config.format);
    let notifier = TerminalNotifier::new(config.formatting_config.formatter());

    let receipt = session.export(&exporter, destination.as_ref(), &notifier)?;
    log::debug!("{:?}", receipt);
    Ok(())
}

/// Where an export lands: stdout for `-`, `<dir>/<file_name>` for an
/// existing directory, the path itself otherwise, and `file_name` in the
/// working directory when no output was given.
pub fn resolve_destination(output: Option<&Path>, file_name: &str) -> Box<dyn OutputDestination> {
    match output {
        Some(path) if path == Path::new("-") => Box::new(StdoutDestination),
        Some(path) if path.is_dir() => Box::new(FileDestination::new(path.join(file_name))),
        Some(path) => Box::new(FileDestination::new(path.to_path_buf())),
        None => Box::new(FileDestination::new(PathBuf::from(file_name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_destination() {
        let dir = TempDir::new().unwrap();
        let name = "Email_Marketing_ROI_Analysis.pdf";

        assert_eq!(resolve_destination(Some(Path::new("-")), name).description(), "stdout");
        assert_eq!(
            resolve_destination(Some(dir.path()), name).description(),
            format!("file:{}", dir.path().join(name).display())
        );
        assert_eq!(
            resolve_destination(None, name).description(),
            format!("file:{name}")
        );
    }

    #[test]
    fn test_handle_export_writes_pdf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roi.pdf");

        handle_export(ExportConfig {
            inputs: CampaignInputs::default(),
            format: ExportFormat::Pdf,
            output: Some(path.clone()),
            options: ReportOptions::default(),
            formatting_config: FormattingConfig::plain(),
        })
        .unwrap();

        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF-"));
    }
}
