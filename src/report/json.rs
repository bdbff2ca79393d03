use super::{Report, ReportRenderer};
use crate::errors::Result;

/// Pretty-printed JSON of the formatted report.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(report)?)
    }
}
