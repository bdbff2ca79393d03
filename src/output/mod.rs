//! Output of the `calculate` command: a terminal summary or JSON.

pub mod terminal;

pub use terminal::format_summary;

use crate::engine::{funnel, FunnelStage, RoiOutlook};
use crate::errors::Result;
use crate::model::{CampaignInputs, CampaignResults};
use serde::Serialize;
use std::path::Path;

/// Raw calculation figures for machine consumers.
///
/// Values are unrounded; a non-finite ROI serializes as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutput {
    pub inputs: CampaignInputs,
    pub results: CampaignResults,
    pub net_profit: f64,
    pub outlook: RoiOutlook,
    pub funnel: Vec<FunnelStage>,
}

impl CalculationOutput {
    pub fn new(inputs: CampaignInputs, results: CampaignResults) -> Self {
        Self {
            inputs,
            results,
            net_profit: results.net_profit(),
            outlook: results.outlook(),
            funnel: funnel(&inputs, &results),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write to `output` when given, otherwise print to stdout.
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    crate::io::ensure_dir(parent)?;
                }
            }
            crate::io::write_file(path, content)
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
