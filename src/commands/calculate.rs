use crate::cli::CalculateFormat;
use crate::engine::compute;
use crate::formatting::{FormattingConfig, OutputFormatter, PlainFormatter};
use crate::model::CampaignInputs;
use crate::output::{self, CalculationOutput};
use crate::report::ReportOptions;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CalculateConfig {
    pub inputs: CampaignInputs,
    pub format: CalculateFormat,
    pub output: Option<PathBuf>,
    pub options: ReportOptions,
    pub formatting_config: FormattingConfig,
    pub unicode: bool,
}

pub fn handle_calculate(config: CalculateConfig) -> Result<()> {
    for warning in super::slider_range_warnings(&config.inputs, &config.options.locale) {
        log::warn!("{}", warning);
    }
    let results = compute(config.inputs);
    log::debug!("Computed {:?} from {:?}", results, config.inputs);

    let rendered = match config.format {
        CalculateFormat::Terminal => {
            // files never get escape codes
            let formatter: Box<dyn OutputFormatter> = match config.output {
                Some(_) => Box::new(PlainFormatter),
                None => config.formatting_config.formatter(),
            };
            output::format_summary(
                &config.inputs,
                &results,
                &config.options,
                formatter.as_ref(),
                config.unicode,
            )
        }
        CalculateFormat::Json => CalculationOutput::new(config.inputs, results).to_json()?,
    };

    output::emit(&rendered, config.output.as_deref())?;
    Ok(())
}
