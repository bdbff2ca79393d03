//! CLI command implementations.
//!
//! Available commands:
//! - **calculate**: Compute funnel metrics and ROI and print them
//! - **export**: Write the ROI analysis report (PDF, Markdown or JSON)
//! - **init**: Initialize a new `.email-roi.toml` configuration file

pub mod calculate;
pub mod export;
pub mod init;

pub use calculate::{handle_calculate, CalculateConfig};
pub use export::{handle_export, resolve_destination, ExportConfig};
pub use init::init_config;

use crate::formatting::NumberLocale;
use crate::model::{CampaignInputs, InputField};

/// One message per input outside the calculator's slider range.
///
/// Such values are still computed as given; the messages only flag
/// figures the calculator form itself could not produce.
pub fn slider_range_warnings(inputs: &CampaignInputs, locale: &NumberLocale) -> Vec<String> {
    inputs
        .outside_slider_range()
        .into_iter()
        .map(|field| {
            let bounds = field.bounds();
            format!(
                "{} {} is outside the calculator range {} to {}",
                field.label(),
                format_field_value(field, inputs.get(field), locale),
                format_field_value(field, bounds.min, locale),
                format_field_value(field, bounds.max, locale),
            )
        })
        .collect()
}

fn format_field_value(field: InputField, value: f64, locale: &NumberLocale) -> String {
    match field {
        _ if field.is_rate() => locale.format_percentage(value),
        InputField::AverageOrderValue | InputField::CampaignCost => locale.format_currency(value),
        _ => locale.format_number(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slider_range_warnings_name_field_and_range() {
        let inputs = CampaignInputs::default()
            .with(InputField::ConversionRate, 0.25)
            .with(InputField::CampaignCost, 0.0);

        assert_eq!(
            slider_range_warnings(&inputs, &NumberLocale::default()),
            vec![
                "Conversion Rate 25.00% is outside the calculator range 0.10% to 20.00%",
                "Campaign Cost ₹0 is outside the calculator range ₹5,000 to ₹1,00,000",
            ]
        );
    }

    #[test]
    fn test_defaults_produce_no_warnings() {
        assert!(
            slider_range_warnings(&CampaignInputs::default(), &NumberLocale::default()).is_empty()
        );
    }
}
