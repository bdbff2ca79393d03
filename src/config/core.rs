use serde::{Deserialize, Serialize};

use crate::formatting::{Grouping, NumberLocale};
use crate::model::CampaignInputs;
use crate::report::{ReportOptions, DEFAULT_FILE_NAME, DEFAULT_FOOTER};

/// Root configuration structure, read from `.email-roi.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoiConfig {
    /// Starting values for the calculator inputs
    #[serde(default)]
    pub defaults: Option<InputDefaults>,

    /// Number and currency formatting
    #[serde(default)]
    pub locale: Option<LocaleConfig>,

    /// Exported report settings
    #[serde(default)]
    pub report: Option<ReportConfig>,
}

/// Any subset of the calculator inputs; unset fields keep the built-in
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InputDefaults {
    pub email_list_size: Option<u64>,
    pub campaign_frequency: Option<u32>,
    pub open_rate: Option<f64>,
    pub click_through_rate: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub average_order_value: Option<f64>,
    pub campaign_cost: Option<f64>,
}

impl InputDefaults {
    pub fn apply(&self, base: CampaignInputs) -> CampaignInputs {
        CampaignInputs {
            email_list_size: self.email_list_size.unwrap_or(base.email_list_size),
            campaign_frequency: self.campaign_frequency.unwrap_or(base.campaign_frequency),
            open_rate: self.open_rate.unwrap_or(base.open_rate),
            click_through_rate: self.click_through_rate.unwrap_or(base.click_through_rate),
            conversion_rate: self.conversion_rate.unwrap_or(base.conversion_rate),
            average_order_value: self.average_order_value.unwrap_or(base.average_order_value),
            campaign_cost: self.campaign_cost.unwrap_or(base.campaign_cost),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
    pub currency_symbol: Option<String>,
    pub grouping: Option<Grouping>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Attribution line printed at the bottom of every page
    pub footer: Option<String>,
    /// Default file name for exports
    pub file_name: Option<String>,
}

impl RoiConfig {
    pub fn default_inputs(&self) -> CampaignInputs {
        self.defaults
            .as_ref()
            .map(|d| d.apply(CampaignInputs::default()))
            .unwrap_or_default()
    }

    pub fn number_locale(&self) -> NumberLocale {
        let base = NumberLocale::default();
        match &self.locale {
            Some(locale) => NumberLocale {
                currency_symbol: locale
                    .currency_symbol
                    .clone()
                    .unwrap_or(base.currency_symbol),
                grouping: locale.grouping.unwrap_or(base.grouping),
            },
            None => base,
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        let report = self.report.clone().unwrap_or_default();
        ReportOptions {
            locale: self.number_locale(),
            footer: report.footer.unwrap_or_else(|| DEFAULT_FOOTER.to_string()),
            file_name: report
                .file_name
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
        }
    }
}
