//! Campaign data model.
//!
//! `CampaignInputs` is the transient record the calculator form edits;
//! `CampaignResults` is always derived from it by [`crate::engine::compute`]
//! and never mutated on its own.

use serde::{Deserialize, Serialize};

/// Campaign assumptions collected by the calculator form.
///
/// Rates are fractions (`0.20` is 20%). Click-through is relative to opens
/// and conversion is relative to clicks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInputs {
    pub email_list_size: u64,
    /// Campaigns sent per month
    pub campaign_frequency: u32,
    pub open_rate: f64,
    pub click_through_rate: f64,
    pub conversion_rate: f64,
    pub average_order_value: f64,
    /// Monthly campaign cost
    pub campaign_cost: f64,
}

impl Default for CampaignInputs {
    fn default() -> Self {
        Self {
            email_list_size: 10_000,
            campaign_frequency: 4,
            open_rate: 0.20,
            click_through_rate: 0.15,
            conversion_rate: 0.03,
            average_order_value: 2_500.0,
            campaign_cost: 20_000.0,
        }
    }
}

impl CampaignInputs {
    /// Current value of a field as a plain number.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::EmailListSize => self.email_list_size as f64,
            InputField::CampaignFrequency => f64::from(self.campaign_frequency),
            InputField::OpenRate => self.open_rate,
            InputField::ClickThroughRate => self.click_through_rate,
            InputField::ConversionRate => self.conversion_rate,
            InputField::AverageOrderValue => self.average_order_value,
            InputField::CampaignCost => self.campaign_cost,
        }
    }

    /// Apply a single field edit.
    ///
    /// Values are taken as given: the slider bounds on [`InputField`] are not
    /// enforced here. Count fields round to the nearest whole number and
    /// saturate at zero and at their type's maximum.
    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::EmailListSize => self.email_list_size = value.round() as u64,
            InputField::CampaignFrequency => self.campaign_frequency = value.round() as u32,
            InputField::OpenRate => self.open_rate = value,
            InputField::ClickThroughRate => self.click_through_rate = value,
            InputField::ConversionRate => self.conversion_rate = value,
            InputField::AverageOrderValue => self.average_order_value = value,
            InputField::CampaignCost => self.campaign_cost = value,
        }
    }

    /// Fields whose value lies outside the calculator form's slider range.
    pub fn outside_slider_range(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|field| !field.bounds().contains(self.get(*field)))
            .collect()
    }

    /// Builder-style variant of [`CampaignInputs::set`].
    #[must_use]
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}

/// Funnel metrics derived from a [`CampaignInputs`] record.
///
/// Opens, clicks and conversions are real-valued; they are only rounded when
/// formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResults {
    pub number_of_emails: u64,
    pub email_opens: f64,
    pub total_clicks: f64,
    pub conversions: f64,
    pub revenue: f64,
    pub cost: f64,
    /// `(revenue - cost) / cost`; non-finite when cost is zero
    pub roi: f64,
}

/// Inclusive slider range offered by the calculator form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The seven editable calculator inputs, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    EmailListSize,
    CampaignFrequency,
    OpenRate,
    ClickThroughRate,
    ConversionRate,
    AverageOrderValue,
    CampaignCost,
}

impl InputField {
    pub const ALL: [InputField; 7] = [
        Self::EmailListSize,
        Self::CampaignFrequency,
        Self::OpenRate,
        Self::ClickThroughRate,
        Self::ConversionRate,
        Self::AverageOrderValue,
        Self::CampaignCost,
    ];

    /// Label used in the report's inputs table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmailListSize => "Email List Size",
            Self::CampaignFrequency => "Monthly Campaign Frequency",
            Self::OpenRate => "Open Rate",
            Self::ClickThroughRate => "Click-Through Rate",
            Self::ConversionRate => "Conversion Rate",
            Self::AverageOrderValue => "Average Order Value",
            Self::CampaignCost => "Campaign Cost",
        }
    }

    pub fn bounds(&self) -> FieldBounds {
        let (min, max, step) = match self {
            Self::EmailListSize => (1_000.0, 100_000.0, 1_000.0),
            Self::CampaignFrequency => (1.0, 20.0, 1.0),
            Self::OpenRate => (0.01, 0.50, 0.01),
            Self::ClickThroughRate => (0.01, 0.40, 0.01),
            Self::ConversionRate => (0.001, 0.20, 0.001),
            Self::AverageOrderValue => (500.0, 10_000.0, 100.0),
            Self::CampaignCost => (5_000.0, 100_000.0, 1_000.0),
        };
        FieldBounds { min, max, step }
    }

    pub fn is_rate(&self) -> bool {
        matches!(
            self,
            Self::OpenRate | Self::ClickThroughRate | Self::ConversionRate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let inputs = CampaignInputs::default();
        assert_eq!(inputs.email_list_size, 10_000);
        assert_eq!(inputs.campaign_frequency, 4);
        assert_eq!(inputs.open_rate, 0.20);
        assert_eq!(inputs.click_through_rate, 0.15);
        assert_eq!(inputs.conversion_rate, 0.03);
        assert_eq!(inputs.average_order_value, 2_500.0);
        assert_eq!(inputs.campaign_cost, 20_000.0);
    }

    #[test]
    fn test_set_does_not_clamp_to_slider_bounds() {
        let inputs = CampaignInputs::default()
            .with(InputField::OpenRate, 0.95)
            .with(InputField::CampaignCost, 0.0)
            .with(InputField::EmailListSize, 250.0);

        assert_eq!(inputs.open_rate, 0.95);
        assert_eq!(inputs.campaign_cost, 0.0);
        assert_eq!(inputs.email_list_size, 250);
        assert_eq!(
            inputs.outside_slider_range(),
            vec![
                InputField::EmailListSize,
                InputField::OpenRate,
                InputField::CampaignCost
            ]
        );
    }

    #[test]
    fn test_defaults_sit_inside_slider_ranges() {
        assert!(CampaignInputs::default().outside_slider_range().is_empty());
        assert!(InputField::ConversionRate.bounds().contains(0.001));
        assert!(!InputField::ConversionRate.bounds().contains(0.25));
    }

    #[test]
    fn test_set_rounds_count_fields() {
        let mut inputs = CampaignInputs::default();
        inputs.set(InputField::CampaignFrequency, 6.6);
        assert_eq!(inputs.campaign_frequency, 7);
        inputs.set(InputField::EmailListSize, -40.0);
        assert_eq!(inputs.email_list_size, 0);
    }

    #[test]
    fn test_get_reads_back_every_field() {
        let inputs = CampaignInputs::default();
        let values: Vec<f64> = InputField::ALL.iter().map(|f| inputs.get(*f)).collect();
        assert_eq!(
            values,
            vec![10_000.0, 4.0, 0.20, 0.15, 0.03, 2_500.0, 20_000.0]
        );
    }

    #[test]
    fn test_inputs_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(CampaignInputs::default()).unwrap();
        assert_eq!(json["emailListSize"], 10_000);
        assert_eq!(json["clickThroughRate"], 0.15);
    }

    #[test]
    fn test_only_three_fields_are_rates() {
        let rates: Vec<_> = InputField::ALL.iter().filter(|f| f.is_rate()).collect();
        assert_eq!(rates.len(), 3);
    }
}
