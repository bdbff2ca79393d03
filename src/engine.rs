//! ROI engine.
//!
//! [`compute`] is the whole calculation: a pure mapping from campaign inputs
//! to funnel metrics and ROI. Nothing is validated or clamped; a zero cost
//! yields a non-finite ROI that formatting renders as undefined.

use crate::model::{CampaignInputs, CampaignResults};
use serde::{Deserialize, Serialize};

/// Derive funnel metrics and ROI from a set of campaign inputs.
pub fn compute(inputs: CampaignInputs) -> CampaignResults {
    let number_of_emails = inputs
        .email_list_size
        .saturating_mul(u64::from(inputs.campaign_frequency));
    let email_opens = number_of_emails as f64 * inputs.open_rate;
    let total_clicks = email_opens * inputs.click_through_rate;
    let conversions = total_clicks * inputs.conversion_rate;
    let revenue = conversions * inputs.average_order_value;
    let cost = inputs.campaign_cost;
    let roi = (revenue - cost) / cost;

    CampaignResults {
        number_of_emails,
        email_opens,
        total_clicks,
        conversions,
        revenue,
        cost,
        roi,
    }
}

/// Whether a campaign pays for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiOutlook {
    Positive,
    /// Zero or negative ROI
    Negative,
    /// ROI is not a finite number (zero campaign cost)
    Undefined,
}

impl RoiOutlook {
    pub fn from_roi(roi: f64) -> Self {
        if !roi.is_finite() {
            Self::Undefined
        } else if roi > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive ROI",
            Self::Negative => "Negative ROI",
            Self::Undefined => "ROI undefined",
        }
    }
}

impl CampaignResults {
    /// Revenue minus cost.
    pub fn net_profit(&self) -> f64 {
        self.revenue - self.cost
    }

    pub fn outlook(&self) -> RoiOutlook {
        RoiOutlook::from_roi(self.roi)
    }
}

/// One step of the list -> sent -> opens -> clicks -> conversions funnel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    pub name: &'static str,
    pub count: f64,
    /// Fraction of emails sent that reach this stage
    pub share_of_sent: f64,
    /// Conversion from the previous stage, where the funnel defines one
    pub stage_rate: Option<f64>,
}

/// Funnel breakdown for display.
///
/// The list-size stage reports the full share, matching the emails-sent bar
/// it sits above.
pub fn funnel(inputs: &CampaignInputs, results: &CampaignResults) -> Vec<FunnelStage> {
    let opened = inputs.open_rate;
    let clicked = opened * inputs.click_through_rate;
    let converted = clicked * inputs.conversion_rate;

    vec![
        FunnelStage {
            name: "Email List Size",
            count: inputs.email_list_size as f64,
            share_of_sent: 1.0,
            stage_rate: None,
        },
        FunnelStage {
            name: "Emails Sent",
            count: results.number_of_emails as f64,
            share_of_sent: 1.0,
            stage_rate: None,
        },
        FunnelStage {
            name: "Email Opens",
            count: results.email_opens,
            share_of_sent: opened,
            stage_rate: Some(inputs.open_rate),
        },
        FunnelStage {
            name: "Clicks",
            count: results.total_clicks,
            share_of_sent: clicked,
            stage_rate: Some(inputs.click_through_rate),
        },
        FunnelStage {
            name: "Conversions",
            count: results.conversions,
            share_of_sent: converted,
            stage_rate: Some(inputs.conversion_rate),
        },
    ]
}
