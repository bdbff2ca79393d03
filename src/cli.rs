use crate::config::InputDefaults;
use crate::model::CampaignInputs;
use crate::report::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "email-roi")]
#[command(about = "Email marketing ROI calculator and report exporter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .email-roi.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Plain ASCII output without colors
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate funnel metrics and ROI for a campaign
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: CalculateFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the ROI analysis as a report document
    Export {
        #[command(flatten)]
        inputs: InputArgs,

        /// Report format
        #[arg(short, long, value_enum, default_value = "pdf")]
        format: ReportFormat,

        /// Output file or directory ("-" for stdout); defaults to the
        /// configured file name in the current directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Campaign input overrides; anything omitted comes from configuration.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct InputArgs {
    /// Email list size (subscribers)
    #[arg(long = "list-size")]
    pub email_list_size: Option<u64>,

    /// Campaigns sent per month
    #[arg(long = "frequency")]
    pub campaign_frequency: Option<u32>,

    /// Open rate as a fraction of emails sent (0.20 = 20%)
    #[arg(long = "open-rate", allow_negative_numbers = true)]
    pub open_rate: Option<f64>,

    /// Click-through rate as a fraction of opens
    #[arg(long = "click-through-rate", visible_alias = "ctr", allow_negative_numbers = true)]
    pub click_through_rate: Option<f64>,

    /// Conversion rate as a fraction of clicks
    #[arg(long = "conversion-rate", allow_negative_numbers = true)]
    pub conversion_rate: Option<f64>,

    /// Average order value
    #[arg(long = "order-value", visible_alias = "aov", allow_negative_numbers = true)]
    pub average_order_value: Option<f64>,

    /// Monthly campaign cost
    #[arg(long = "cost", allow_negative_numbers = true)]
    pub campaign_cost: Option<f64>,
}

impl InputArgs {
    pub fn apply(&self, base: CampaignInputs) -> CampaignInputs {
        InputDefaults {
            email_list_size: self.email_list_size,
            campaign_frequency: self.campaign_frequency,
            open_rate: self.open_rate,
            click_through_rate: self.click_through_rate,
            conversion_rate: self.conversion_rate,
            average_order_value: self.average_order_value,
            campaign_cost: self.campaign_cost,
        }
        .apply(base)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalculateFormat {
    /// Tables for the terminal
    Terminal,
    /// Raw figures as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Pdf,
    Markdown,
    Json,
}

impl From<ReportFormat> for ExportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Pdf => ExportFormat::Pdf,
            ReportFormat::Markdown => ExportFormat::Markdown,
            ReportFormat::Json => ExportFormat::Json,
        }
    }
}
