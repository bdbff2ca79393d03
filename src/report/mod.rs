//! Report export.
//!
//! Exporting happens in two steps. [`build_report`] turns an inputs/results
//! pair into a [`Report`], the formatted content of the document: header,
//! inputs table, results table, ROI highlight and footer. A
//! [`ReportRenderer`] then encodes that report as PDF, Markdown or JSON.
//!
//! Apart from the generation date, the report is a pure function of its
//! inputs, so two exports of the same inputs and results carry identical
//! tables.

pub mod json;
pub mod markdown;
pub mod pdf;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use pdf::PdfRenderer;

use crate::engine::{self, RoiOutlook};
use crate::errors::{Result, RoiError};
use crate::formatting::{format_date, NumberLocale};
use crate::model::{CampaignInputs, CampaignResults, InputField};
use chrono::{DateTime, Local};
use serde::Serialize;

pub const REPORT_TITLE: &str = "Email Marketing ROI Analysis";
pub const INPUTS_HEADING: &str = "Campaign Inputs";
pub const RESULTS_HEADING: &str = "Campaign Results";
pub const ROI_LABEL: &str = "Return on Investment (ROI)";
pub const DEFAULT_FOOTER: &str = "Email ROI Insights | www.emailroiinsights.com";
pub const DEFAULT_FILE_NAME: &str = "Email_Marketing_ROI_Analysis.pdf";
pub const TABLE_COLUMNS: [&str; 2] = ["Metric", "Value"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    pub fn renderer(&self) -> Box<dyn ReportRenderer> {
        match self {
            Self::Pdf => Box::new(PdfRenderer::default()),
            Self::Markdown => Box::new(MarkdownRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

/// A two-column `Metric | Value` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub metric: String,
    pub value: String,
}

impl Row {
    pub fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub heading: String,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoiHighlight {
    pub label: String,
    pub value: String,
    pub outlook: RoiOutlook,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelRow {
    pub stage: String,
    pub count: String,
    pub share_of_sent: String,
}

/// Figures outside the fixed PDF layout, carried by the text renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub net_profit: String,
    pub funnel: Vec<FunnelRow>,
}

/// Fully formatted report content, independent of the output encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub title: String,
    /// Date-only, locale formatted
    pub generated_on: String,
    pub generated_at: DateTime<Local>,
    pub inputs: Table,
    pub results: Table,
    pub roi: RoiHighlight,
    pub summary: ReportSummary,
    pub footer: String,
}

impl Report {
    /// Every section except the generation date and timestamp.
    pub fn content(&self) -> (&Table, &Table, &RoiHighlight, &ReportSummary) {
        (&self.inputs, &self.results, &self.roi, &self.summary)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub locale: NumberLocale,
    pub footer: String,
    pub file_name: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            footer: DEFAULT_FOOTER.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl ReportOptions {
    /// Configured file name with the extension swapped for `format`.
    pub fn file_name_for(&self, format: ExportFormat) -> String {
        let stem = self
            .file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .filter(|stem| !stem.is_empty())
            .unwrap_or(&self.file_name);
        format!("{}.{}", stem, format.extension())
    }
}

/// Lay out the report content for one inputs/results pair.
pub fn build_report(
    inputs: &CampaignInputs,
    results: &CampaignResults,
    options: &ReportOptions,
    generated_at: DateTime<Local>,
) -> Report {
    let locale = &options.locale;

    Report {
        title: REPORT_TITLE.to_string(),
        generated_on: format_date(generated_at.date_naive()),
        generated_at,
        inputs: inputs_table(inputs, locale),
        results: results_table(results, locale),
        roi: RoiHighlight {
            label: ROI_LABEL.to_string(),
            value: locale.format_percentage(results.roi),
            outlook: results.outlook(),
        },
        summary: ReportSummary {
            net_profit: locale.format_currency(results.net_profit()),
            funnel: engine::funnel(inputs, results)
                .into_iter()
                .map(|stage| FunnelRow {
                    stage: stage.name.to_string(),
                    count: locale.format_number(stage.count),
                    share_of_sent: locale.format_percentage(stage.share_of_sent),
                })
                .collect(),
        },
        footer: options.footer.clone(),
    }
}

fn inputs_table(inputs: &CampaignInputs, locale: &NumberLocale) -> Table {
    let rows = InputField::ALL
        .iter()
        .map(|field| {
            let value = match field {
                InputField::EmailListSize => locale.format_count(inputs.email_list_size),
                InputField::CampaignFrequency => inputs.campaign_frequency.to_string(),
                InputField::OpenRate
                | InputField::ClickThroughRate
                | InputField::ConversionRate => locale.format_percentage(inputs.get(*field)),
                InputField::AverageOrderValue | InputField::CampaignCost => {
                    locale.format_currency(inputs.get(*field))
                }
            };
            Row::new(field.label(), value)
        })
        .collect();

    Table {
        heading: INPUTS_HEADING.to_string(),
        rows,
    }
}

fn results_table(results: &CampaignResults, locale: &NumberLocale) -> Table {
    Table {
        heading: RESULTS_HEADING.to_string(),
        rows: vec![
            Row::new("Total Emails Sent", locale.format_count(results.number_of_emails)),
            Row::new("Email Opens", locale.format_number(results.email_opens)),
            Row::new("Total Clicks", locale.format_number(results.total_clicks)),
            Row::new("Conversions", locale.format_number(results.conversions)),
            Row::new("Revenue Generated", locale.format_currency(results.revenue)),
            Row::new("Campaign Cost", locale.format_currency(results.cost)),
        ],
    }
}

/// Encodes a [`Report`] into file bytes.
pub trait ReportRenderer {
    fn render(&self, report: &Report) -> Result<Vec<u8>>;
}

/// Rendered export ready to hand to a destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub file_name: String,
    pub format: ExportFormat,
    pub report: Report,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportExporter {
    pub options: ReportOptions,
    pub format: ExportFormat,
}

impl ReportExporter {
    pub fn new(options: ReportOptions, format: ExportFormat) -> Self {
        Self { options, format }
    }

    /// Export using the current local time as the generation timestamp.
    ///
    /// `results` is `None` until a calculation has run; exporting then fails
    /// with [`RoiError::NoResultsAvailable`] before anything is rendered.
    pub fn export(
        &self,
        inputs: CampaignInputs,
        results: Option<CampaignResults>,
    ) -> Result<Document> {
        self.export_at(inputs, results, Local::now())
    }

    pub fn export_at(
        &self,
        inputs: CampaignInputs,
        results: Option<CampaignResults>,
        generated_at: DateTime<Local>,
    ) -> Result<Document> {
        let results = results.ok_or(RoiError::NoResultsAvailable)?;
        let report = build_report(&inputs, &results, &self.options, generated_at);
        let bytes = self.format.renderer().render(&report)?;
        log::debug!(
            "Rendered {:?} report ({} bytes, ROI {})",
            self.format,
            bytes.len(),
            report.roi.value
        );

        Ok(Document {
            file_name: self.options.file_name_for(self.format),
            format: self.format,
            report,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap()
    }

    fn default_report() -> Report {
        let inputs = CampaignInputs::default();
        build_report(&inputs, &compute(inputs), &ReportOptions::default(), fixed_time())
    }

    fn rows(table: &Table) -> Vec<(&str, &str)> {
        table
            .rows
            .iter()
            .map(|r| (r.metric.as_str(), r.value.as_str()))
            .collect()
    }

    #[test]
    fn test_inputs_table_rows_in_order() {
        let report = default_report();
        assert_eq!(report.inputs.heading, "Campaign Inputs");
        assert_eq!(
            rows(&report.inputs),
            vec![
                ("Email List Size", "10,000"),
                ("Monthly Campaign Frequency", "4"),
                ("Open Rate", "20.00%"),
                ("Click-Through Rate", "15.00%"),
                ("Conversion Rate", "3.00%"),
                ("Average Order Value", "₹2,500"),
                ("Campaign Cost", "₹20,000"),
            ]
        );
    }

    #[test]
    fn test_results_table_rows_in_order() {
        let report = default_report();
        assert_eq!(report.results.heading, "Campaign Results");
        assert_eq!(
            rows(&report.results),
            vec![
                ("Total Emails Sent", "40,000"),
                ("Email Opens", "8,000"),
                ("Total Clicks", "1,200"),
                ("Conversions", "36"),
                ("Revenue Generated", "₹90,000"),
                ("Campaign Cost", "₹20,000"),
            ]
        );
    }

    #[test]
    fn test_roi_highlight_and_header() {
        let report = default_report();
        assert_eq!(report.title, "Email Marketing ROI Analysis");
        assert_eq!(report.generated_on, "15/10/2026");
        assert_eq!(report.roi.label, "Return on Investment (ROI)");
        assert_eq!(report.roi.value, "350.00%");
        assert_eq!(report.roi.outlook, RoiOutlook::Positive);
        assert_eq!(report.footer, DEFAULT_FOOTER);
        assert_eq!(report.summary.net_profit, "₹70,000");
    }

    #[test]
    fn test_zero_cost_roi_uses_undefined_literal() {
        let inputs = CampaignInputs::default().with(InputField::CampaignCost, 0.0);
        let report = build_report(
            &inputs,
            &compute(inputs),
            &ReportOptions::default(),
            fixed_time(),
        );
        assert_eq!(report.roi.value, "N/A");
        assert_eq!(report.roi.outlook, RoiOutlook::Undefined);
    }

    #[test]
    fn test_tiny_cost_roi_is_a_well_formed_percentage() {
        let inputs = CampaignInputs::default().with(InputField::CampaignCost, 1e-300);
        let results = compute(inputs);
        assert!(results.roi.is_finite());

        let report = build_report(&inputs, &results, &ReportOptions::default(), fixed_time());
        let value = &report.roi.value;
        assert!(value.ends_with(".00%"), "{value}");
        assert!(!value.contains("inf"), "{value}");
        assert_eq!(report.roi.outlook, RoiOutlook::Positive);
    }

    #[test]
    fn test_export_without_results_is_refused() {
        let exporter = ReportExporter::default();
        let err = exporter
            .export(CampaignInputs::default(), None)
            .unwrap_err();
        assert!(matches!(err, RoiError::NoResultsAvailable));
    }

    #[test]
    fn test_file_name_follows_format() {
        let options = ReportOptions::default();
        assert_eq!(
            options.file_name_for(ExportFormat::Pdf),
            "Email_Marketing_ROI_Analysis.pdf"
        );
        assert_eq!(
            options.file_name_for(ExportFormat::Markdown),
            "Email_Marketing_ROI_Analysis.md"
        );

        let bare = ReportOptions {
            file_name: "roi-report".to_string(),
            ..ReportOptions::default()
        };
        assert_eq!(bare.file_name_for(ExportFormat::Json), "roi-report.json");
    }

    #[test]
    fn test_export_is_idempotent_for_fixed_timestamp() {
        let exporter = ReportExporter::default();
        let inputs = CampaignInputs::default();
        let results = Some(compute(inputs));

        let first = exporter.export_at(inputs, results, fixed_time()).unwrap();
        let second = exporter.export_at(inputs, results, fixed_time()).unwrap();
        assert_eq!(first.bytes, second.bytes);
        assert_eq!(first.file_name, "Email_Marketing_ROI_Analysis.pdf");
    }

    #[test]
    fn test_export_tables_ignore_timestamp() {
        let exporter = ReportExporter::new(ReportOptions::default(), ExportFormat::Markdown);
        let inputs = CampaignInputs::default();
        let results = Some(compute(inputs));

        let first = exporter.export_at(inputs, results, fixed_time()).unwrap();
        let later = Local.with_ymd_and_hms(2027, 1, 2, 18, 0, 0).unwrap();
        let second = exporter.export_at(inputs, results, later).unwrap();

        assert_eq!(first.report.content(), second.report.content());
        assert_ne!(first.report.generated_on, second.report.generated_on);
    }
}
