use crate::engine::{funnel, RoiOutlook};
use crate::formatting::{NumberLocale, OutputFormatter};
use crate::model::{CampaignInputs, CampaignResults};
use crate::report::{build_report, ReportOptions, Table as ReportTable, TABLE_COLUMNS};
use chrono::Local;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, Table};

/// Human-readable calculation summary for the terminal.
pub fn format_summary(
    inputs: &CampaignInputs,
    results: &CampaignResults,
    options: &ReportOptions,
    formatter: &dyn OutputFormatter,
    unicode: bool,
) -> String {
    let report = build_report(inputs, results, options, Local::now());
    let locale = &options.locale;
    let mut out = String::new();

    out.push_str(&formatter.header(&report.title));
    out.push_str("\n\n");

    for table in [&report.inputs, &report.results] {
        out.push_str(&formatter.bold(&table.heading));
        out.push('\n');
        out.push_str(&metric_table(table, unicode).to_string());
        out.push_str("\n\n");
    }

    let roi_line = format!("{} ({})", report.roi.value, report.roi.outlook.label());
    let roi_line = match report.roi.outlook {
        RoiOutlook::Positive => formatter.success(&roi_line),
        RoiOutlook::Negative => formatter.error(&roi_line),
        RoiOutlook::Undefined => formatter.warning(&roi_line),
    };
    out.push_str(&format!("{}: {}\n", formatter.bold(&report.roi.label), roi_line));
    out.push_str(&format!(
        "Net Profit/Loss: {}\n\n",
        report.summary.net_profit
    ));

    out.push_str(&formatter.bold("Sales Funnel"));
    out.push('\n');
    out.push_str(&funnel_table(inputs, results, locale, unicode).to_string());
    out.push('\n');
    out.push_str(&formatter.dim(&report.footer));
    out.push('\n');

    out
}

fn new_table(unicode: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(if unicode { UTF8_FULL } else { ASCII_FULL });
    table
}

fn metric_table(source: &ReportTable, unicode: bool) -> Table {
    let mut table = new_table(unicode);
    table.set_header(TABLE_COLUMNS.to_vec());
    for row in &source.rows {
        table.add_row(vec![
            Cell::new(&row.metric),
            Cell::new(&row.value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn funnel_table(
    inputs: &CampaignInputs,
    results: &CampaignResults,
    locale: &NumberLocale,
    unicode: bool,
) -> Table {
    let mut table = new_table(unicode);
    table.set_header(vec!["Stage", "Count", "Share of Sent", "Stage Rate"]);
    for stage in funnel(inputs, results) {
        let stage_rate = stage
            .stage_rate
            .map(|rate| locale.format_percentage(rate))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(stage.name),
            Cell::new(locale.format_number(stage.count)).set_alignment(CellAlignment::Right),
            Cell::new(locale.format_percentage(stage.share_of_sent))
                .set_alignment(CellAlignment::Right),
            Cell::new(stage_rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use crate::formatting::PlainFormatter;
    use crate::model::InputField;

    #[test]
    fn test_summary_contains_headline_figures() {
        let inputs = CampaignInputs::default();
        let summary = format_summary(
            &inputs,
            &compute(inputs),
            &ReportOptions::default(),
            &PlainFormatter,
            false,
        );

        assert!(summary.starts_with("Email Marketing ROI Analysis"));
        assert!(summary.contains("Return on Investment (ROI): 350.00% (Positive ROI)"));
        assert!(summary.contains("Net Profit/Loss: ₹70,000"));
        assert!(summary.contains("| Conversions"));
        assert!(summary.contains("1,200"));
    }

    #[test]
    fn test_summary_with_zero_cost_shows_undefined_roi() {
        let inputs = CampaignInputs::default().with(InputField::CampaignCost, 0.0);
        let summary = format_summary(
            &inputs,
            &compute(inputs),
            &ReportOptions::default(),
            &PlainFormatter,
            true,
        );
        assert!(summary.contains("N/A (ROI undefined)"));
    }
}
