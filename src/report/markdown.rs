use super::{Report, ReportRenderer, Table, TABLE_COLUMNS};
use crate::errors::Result;
use std::io::Write;

/// Markdown rendering of a report, one section per heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, report: &Report) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        write_header(&mut out, report)?;
        write_table(&mut out, &report.inputs)?;
        write_table(&mut out, &report.results)?;
        write_roi(&mut out, report)?;
        write_funnel(&mut out, report)?;
        write_footer(&mut out, report)?;
        Ok(out)
    }
}

fn write_header(out: &mut impl Write, report: &Report) -> Result<()> {
    writeln!(out, "# {}", report.title)?;
    writeln!(out)?;
    writeln!(out, "Generated on: {}", report.generated_on)?;
    writeln!(out)?;
    Ok(())
}

fn write_table(out: &mut impl Write, table: &Table) -> Result<()> {
    writeln!(out, "## {}", table.heading)?;
    writeln!(out)?;
    writeln!(out, "| {} | {} |", TABLE_COLUMNS[0], TABLE_COLUMNS[1])?;
    writeln!(out, "|--------|------:|")?;
    for row in &table.rows {
        writeln!(out, "| **{}** | {} |", row.metric, row.value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_roi(out: &mut impl Write, report: &Report) -> Result<()> {
    writeln!(out, "## {}", report.roi.label)?;
    writeln!(out)?;
    writeln!(
        out,
        "> **{}** ({})",
        report.roi.value,
        report.roi.outlook.label()
    )?;
    writeln!(out)?;
    writeln!(out, "Net Profit/Loss: {}", report.summary.net_profit)?;
    writeln!(out)?;
    Ok(())
}

fn write_funnel(out: &mut impl Write, report: &Report) -> Result<()> {
    writeln!(out, "## Sales Funnel")?;
    writeln!(out)?;
    writeln!(out, "| Stage | Count | Share of Emails Sent |")?;
    writeln!(out, "|-------|------:|---------------------:|")?;
    for row in &report.summary.funnel {
        writeln!(out, "| {} | {} | {} |", row.stage, row.count, row.share_of_sent)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_footer(out: &mut impl Write, report: &Report) -> Result<()> {
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(out, "_{}_", report.footer)?;
    Ok(())
}
