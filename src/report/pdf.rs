//! A4 PDF rendering of a report.
//!
//! Layout is expressed in millimetres from the top-left corner of the page
//! and converted to PDF points (origin bottom-left) when operations are
//! emitted. Content flows down the page; an element that would cross into
//! the footer area starts a new page, and tables repeat their header row on
//! continuation pages. The footer is stamped on every page once layout is
//! complete.
//!
//! Only the two standard Helvetica faces are used, so no fonts are embedded.
//! Text is encoded as WinAnsi; characters outside that code page are
//! transliterated (`₹` becomes `Rs.`).

use super::{Report, ReportRenderer, Table, TABLE_COLUMNS};
use crate::errors::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as PdfDocument, Object};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const PT_PER_MM: f32 = 72.0 / 25.4;

const MARGIN_MM: f32 = 14.0;
const CONTINUATION_TOP_MM: f32 = 20.0;
const CONTENT_BOTTOM_MM: f32 = 277.0;
const FOOTER_BASELINE_MM: f32 = 285.0;

const HEADER_BAND_MM: f32 = 40.0;
const FIRST_SECTION_MM: f32 = 50.0;
const HEADING_GAP_MM: f32 = 5.0;
const SECTION_GAP_MM: f32 = 20.0;
const ROW_HEIGHT_MM: f32 = 8.0;
const CELL_PADDING_MM: f32 = 2.0;
const ROI_BLOCK_MARGIN_MM: f32 = 20.0;
const ROI_BLOCK_HEIGHT_MM: f32 = 40.0;

const PRODUCER: &str = concat!("email-roi ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

const DARK_GREEN: Rgb = Rgb(36, 94, 79);
const MINT: Rgb = Rgb(122, 201, 167);
const GOLD: Rgb = Rgb(233, 196, 106);
const WHITE: Rgb = Rgb(255, 255, 255);
const GREY: Rgb = Rgb(128, 128, 128);
const GRID: Rgb = Rgb(200, 200, 200);
const BODY_TEXT: Rgb = Rgb(51, 51, 51);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(&self) -> &'static [u8] {
        match self {
            Self::Regular => b"F1",
            Self::Bold => b"F2",
        }
    }

    /// Advance width of one WinAnsi byte in 1/1000 em.
    fn glyph_width(&self, byte: u8) -> u16 {
        let table = match self {
            Self::Regular => &HELVETICA_WIDTHS,
            Self::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        match byte {
            32..=126 => table[usize::from(byte - 32)],
            _ => 556,
        }
    }

    fn text_width_mm(&self, encoded: &[u8], size: f32) -> f32 {
        let units: u32 = encoded.iter().map(|b| u32::from(self.glyph_width(*b))).sum();
        units as f32 / 1000.0 * size / PT_PER_MM
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
    Right,
}

/// Renders reports as paginated A4 PDF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl ReportRenderer for PdfRenderer {
    fn render(&self, report: &Report) -> Result<Vec<u8>> {
        let mut layout = Layout::new();

        draw_header_band(&mut layout, report);
        layout.cursor = FIRST_SECTION_MM;
        draw_table(&mut layout, &report.inputs);
        layout.cursor += SECTION_GAP_MM;
        draw_table(&mut layout, &report.results);
        draw_roi_block(&mut layout, report);

        let pages = layout.finish(&report.footer);
        assemble(pages, report)
    }
}

struct Layout {
    pages: Vec<Vec<Operation>>,
    /// Distance from the top of the current page, in mm
    cursor: f32,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            cursor: 0.0,
        }
    }

    fn ops(&mut self) -> &mut Vec<Operation> {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.cursor = CONTINUATION_TOP_MM;
    }

    /// Start a new page unless `height` mm still fit above the footer.
    fn ensure_space(&mut self, height: f32) -> bool {
        if self.cursor + height > CONTENT_BOTTOM_MM {
            self.new_page();
            true
        } else {
            false
        }
    }

    fn fill_rect(&mut self, x: f32, top: f32, width: f32, height: f32, color: Rgb) {
        let ops = self.ops();
        ops.push(Operation::new("q", vec![]));
        ops.push(color_op("rg", color));
        ops.push(rect_op(x, top, width, height));
        ops.push(Operation::new("f", vec![]));
        ops.push(Operation::new("Q", vec![]));
    }

    fn stroke_rect(&mut self, x: f32, top: f32, width: f32, height: f32, color: Rgb) {
        let ops = self.ops();
        ops.push(Operation::new("q", vec![]));
        ops.push(color_op("RG", color));
        ops.push(Operation::new("w", vec![real(0.5)]));
        ops.push(rect_op(x, top, width, height));
        ops.push(Operation::new("S", vec![]));
        ops.push(Operation::new("Q", vec![]));
    }

    #[allow(clippy::too_many_arguments)]
    fn text(
        &mut self,
        text: &str,
        x: f32,
        baseline: f32,
        size: f32,
        font: Font,
        color: Rgb,
        align: Align,
    ) {
        let ops = text_ops(text, x, baseline, size, font, color, align);
        self.ops().extend(ops);
    }

    fn finish(mut self, footer: &str) -> Vec<Vec<Operation>> {
        for page in &mut self.pages {
            page.extend(text_ops(
                footer,
                PAGE_WIDTH_MM / 2.0,
                FOOTER_BASELINE_MM,
                10.0,
                Font::Regular,
                GREY,
                Align::Center,
            ));
        }
        self.pages
    }
}

#[allow(clippy::too_many_arguments)]
fn text_ops(
    text: &str,
    x: f32,
    baseline: f32,
    size: f32,
    font: Font,
    color: Rgb,
    align: Align,
) -> Vec<Operation> {
    let encoded = encode_win_ansi(text);
    let width = font.text_width_mm(&encoded, size);
    let left = match align {
        Align::Left => x,
        Align::Center => x - width / 2.0,
        Align::Right => x - width,
    };

    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(font.resource().to_vec()), real(size)],
        ),
        color_op("rg", color),
        Operation::new(
            "Td",
            vec![real(left * PT_PER_MM), real(to_pdf_y(baseline))],
        ),
        Operation::new("Tj", vec![Object::string_literal(encoded)]),
        Operation::new("ET", vec![]),
    ]
}

fn draw_header_band(layout: &mut Layout, report: &Report) {
    layout.fill_rect(0.0, 0.0, PAGE_WIDTH_MM, HEADER_BAND_MM, DARK_GREEN);
    let center = PAGE_WIDTH_MM / 2.0;
    layout.text(&report.title, center, 25.0, 24.0, Font::Regular, WHITE, Align::Center);
    layout.text(
        &format!("Generated on: {}", report.generated_on),
        center,
        35.0,
        10.0,
        Font::Regular,
        WHITE,
        Align::Center,
    );
}

fn draw_table(layout: &mut Layout, table: &Table) {
    // keep the heading with the header row and at least one body row
    layout.ensure_space(HEADING_GAP_MM + 2.0 * ROW_HEIGHT_MM);
    layout.text(
        &table.heading,
        20.0,
        layout.cursor,
        16.0,
        Font::Regular,
        DARK_GREEN,
        Align::Left,
    );
    layout.cursor += HEADING_GAP_MM;
    draw_table_head(layout);

    for row in &table.rows {
        if layout.ensure_space(ROW_HEIGHT_MM) {
            draw_table_head(layout);
        }
        draw_row(layout, &row.metric, &row.value, None, Font::Bold, BODY_TEXT, Align::Right);
    }
}

fn draw_table_head(layout: &mut Layout) {
    draw_row(
        layout,
        TABLE_COLUMNS[0],
        TABLE_COLUMNS[1],
        Some(MINT),
        Font::Bold,
        DARK_GREEN,
        Align::Left,
    );
}

fn draw_row(
    layout: &mut Layout,
    metric: &str,
    value: &str,
    fill: Option<Rgb>,
    metric_font: Font,
    text_color: Rgb,
    value_align: Align,
) {
    let top = layout.cursor;
    let column = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / 2.0;
    let value_x = MARGIN_MM + column;
    let baseline = top + ROW_HEIGHT_MM / 2.0 + 1.5;

    if let Some(color) = fill {
        layout.fill_rect(MARGIN_MM, top, 2.0 * column, ROW_HEIGHT_MM, color);
    }
    layout.stroke_rect(MARGIN_MM, top, column, ROW_HEIGHT_MM, GRID);
    layout.stroke_rect(value_x, top, column, ROW_HEIGHT_MM, GRID);

    layout.text(
        metric,
        MARGIN_MM + CELL_PADDING_MM,
        baseline,
        10.0,
        metric_font,
        text_color,
        Align::Left,
    );
    let (x, font) = match value_align {
        Align::Right => (value_x + column - CELL_PADDING_MM, Font::Regular),
        _ => (value_x + CELL_PADDING_MM, metric_font),
    };
    layout.text(value, x, baseline, 10.0, font, text_color, value_align);

    layout.cursor += ROW_HEIGHT_MM;
}

fn draw_roi_block(layout: &mut Layout, report: &Report) {
    layout.cursor += ROI_BLOCK_MARGIN_MM;
    layout.ensure_space(ROI_BLOCK_HEIGHT_MM);

    let top = layout.cursor;
    let center = PAGE_WIDTH_MM / 2.0;
    layout.fill_rect(20.0, top, PAGE_WIDTH_MM - 40.0, ROI_BLOCK_HEIGHT_MM, GOLD);
    layout.text(
        &report.roi.label,
        center,
        top + 15.0,
        18.0,
        Font::Regular,
        DARK_GREEN,
        Align::Center,
    );
    layout.text(
        &report.roi.value,
        center,
        top + 30.0,
        24.0,
        Font::Bold,
        DARK_GREEN,
        Align::Center,
    );
    layout.cursor = top + ROI_BLOCK_HEIGHT_MM;
}

fn assemble(pages: Vec<Vec<Operation>>, report: &Report) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(lopdf::Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                real(PAGE_WIDTH_MM * PT_PER_MM),
                real(PAGE_HEIGHT_MM * PT_PER_MM),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(&report.title)),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(
            report.generated_at.format("D:%Y%m%d%H%M%S").to_string(),
        ),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

fn to_pdf_y(top_mm: f32) -> f32 {
    (PAGE_HEIGHT_MM - top_mm) * PT_PER_MM
}

fn rect_op(x: f32, top: f32, width: f32, height: f32) -> Operation {
    Operation::new(
        "re",
        vec![
            real(x * PT_PER_MM),
            real(to_pdf_y(top + height)),
            real(width * PT_PER_MM),
            real(height * PT_PER_MM),
        ],
    )
}

fn color_op(operator: &str, Rgb(r, g, b): Rgb) -> Operation {
    Operation::new(
        operator,
        vec![
            real(f32::from(r) / 255.0),
            real(f32::from(g) / 255.0),
            real(f32::from(b) / 255.0),
        ],
    )
}

/// Encode text for a WinAnsi (cp1252) standard font.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => out.push(ch as u8),
            '₹' => out.extend_from_slice(b"Rs."),
            '€' => out.push(0x80),
            '•' => out.push(0x95),
            '–' => out.push(0x96),
            '—' => out.push(0x97),
            '‘' => out.push(0x91),
            '’' => out.push(0x92),
            '“' => out.push(0x93),
            '”' => out.push(0x94),
            _ => out.push(b'?'),
        }
    }
    out
}

// Advance widths for ASCII 32..=126 from the standard Adobe font metrics.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use crate::model::CampaignInputs;
    use crate::report::{build_report, Row, ReportOptions};
    use chrono::{Local, TimeZone};

    fn sample_report() -> Report {
        let inputs = CampaignInputs::default();
        let generated_at = Local.with_ymd_and_hms(2026, 10, 15, 8, 0, 0).unwrap();
        build_report(
            &inputs,
            &compute(inputs),
            &ReportOptions::default(),
            generated_at,
        )
    }

    fn page_texts(bytes: &[u8]) -> Vec<String> {
        let doc = PdfDocument::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .map(|id| String::from_utf8_lossy(&doc.get_page_content(*id).unwrap()).into_owned())
            .collect()
    }

    #[test]
    fn test_width_tables_cover_printable_ascii() {
        assert_eq!(HELVETICA_WIDTHS.len(), 126 - 32 + 1);
        assert_eq!(Font::Regular.glyph_width(b'0'), 556);
        assert_eq!(Font::Bold.glyph_width(b'W'), 944);
        assert_eq!(Font::Regular.glyph_width(0x80), 556);
    }

    #[test]
    fn test_encode_win_ansi_transliterates_rupee() {
        assert_eq!(encode_win_ansi("₹2,500"), b"Rs.2,500".to_vec());
        assert_eq!(encode_win_ansi("ü"), vec![0xfc]);
        assert_eq!(encode_win_ansi("∞"), b"?".to_vec());
    }

    #[test]
    fn test_single_page_report_contains_all_sections() {
        let bytes = PdfRenderer.render(&sample_report()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let pages = page_texts(&bytes);
        assert_eq!(pages.len(), 1);
        let page = &pages[0];
        for needle in [
            "Email Marketing ROI Analysis",
            "Generated on: 15/10/2026",
            "Campaign Inputs",
            "Monthly Campaign Frequency",
            "Campaign Results",
            "Revenue Generated",
            "Rs.90,000",
            "Return on Investment",
            "350.00%",
            "Email ROI Insights | www.emailroiinsights.com",
        ] {
            assert!(page.contains(needle), "missing {needle:?} in page content");
        }

        let inputs_at = page.find("Campaign Inputs").unwrap();
        let results_at = page.find("Campaign Results").unwrap();
        let roi_at = page.find("350.00%").unwrap();
        assert!(inputs_at < results_at && results_at < roi_at);
    }

    #[test]
    fn test_long_tables_paginate_with_footer_on_every_page() {
        let mut report = sample_report();
        report.results.rows = (0..60)
            .map(|i| Row::new(format!("Metric {i}"), i.to_string()))
            .collect();

        let bytes = PdfRenderer.render(&report).unwrap();
        let pages = page_texts(&bytes);

        assert!(pages.len() >= 3, "expected pagination, got {} pages", pages.len());
        for page in &pages {
            assert!(page.contains("Email ROI Insights"));
            assert!(page.contains("(Metric)"));
        }
        assert!(pages.last().unwrap().contains("350.00%"));
    }

    #[test]
    fn test_same_report_renders_identical_bytes() {
        let report = sample_report();
        assert_eq!(
            PdfRenderer.render(&report).unwrap(),
            PdfRenderer.render(&report).unwrap()
        );
    }
}
