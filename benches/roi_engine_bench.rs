use chrono::{Local, TimeZone};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use email_roi::{compute, CampaignInputs, ExportFormat, ReportExporter, ReportOptions};
use std::hint::black_box;

fn benchmark_compute(c: &mut Criterion) {
    let inputs = CampaignInputs::default();

    c.bench_function("compute_default_inputs", |b| {
        b.iter(|| black_box(compute(black_box(inputs))))
    });
}

fn benchmark_export(c: &mut Criterion) {
    let inputs = CampaignInputs::default();
    let results = Some(compute(inputs));
    let generated_at = Local.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();

    let mut group = c.benchmark_group("export");
    for format in [ExportFormat::Pdf, ExportFormat::Markdown, ExportFormat::Json] {
        let exporter = ReportExporter::new(ReportOptions::default(), format);
        group.bench_with_input(
            BenchmarkId::from_parameter(format.extension()),
            &exporter,
            |b, exporter| {
                b.iter(|| {
                    let document = exporter
                        .export_at(black_box(inputs), results, generated_at)
                        .unwrap();
                    black_box(document.bytes.len())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_compute, benchmark_export);
criterion_main!(benches);
