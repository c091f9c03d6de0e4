//! FILENAME: core/report-engine/benches/report_insertion.rs
//! Bulk insertion throughput, with and without working-day conversion.

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use report_engine::{
    build_report, workbasket_report, MonitorQueryItem, Report, ReportOptions,
    TimeIntervalColumnHeader,
};
use working_time::{CalendarConfig, HolidayCalendar};

fn headers() -> Vec<TimeIntervalColumnHeader> {
    let mut headers = vec![TimeIntervalColumnHeader::below(-11)];
    for lower in (-10..60).step_by(5) {
        headers.push(TimeIntervalColumnHeader::new(lower, lower + 4).unwrap());
    }
    headers.push(TimeIntervalColumnHeader::above(60));
    headers
}

fn items(count: usize) -> Vec<MonitorQueryItem> {
    (0..count)
        .map(|i| MonitorQueryItem::new(format!("WB{}", i % 50), (i % 90) as i32 - 15, 1))
        .collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_insertion");
    let calendar = HolidayCalendar::new(&CalendarConfig {
        german_public_holidays_enabled: true,
        ..CalendarConfig::default()
    })
    .unwrap();
    let options = ReportOptions::in_working_days()
        .with_as_of(Utc.with_ymd_and_hms(2024, 6, 12, 12, 0, 0).unwrap());

    for count in [1_000, 10_000, 100_000] {
        let input = items(count);

        group.bench_with_input(BenchmarkId::new("calendar_days", count), &input, |b, input| {
            b.iter(|| {
                let report: Report<MonitorQueryItem, TimeIntervalColumnHeader> =
                    build_report(headers(), Vec::new(), input.iter().cloned());
                black_box(report.total_value())
            })
        });

        group.bench_with_input(BenchmarkId::new("working_days", count), &input, |b, input| {
            b.iter(|| {
                let report =
                    workbasket_report(headers(), input.iter().cloned(), &calendar, &options)
                        .unwrap();
                black_box(report.total_value())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insertion);
criterion_main!(benches);
