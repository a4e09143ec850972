//! Benchmarks for roster formatting.
//!
//! Measures `RosterFormatter::format_records` on synthetic rosters of
//! increasing size, with and without a spotlight department.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use intradesk_roster::{EmployeeRecord, FormatterOptions, RosterFormatter};

const DEPARTMENTS: [&str; 6] = ["Sales", "HR", "Engineering", "Finance", "Legal", "Support"];
const TITLES: [&str; 4] = ["Staff", "Lead", "Manager", "Director"];

fn synthetic_roster(n: usize) -> Vec<EmployeeRecord> {
    (0..n)
        .map(|i| EmployeeRecord {
            employee_id: Some(format!("E{i:05}")),
            full_name: Some(format!("Employee {i}")),
            gender: Some(if i % 2 == 0 { "Female" } else { "Male" }.to_string()),
            age: Some(22 + (i % 40) as u32),
            department: Some(DEPARTMENTS[i % DEPARTMENTS.len()].to_string()),
            title: Some(TITLES[i % TITLES.len()].to_string()),
            employment_type: Some(if i % 5 == 0 { "Contract" } else { "Full-time" }.to_string()),
            hire_date: Some("2018-04-01".to_string()),
            email: Some(format!("employee{i}@example.com")),
            skills: Some("Python, SQL, Negotiation".to_string()),
            certifications: Some("PMP".to_string()),
            university: Some("Kyoto University".to_string()),
            faculty: Some("Engineering".to_string()),
            graduation_date: Some("2018-03-31".to_string()),
        })
        .collect()
}

fn bench_format_records(c: &mut Criterion) {
    let plain = RosterFormatter::default();
    let spotlight = RosterFormatter::new(FormatterOptions {
        spotlight_department: Some("HR".to_string()),
        ..FormatterOptions::default()
    });

    let mut group = c.benchmark_group("format_records");
    for size in [100usize, 1_000, 10_000] {
        let records = synthetic_roster(size);
        group.bench_with_input(BenchmarkId::new("plain", size), &records, |b, records| {
            b.iter(|| plain.format_records(black_box("roster.csv"), black_box(records)))
        });
        group.bench_with_input(BenchmarkId::new("spotlight", size), &records, |b, records| {
            b.iter(|| spotlight.format_records(black_box("roster.csv"), black_box(records)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_format_records);
criterion_main!(benches);
