use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tat_engine::{CaseRecord, TatEngine};
use tat_time::{Date, WorkingCalendar};

fn sample_batch(n: i32) -> Vec<CaseRecord> {
    let base = Date::from_ymd(2025, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let start = base + (i % 300);
            let record = CaseRecord::new()
                .field("Sl.No", i.to_string())
                .received(start)
                .dispatched(start + 10 + (i % 20));
            if i % 4 == 0 {
                record.reinitiated(start + 5)
            } else {
                record
            }
        })
        .collect()
}

fn bench_evaluate_batch(c: &mut Criterion) {
    let engine = TatEngine::new(WorkingCalendar::default());
    let records = sample_batch(10_000);

    c.bench_function("evaluate_batch 10k", |b| {
        b.iter(|| engine.evaluate_batch(black_box(records.clone())))
    });

    #[cfg(feature = "parallel")]
    c.bench_function("evaluate_batch_par 10k", |b| {
        b.iter(|| engine.evaluate_batch_par(black_box(records.clone())))
    });
}

criterion_group!(benches, bench_evaluate_batch);
criterion_main!(benches);
