// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification lifecycle bookkeeping.
//!
//! Measures the performance of:
//! - Inserting notifications into the store
//! - Full lifecycle transitions (enter, exit, retire)
//! - Building the snapshot a renderer receives after every change

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toasts::notifications::{
    Notification, NotificationId, Request, Severity, Store, Timings,
};
use std::hint::black_box;
use tokio::time::Instant;

fn notification(timings: &Timings, now: Instant) -> Notification {
    Notification::from_request(
        NotificationId::new(),
        Request::new(Severity::Info)
            .title("Exchange rate updated")
            .message("1 EUR = 1.08 USD"),
        timings,
        now,
    )
}

fn filled_store(count: usize, timings: &Timings, now: Instant) -> Store {
    let mut store = Store::new();
    for _ in 0..count {
        store.insert(notification(timings, now));
    }
    store
}

fn bench_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");
    let timings = Timings::default();
    let now = Instant::now();

    group.bench_function("insert_enter_exit_retire", |b| {
        b.iter(|| {
            let mut store = Store::new();
            let n = notification(&timings, now);
            let id = n.id();
            store.insert(n);
            black_box(store.enter_completed(id, now));
            black_box(store.begin_exit(id, now));
            black_box(store.retire(id));
        });
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");
    let timings = Timings::default();
    let now = Instant::now();

    for count in [3usize, 20, 100] {
        let store = filled_store(count, &timings, now);
        group.bench_with_input(BenchmarkId::new("snapshot", count), &store, |b, store| {
            b.iter(|| black_box(store.snapshot()));
        });
    }

    group.finish();
}

fn bench_dismiss_in_crowd(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");
    let timings = Timings::default();
    let now = Instant::now();

    group.bench_function("begin_exit_last_of_100", |b| {
        b.iter_batched(
            || {
                let store = filled_store(100, &timings, now);
                let last = store.iter().last().map(Notification::id);
                (store, last)
            },
            |(mut store, last)| {
                if let Some(id) = last {
                    black_box(store.begin_exit(id, now));
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_lifecycle, bench_snapshot, bench_dismiss_in_crowd);
criterion_main!(benches);
