use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use std::thread;
use sync_queue_rs::{
    ChannelQueue, CircularQueue, ListQueue, NativeIntQueue, RingQueue, SliceQueue,
    SynchronizedQueue,
};

// Queue capacity for benchmarks
const CAPACITY: usize = 1024;
// Number of ping-pong operations per benchmark
const PING_PONGS: usize = 10_000;

const BACKENDS: [&str; 6] = [
    "ChannelQueue",
    "CircularQueue",
    "ListQueue",
    "RingQueue",
    "SliceQueue",
    "NativeIntQueue",
];

fn make_queue(name: &str) -> Arc<dyn SynchronizedQueue<i64>> {
    match name {
        "ChannelQueue" => Arc::new(ChannelQueue::<i64>::new(CAPACITY)),
        "CircularQueue" => Arc::new(CircularQueue::<i64>::new(CAPACITY)),
        "ListQueue" => Arc::new(ListQueue::<i64>::new(CAPACITY)),
        "RingQueue" => Arc::new(RingQueue::<i64>::new(CAPACITY)),
        "SliceQueue" => Arc::new(SliceQueue::<i64>::new(CAPACITY)),
        "NativeIntQueue" => Arc::new(NativeIntQueue::new(CAPACITY)),
        other => unreachable!("unknown backend {other}"),
    }
}

fn ping_pong(name: &str) {
    let q1 = make_queue(name);
    let q2 = make_queue(name);

    // Ping thread
    let q1_ping = Arc::clone(&q1);
    let q2_ping = Arc::clone(&q2);
    let ping_thread = thread::spawn(move || {
        for i in 0..PING_PONGS {
            q1_ping.put(black_box(i as i64)).unwrap();
            black_box(q2_ping.get().unwrap());
        }
    });

    // Pong thread
    let pong_thread = thread::spawn(move || {
        for _ in 0..PING_PONGS {
            let val = q1.get().unwrap();
            q2.put(black_box(val)).unwrap();
        }
    });

    ping_thread.join().unwrap();
    pong_thread.join().unwrap();
}

fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("latency");

    for name in BACKENDS {
        group.bench_function(BenchmarkId::new(name, "ping-pong"), |b| {
            b.iter(|| ping_pong(name))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_latency);
criterion_main!(benches);
