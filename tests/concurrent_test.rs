//! Producer/consumer stress tests across every backend

use std::sync::{Barrier, Mutex};

use crossbeam_utils::thread;
use sync_queue_rs::{
    ChannelQueue, CircularQueue, GetError, ListQueue, NativeIntQueue, PriorityItem, PriorityQueue,
    RingQueue, SliceQueue, SynchronizedQueue,
};
use tracing_subscriber::EnvFilter;

const CAPACITY: usize = 8;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

type Backend = Box<dyn SynchronizedQueue<i64>>;

fn backends() -> Vec<Backend> {
    vec![
        Box::new(ChannelQueue::<i64>::new(CAPACITY)) as Backend,
        Box::new(CircularQueue::<i64>::new(CAPACITY)) as Backend,
        Box::new(ListQueue::<i64>::new(CAPACITY)) as Backend,
        Box::new(RingQueue::<i64>::new(CAPACITY)) as Backend,
        Box::new(SliceQueue::<i64>::new(CAPACITY)) as Backend,
        Box::new(NativeIntQueue::new(CAPACITY)) as Backend,
    ]
}

/// One producer, one consumer: every value arrives exactly once, in order
fn spsc_fifo(q: &dyn SynchronizedQueue<i64>, n: i64) {
    thread::scope(|s| {
        s.spawn(|_| {
            for i in 0..n {
                q.put(i).unwrap();
            }
        });

        s.spawn(|_| {
            for i in 0..n {
                assert_eq!(q.get(), Ok(i), "{}", q);
                assert!(q.len() <= q.capacity());
            }
        });
    })
    .unwrap();

    assert!(q.is_empty(), "{}", q);
}

#[test]
fn test_spsc_fifo_every_backend() {
    init_tracing();
    for n in [0, 1, 7, 8, 9, 10_000] {
        for q in backends() {
            spsc_fifo(q.as_ref(), n);
        }
    }
}

#[test]
fn test_mpmc_sum_every_backend() {
    init_tracing();
    const PRODUCERS: usize = 3;
    const CONSUMERS: usize = 3;
    const N: i64 = 20_000;

    for q in backends() {
        let barrier = Barrier::new(PRODUCERS + CONSUMERS);
        let received = Mutex::new(Vec::with_capacity(PRODUCERS * N as usize));

        thread::scope(|s| {
            for p in 0..PRODUCERS as i64 {
                let q = q.as_ref();
                let barrier = &barrier;
                s.spawn(move |_| {
                    barrier.wait();
                    for i in 0..N {
                        q.put(p * N + i).unwrap();
                    }
                });
            }

            for _ in 0..CONSUMERS {
                let q = q.as_ref();
                let barrier = &barrier;
                let received = &received;
                s.spawn(move |_| {
                    barrier.wait();
                    let mut local = Vec::new();
                    for _ in 0..N {
                        local.push(q.get().unwrap());
                    }
                    received.lock().unwrap().extend(local);
                });
            }
        })
        .unwrap();

        let mut received = received.into_inner().unwrap();
        received.sort_unstable();
        let expected: Vec<i64> = (0..PRODUCERS as i64 * N).collect();
        assert_eq!(received, expected, "{}", q);
        assert_eq!(q.try_get(), Err(GetError::Empty));
    }
}

#[test]
fn test_channel_consumers_stop_on_close() {
    init_tracing();
    let q = ChannelQueue::<u64>::new(CAPACITY);
    let total = Mutex::new(0u64);

    thread::scope(|s| {
        for _ in 0..4 {
            let q = &q;
            let total = &total;
            s.spawn(move |_| {
                let mut local = 0;
                while let Ok(n) = q.get() {
                    local += n;
                }
                *total.lock().unwrap() += local;
            });
        }

        for n in 1..=1_000 {
            q.put(n).unwrap();
        }
        q.close();
    })
    .unwrap();

    assert_eq!(total.into_inner().unwrap(), 1_000 * 1_001 / 2);
    assert!(q.is_empty());
}

#[test]
fn test_priority_order_under_contention() {
    init_tracing();
    let q = PriorityQueue::<u32, u32>::new(CAPACITY);

    // Fill from several threads, then drain from one: order is by priority
    thread::scope(|s| {
        for t in 0..4u32 {
            let q = &q;
            s.spawn(move |_| {
                for i in 0..2u32 {
                    q.put(PriorityItem::new(t, t * 2 + i)).unwrap();
                }
            });
        }
    })
    .unwrap();

    assert!(q.is_full());
    let priorities: Vec<u32> = (0..CAPACITY).map(|_| q.get().unwrap().priority).collect();
    assert_eq!(priorities, vec![7, 6, 5, 4, 3, 2, 1, 0]);
}
