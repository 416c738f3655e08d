use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

use sync_queue_rs::{
    ChannelQueue, CircularQueue, CloseSemantics, GetError, NativeIntQueue, SynchronizedQueue,
};

// Configuration
const PRODUCERS: usize = 2; // Number of producer threads
const CONSUMERS: usize = 2; // Number of consumer threads
const N: i64 = 100_000; // Each producer pushes this many elements into the queue
const CAPACITY: usize = 1024; // Queue capacity

fn run(name: &str, queue: Arc<dyn SynchronizedQueue<i64>>) {
    println!("{} ({:?} close semantics)", name, queue.close_semantics());

    let start_time = Instant::now();

    let sums = Arc::new(Mutex::new(vec![0i64; CONSUMERS]));
    let mut consumer_threads = Vec::with_capacity(CONSUMERS);

    for i in 0..CONSUMERS {
        let q = Arc::clone(&queue);
        let sums = Arc::clone(&sums);
        consumer_threads.push(thread::spawn(move || {
            let mut local_sum = 0i64;

            // A draining queue ends the stream itself once closed; the
            // flag-only queues need a 0 per consumer as a terminator.
            loop {
                match q.get() {
                    Ok(0) => break,
                    Ok(n) => local_sum += n,
                    Err(GetError::Closed) => break,
                    Err(GetError::Empty) => unreachable!("blocking get never reports empty"),
                }
            }

            sums.lock().unwrap()[i] = local_sum;
        }));
    }

    let mut producer_threads = Vec::with_capacity(PRODUCERS);
    for _ in 0..PRODUCERS {
        let q = Arc::clone(&queue);
        producer_threads.push(thread::spawn(move || {
            for n in 1..=N {
                q.put(n).unwrap();
            }
        }));
    }

    for handle in producer_threads {
        handle.join().unwrap();
    }

    match queue.close_semantics() {
        CloseSemantics::Drain => queue.close(),
        CloseSemantics::Flag => {
            for _ in 0..CONSUMERS {
                queue.put(0).unwrap();
            }
            queue.close();
        }
    }

    for handle in consumer_threads {
        handle.join().unwrap();
    }

    let sums = sums.lock().unwrap();
    let total_sum: i64 = sums.iter().sum();
    let expected_sum = N * (N + 1) / 2 * PRODUCERS as i64;

    println!("  Execution time: {:?}", start_time.elapsed());
    println!("  Final state: {}", queue);
    if total_sum != expected_sum {
        println!("  ERROR: Sum mismatch! Difference: {}", total_sum - expected_sum);
    } else {
        println!("  SUCCESS: All elements were correctly processed.");
    }
    for (i, &sum) in sums.iter().enumerate() {
        println!("  Consumer {}: sum = {}", i, sum);
    }
    println!();
}

fn main() {
    println!("SynchronizedQueue Rust Example");
    println!("------------------------------\n");
    println!(
        "{} producers, {} consumers, {} elements each, capacity {}\n",
        PRODUCERS, CONSUMERS, N, CAPACITY
    );

    run("ChannelQueue", Arc::new(ChannelQueue::<i64>::new(CAPACITY)));
    run("CircularQueue", Arc::new(CircularQueue::<i64>::new(CAPACITY)));
    run("NativeIntQueue", Arc::new(NativeIntQueue::new(CAPACITY)));
}
