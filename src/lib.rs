//! # sync_queue_rs
//!
//! Bounded, thread-safe queues behind one contract, [`SynchronizedQueue`],
//! with several interchangeable backends:
//!
//! - [`ChannelQueue`]: a bounded `crossbeam-channel`, drains on close.
//! - [`SyncQueue`]: a mutex and two condition variables over any [`Storage`]
//!   strategy. Aliases cover the stock ones: [`CircularQueue`],
//!   [`ListQueue`], [`RingQueue`], [`SliceQueue`] and [`PriorityQueue`].
//! - [`NativeIntQueue`]: a hand-written `i64` queue, the baseline for
//!   measuring what genericity costs.
//!
//! Closing means different things depending on the backend; check
//! [`SynchronizedQueue::close_semantics`] if you rely on draining.
//!
//! ```
//! use sync_queue_rs::CircularQueue;
//!
//! let q = CircularQueue::new(2);
//! q.put(1).unwrap();
//! q.try_put(2).unwrap();
//! assert!(q.try_put(3).is_err());
//! assert_eq!(q.get(), Ok(1));
//! ```

mod common;
mod error;
mod utils;

pub mod channel;
pub mod native;
pub mod storage;
pub mod sync_queue;

// Re-exports for convenience
pub use channel::ChannelQueue;
pub use common::{CloseSemantics, SynchronizedQueue};
pub use error::{GetError, PutError};
pub use native::NativeIntQueue;
pub use storage::{PriorityItem, PriorityOrder, Storage};
pub use sync_queue::{CircularQueue, ListQueue, PriorityQueue, RingQueue, SliceQueue, SyncQueue};
