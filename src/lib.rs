//! Keyed list, stack, and queue structures with external storage.
//!
//! This crate rebuilds the classic chain-of-nodes containers (doubly-linked
//! list, LIFO stack, and a FIFO queue composed of two stacks) on one
//! design decision: separate storage from structure.
//!
//! # Design Philosophy
//!
//! Hand-rolled intrusive lists link nodes by address:
//!
//! ```text
//! Node*  <->  Node*  <->  Node*     - dangling prev/next on misuse,
//!                                     double-free risk, null checks
//! ```
//!
//! This crate links nodes by key into an arena:
//!
//! ```text
//! Storage (arena)       - owns node data, provides stable keys
//! List/Stack/Queue      - coordinate keys, don't own data
//! ```
//!
//! Benefits:
//! - **Checkable handles**: a stale key is a failed lookup, not undefined
//!   behavior; "detached" is an observable state (`K::NONE` links)
//! - **Stable keys**: removal elsewhere never invalidates other keys
//! - **Free node motion**: structures sharing one storage move nodes
//!   between each other by relinking alone; the two-stack queue's
//!   reversals never touch values
//!
//! # Quick Start
//!
//! ```
//! use linkq::OwnedQueue;
//!
//! let mut queue: OwnedQueue<&str> = OwnedQueue::new();
//! queue.push("a");
//! queue.push("b");
//! queue.push("c");
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.pop(), Some("a"));
//! assert_eq!(queue.pop(), Some("b"));
//! assert_eq!(queue.pop(), Some("c"));
//! assert_eq!(queue.pop(), None);
//! ```
//!
//! # External Storage
//!
//! The core structures take their storage explicitly, so callers control
//! allocation and several structures can share one arena:
//!
//! ```
//! use linkq::{List, Node, Storage, VecStorage};
//!
//! let mut storage: VecStorage<Node<u64>> = VecStorage::new();
//! let mut list: List<u64, VecStorage<Node<u64>>> = List::new();
//!
//! // Callers create nodes; the list only wires links.
//! let key = storage.insert(Node::new(42));
//! list.push_front(&mut storage, key);
//!
//! assert_eq!(list.get(&storage, key), Some(&42));
//! assert_eq!(list.remove(&mut storage, key), Some(key));
//! assert!(storage.get(key).unwrap().is_detached());
//! ```
//!
//! # Critical Invariant: Same Storage Instance
//!
//! All operations on a structure must use the same storage instance it was
//! built against. This is the caller's responsibility (same discipline as
//! the `slab` crate); mixing storages scrambles links, though it can never
//! corrupt memory.
//!
//! # Data Structures
//!
//! | Structure | Push | Pop | Notes |
//! |-----------|------|-----|-------|
//! | [`List`] | O(1)* | O(1) | *splicing a pre-linked run walks the run |
//! | [`Stack`] | O(1) | O(1) | LIFO adapter over [`List`] |
//! | [`TwoStackQueue`] | O(1) amortized | O(1) amortized | FIFO from two stacks |
//! | [`VecQueue`] | O(1) amortized | O(n) | FIFO baseline, shifts on pop |
//!
//! # Concurrency
//!
//! None of these structures are thread-safe; every operation is a plain
//! synchronous call. Concurrent use requires external synchronization
//! around the structure and its storage together.
//!
//! # Feature Flags
//!
//! - `slab` - implements [`Storage`] for `slab::Slab`

#![warn(missing_docs)]

pub mod key;
pub mod list;
pub mod node;
pub mod owned;
pub mod queue;
pub mod stack;
pub mod storage;

pub use key::Key;
pub use list::List;
pub use node::Node;
pub use owned::OwnedQueue;
pub use queue::{TwoStackQueue, VecQueue};
pub use stack::Stack;
pub use storage::{Storage, VecStorage};
