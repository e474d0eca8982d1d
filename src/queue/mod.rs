//! FIFO queues: the two-stack design and a `Vec`-backed reference.
//!
//! [`TwoStackQueue`] reaches amortized O(1) push and pop by composing two
//! stacks; [`VecQueue`] is the straightforward alternative with O(n) pops,
//! kept for complexity contrast. For any sequence of operations the two
//! produce identical output order.

pub mod two_stack;
pub mod vec;

pub use two_stack::TwoStackQueue;
pub use vec::VecQueue;
