//! Cross-implementation checks: the two-stack queue and the `Vec`-backed
//! queue must be observationally identical FIFOs for any operation
//! sequence.

use linkq::{OwnedQueue, VecQueue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn random_sequences_match() {
    for seed in [1u64, 7, 42, 0xfeed] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut two_stack: OwnedQueue<u32> = OwnedQueue::new();
        let mut vec_queue: VecQueue<u32> = VecQueue::new();

        let mut next_value = 0u32;
        let mut pushes = 0usize;
        let mut pops = 0usize;

        for _ in 0..4000 {
            if rng.gen_bool(0.6) {
                two_stack.push(next_value);
                vec_queue.push(next_value);
                next_value += 1;
                pushes += 1;
            } else {
                let a = two_stack.pop();
                let b = vec_queue.pop();
                assert_eq!(a, b, "queues diverged (seed {seed})");
                if a.is_some() {
                    pops += 1;
                }
            }

            assert_eq!(two_stack.len(), vec_queue.len());
            assert_eq!(two_stack.len(), pushes - pops);
        }

        // Drain the remainder; both must agree to the end.
        while let Some(value) = two_stack.pop() {
            assert_eq!(vec_queue.pop(), Some(value));
        }
        assert_eq!(vec_queue.pop(), None);
    }
}

#[test]
fn net_fifo_order_survives_interleaving() {
    let mut queue: OwnedQueue<u32> = OwnedQueue::new();
    let mut popped = Vec::new();

    // Pop after every second push, then drain.
    for i in 0..100 {
        queue.push(i);
        if i % 2 == 1 {
            popped.push(queue.pop().unwrap());
        }
    }
    while let Some(value) = queue.pop() {
        popped.push(value);
    }

    assert_eq!(popped, (0..100).collect::<Vec<_>>());
}

#[test]
fn burst_pattern_matches() {
    let mut two_stack: OwnedQueue<u32> = OwnedQueue::new();
    let mut vec_queue: VecQueue<u32> = VecQueue::new();

    // Bursty producer, lagging consumer.
    let mut value = 0u32;
    for burst in 1..20 {
        for _ in 0..burst {
            two_stack.push(value);
            vec_queue.push(value);
            value += 1;
        }
        for _ in 0..burst / 2 {
            assert_eq!(two_stack.pop(), vec_queue.pop());
        }
    }

    while let Some(v) = vec_queue.pop() {
        assert_eq!(two_stack.pop(), Some(v));
    }
    assert_eq!(two_stack.pop(), None);
}
