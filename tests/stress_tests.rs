//! Stress tests that push the min-max heap through long operation sequences
//!
//! Inputs come from a seeded linear congruential generator so failures are
//! reproducible.

use minmax_trace::replay::Replay;
use minmax_trace::{MinMaxHeap, TracedHeap, Tracing};

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_range(&mut self, min: i64, max: i64) -> i64 {
        min + ((self.next() >> 33) % (max - min) as u64) as i64
    }
}

/// Test massive numbers of inserts and deletes from both ends
fn test_massive_operations(tracing: Tracing, n: usize) {
    let mut heap = MinMaxHeap::with_tracing(tracing);
    let mut rng = Lcg::new(42);
    let mut reference = Vec::new();

    for _ in 0..n {
        let value = rng.next_range(-10_000, 10_000);
        heap.insert(value);
        reference.push(value);
    }
    reference.sort_unstable();
    assert_eq!(heap.len(), n);
    assert!(heap.is_valid());

    let mut low = 0;
    let mut high = reference.len();
    let mut from_min = true;
    while !heap.is_empty() {
        if from_min {
            assert_eq!(heap.peek_min(), Some(reference[low]));
            heap.delete_min();
            low += 1;
        } else {
            high -= 1;
            assert_eq!(heap.peek_max(), Some(reference[high]));
            heap.delete_max();
        }
        from_min = !from_min;
    }
    assert_eq!(low, high);
}

#[test]
fn test_massive_operations_traced() {
    test_massive_operations(Tracing::Enabled, 500);
}

#[test]
fn test_massive_operations_untraced() {
    test_massive_operations(Tracing::Disabled, 5000);
}

/// Test interleaved inserts and deletes with the heap kept small
#[test]
fn test_interleaved_churn() {
    let mut heap = MinMaxHeap::new();
    let mut rng = Lcg::new(7);

    for round in 0..5000 {
        match rng.next() % 4 {
            0 | 1 => {
                heap.insert(rng.next_range(-100, 100));
            }
            2 => {
                heap.delete_min();
            }
            _ => {
                heap.delete_max();
            }
        }
        if round % 97 == 0 {
            assert!(heap.check_invariant().is_ok(), "round {round}: {:?}", heap.snapshot());
        }
    }
    assert!(heap.is_valid());
}

/// Test many duplicates
#[test]
fn test_heavy_duplicates() {
    let mut heap = MinMaxHeap::new();
    let mut rng = Lcg::new(99);

    for _ in 0..1000 {
        heap.insert(rng.next_range(0, 3));
    }
    assert!(heap.is_valid());

    let mut last = i64::MIN;
    while let Some(min) = heap.peek_min() {
        assert!(min >= last);
        last = min;
        heap.delete_min();
    }
}

/// Every replayed trace ends on the heap it produced
#[test]
fn test_replays_end_on_live_state() {
    let mut heap = MinMaxHeap::new();
    let mut rng = Lcg::new(2024);

    for _ in 0..300 {
        let steps = match rng.next() % 3 {
            0 => heap.delete_min(),
            1 => heap.delete_max(),
            _ => heap.insert(rng.next_range(-500, 500)),
        };
        let mut replay = Replay::new(steps);
        let end = replay.skip_to_end().map(|step| step.values.clone());
        assert_eq!(end, Some(heap.snapshot()));
    }
}

/// Test that a trace records at most a logarithmic number of steps
#[test]
fn test_trace_length_is_logarithmic() {
    let mut filler = MinMaxHeap::with_tracing(Tracing::Disabled);
    let mut rng = Lcg::new(31337);
    for _ in 0..4095 {
        filler.insert(rng.next_range(-1_000_000, 1_000_000));
    }
    let mut heap = MinMaxHeap::restore(filler.serialize()).unwrap();
    assert_eq!(heap.tracing(), Tracing::Enabled);

    // 12 levels; each level contributes a bounded number of steps
    for steps in [heap.insert(-2_000_000), heap.delete_min(), heap.delete_max()] {
        assert!(steps.len() <= 8 * 13, "{} steps", steps.len());
    }
}
