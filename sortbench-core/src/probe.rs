//! Timing probe: total wall-clock time over a repetition batch.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Default number of executions per measurement batch.
pub const REPETITIONS: u32 = 100;

/// Time `run` over `repetitions` executions and return the **total** elapsed
/// wall-clock time of the sort calls. Callers divide if they want an average.
///
/// Every repetition gets a fresh copy of `input`, made outside the timed
/// region: an implementation that sorts in place must never hand a
/// pre-sorted buffer to the next repetition, and the copy cost must never
/// land in the measurement.
///
/// A panic inside `run` propagates; a malformed algorithm is a fatal
/// configuration error, not something to catch and retry.
pub fn measure(run: fn(Vec<i64>) -> Vec<i64>, input: &[i64], repetitions: u32) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..repetitions {
        let fresh = input.to_vec();
        let start = Instant::now();
        let sorted = black_box(run(black_box(fresh)));
        total += start.elapsed();
        drop(sorted);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(v: Vec<i64>) -> Vec<i64> {
        v
    }

    fn napping(v: Vec<i64>) -> Vec<i64> {
        std::thread::sleep(Duration::from_millis(2));
        v
    }

    #[test]
    fn test_measure_totals_over_repetitions() {
        let input = vec![3, 1, 2];
        let total = measure(napping, &input, 5);
        // Five 2ms naps; totals, not averages.
        assert!(total >= Duration::from_millis(10));
    }

    #[test]
    fn test_measure_zero_repetitions_is_zero() {
        assert_eq!(measure(identity, &[1, 2, 3], 0), Duration::ZERO);
    }

    #[test]
    fn test_measure_never_reuses_a_mutated_buffer() {
        // An in-place sorter given an aliased buffer would see pre-sorted
        // input from the second repetition onward. The probe's fresh copy per
        // repetition means the callable always observes the original order.
        use std::sync::atomic::{AtomicUsize, Ordering};
        static UNSORTED_SEEN: AtomicUsize = AtomicUsize::new(0);
        fn observing(mut v: Vec<i64>) -> Vec<i64> {
            if v.windows(2).any(|w| w[0] > w[1]) {
                UNSORTED_SEEN.fetch_add(1, Ordering::Relaxed);
            }
            v.sort();
            v
        }
        UNSORTED_SEEN.store(0, Ordering::Relaxed);
        measure(observing, &[5, 4, 3, 2, 1], 4);
        assert_eq!(UNSORTED_SEEN.load(Ordering::Relaxed), 4);
    }
}
