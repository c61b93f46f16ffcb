//! Quicksort with Lomuto partitioning and two pivot strategies

use super::Metrics;
use crate::step::StepSink;

/// How the partition pivot is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotStrategy {
    /// Always the last element of the sub-range. Degrades to O(n²) on
    /// sorted or reverse-sorted input.
    Last,
    /// Median of the first, middle, and last elements, swapped into the
    /// last slot before partitioning. Mitigates the sorted-input worst
    /// case without eliminating it.
    MedianOfThree,
}

/// Index of the value-median among `arr[low]`, `arr[mid]`, `arr[high]`.
/// Ties break toward the lower index.
fn median_of_three(arr: &[i64], low: usize, high: usize) -> usize {
    let mid = low + (high - low) / 2;
    let mut trio = [(arr[low], low), (arr[mid], mid), (arr[high], high)];
    trio.sort();
    trio[1].1
}

/// Lomuto partition over `arr[low..=high]`. Returns the pivot's final
/// position. `loops` counts each partition-scan step.
fn partition(
    arr: &mut [i64],
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    metrics: &mut Metrics,
    sink: &mut dyn StepSink,
) -> usize {
    if strategy == PivotStrategy::MedianOfThree {
        let pivot_index = median_of_three(arr, low, high);
        arr.swap(pivot_index, high);
    }

    let pivot = arr[high];
    // `i` is one past the region of elements known to be <= pivot
    let mut i = low;
    for j in low..high {
        metrics.loops += 1;
        if arr[j] <= pivot {
            arr.swap(i, j);
            sink.on_step(arr, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    sink.on_step(arr, i);
    i
}

fn quicksort(
    arr: &mut [i64],
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    metrics: &mut Metrics,
    sink: &mut dyn StepSink,
) {
    if low < high {
        let p = partition(arr, low, high, strategy, metrics, sink);
        if p > low {
            quicksort(arr, low, p - 1, strategy, metrics, sink);
        }
        if p + 1 < high {
            quicksort(arr, p + 1, high, strategy, metrics, sink);
        }
    }
}

/// Quicksort with the last element as pivot. Not stable.
pub fn quick_sort_last(arr: &mut [i64], sink: &mut dyn StepSink) -> Metrics {
    quick_sort(arr, PivotStrategy::Last, sink)
}

/// Quicksort with a median-of-three pivot. Not stable.
pub fn quick_sort_median3(arr: &mut [i64], sink: &mut dyn StepSink) -> Metrics {
    quick_sort(arr, PivotStrategy::MedianOfThree, sink)
}

/// Quicksort with an explicit pivot strategy.
pub fn quick_sort(arr: &mut [i64], strategy: PivotStrategy, sink: &mut dyn StepSink) -> Metrics {
    let mut metrics = Metrics::default();
    if arr.len() < 2 {
        return metrics;
    }
    let high = arr.len() - 1;
    quicksort(arr, 0, high, strategy, &mut metrics, sink);
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::NoopSink;

    #[test]
    fn test_last_pivot_worst_case_on_sorted_input() {
        // Every partition scans the full remaining range:
        // 4 + 3 + 2 + 1 = 10
        let mut arr = vec![1, 2, 3, 4, 5];
        let m = quick_sort_last(&mut arr, &mut NoopSink);
        assert_eq!(arr, vec![1, 2, 3, 4, 5]);
        assert_eq!(m.loops, 10);
    }

    #[test]
    fn test_median3_beats_last_pivot_on_sorted_input() {
        let sorted: Vec<i64> = (1..=5).collect();

        let mut a = sorted.clone();
        let last = quick_sort_last(&mut a, &mut NoopSink);
        let mut b = sorted.clone();
        let median = quick_sort_median3(&mut b, &mut NoopSink);

        assert_eq!(a, b);
        assert!(median.loops < last.loops);
    }

    #[test]
    fn test_both_variants_sort_reverse_input() {
        for strategy in [PivotStrategy::Last, PivotStrategy::MedianOfThree] {
            let mut arr: Vec<i64> = (1..=20).rev().collect();
            quick_sort(&mut arr, strategy, &mut NoopSink);
            assert_eq!(arr, (1..=20).collect::<Vec<i64>>());
        }
    }

    #[test]
    fn test_duplicate_heavy_input() {
        let mut arr = vec![3, 1, 3, 3, 2, 1, 3];
        quick_sort_last(&mut arr, &mut NoopSink);
        assert_eq!(arr, vec![1, 1, 2, 3, 3, 3, 3]);
    }
}
