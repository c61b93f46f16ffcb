//! The three quadratic sorts: bubble, insertion, selection

use super::Metrics;
use crate::step::StepSink;

/// Bubble sort: n−1 full passes of adjacent comparisons.
///
/// `loops` counts every comparison, not every swap, and there is no
/// early-exit check — an already-sorted array still costs n(n−1)/2
/// comparisons. Stable: equal neighbours are never swapped.
pub fn bubble_sort(arr: &mut [i64], sink: &mut dyn StepSink) -> Metrics {
    let mut metrics = Metrics::default();
    let n = arr.len();
    if n < 2 {
        return metrics;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            metrics.loops += 1;
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                sink.on_step(arr, j);
            }
        }
    }
    metrics
}

/// Insertion sort: each element shifts left while its predecessor is
/// strictly greater.
///
/// `loops` counts each combined shift-comparison-swap step, so a sorted
/// array costs zero. Stable: shifting stops at the first equal element.
pub fn insertion_sort(arr: &mut [i64], sink: &mut dyn StepSink) -> Metrics {
    let mut metrics = Metrics::default();
    if arr.len() < 2 {
        return metrics;
    }

    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            metrics.loops += 1;
            arr.swap(j - 1, j);
            j -= 1;
            sink.on_step(arr, j);
        }
    }
    metrics
}

/// Selection sort: scan the unsorted remainder for its minimum, then swap
/// it into position.
///
/// `loops` counts every scan comparison. Exactly one swap per outer pass,
/// performed even when the minimum is already in place, and one step event
/// per pass. Not stable.
pub fn selection_sort(arr: &mut [i64], sink: &mut dyn StepSink) -> Metrics {
    let mut metrics = Metrics::default();
    let n = arr.len();
    if n < 2 {
        return metrics;
    }

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            metrics.loops += 1;
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        arr.swap(i, min_idx);
        sink.on_step(arr, i);
    }
    metrics
}
