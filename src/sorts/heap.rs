//! Heap sort with recursive sift-down

use super::Metrics;
use crate::step::StepSink;

/// Restore the max-heap property for the subtree rooted at `i`, considering
/// only the first `n` elements.
///
/// Counts one loop per invocation (including recursive re-entries), not per
/// comparison inside.
fn sift_down(arr: &mut [i64], n: usize, i: usize, metrics: &mut Metrics, sink: &mut dyn StepSink) {
    metrics.loops += 1;
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && arr[left] > arr[largest] {
        largest = left;
    }
    if right < n && arr[right] > arr[largest] {
        largest = right;
    }

    if largest != i {
        arr.swap(i, largest);
        sink.on_step(arr, largest);
        sift_down(arr, n, largest, metrics, sink);
    }
}

/// Heap sort: build a max-heap bottom-up, then repeatedly swap the root
/// behind the shrinking heap boundary and re-sift.
///
/// `loops` counts sift-down invocations. Not stable.
pub fn heap_sort(arr: &mut [i64], sink: &mut dyn StepSink) -> Metrics {
    let mut metrics = Metrics::default();
    let n = arr.len();
    if n < 2 {
        return metrics;
    }

    // Build phase: heapify every internal node, last parent first
    for i in (0..n / 2).rev() {
        sift_down(arr, n, i, &mut metrics, sink);
    }

    // Extraction phase: move the max to the end, shrink, re-sift
    for end in (1..n).rev() {
        arr.swap(end, 0);
        sink.on_step(arr, end);
        sift_down(arr, end, 0, &mut metrics, sink);
    }
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::NoopSink;

    #[test]
    fn test_heap_sorts() {
        let mut arr = vec![9, 4, 7, 1, 3, 8, 2];
        heap_sort(&mut arr, &mut NoopSink);
        assert_eq!(arr, vec![1, 2, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn test_heap_counts_sift_invocations() {
        // n=2: one build sift, one extraction sift
        let mut arr = vec![2, 1];
        let m = heap_sort(&mut arr, &mut NoopSink);
        assert_eq!(arr, vec![1, 2]);
        assert_eq!(m.loops, 2);
        assert_eq!(m.space, 0);
    }
}
