//! Top-down recursive merge sort

use super::Metrics;
use crate::step::StepSink;

/// Merge the two sorted halves `arr[left..=mid]` and `arr[mid+1..=right]`.
///
/// Both halves are copied into temporary buffers first; `space` grows by
/// the combined buffer length on every call, so the metric is cumulative
/// auxiliary allocation across the whole recursion, not peak memory.
/// `loops` counts every element written back.
fn merge(
    arr: &mut [i64],
    left: usize,
    mid: usize,
    right: usize,
    metrics: &mut Metrics,
    sink: &mut dyn StepSink,
) {
    let lo: Vec<i64> = arr[left..=mid].to_vec();
    let hi: Vec<i64> = arr[mid + 1..=right].to_vec();
    metrics.space += (lo.len() + hi.len()) as u64;

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < lo.len() && j < hi.len() {
        metrics.loops += 1;
        // <= keeps equal elements in left-half order (stability)
        if lo[i] <= hi[j] {
            arr[k] = lo[i];
            i += 1;
        } else {
            arr[k] = hi[j];
            j += 1;
        }
        sink.on_step(arr, k);
        k += 1;
    }

    while i < lo.len() {
        metrics.loops += 1;
        arr[k] = lo[i];
        i += 1;
        sink.on_step(arr, k);
        k += 1;
    }

    while j < hi.len() {
        metrics.loops += 1;
        arr[k] = hi[j];
        j += 1;
        sink.on_step(arr, k);
        k += 1;
    }
}

fn merge_sort_range(
    arr: &mut [i64],
    left: usize,
    right: usize,
    metrics: &mut Metrics,
    sink: &mut dyn StepSink,
) {
    if left < right {
        let mid = left + (right - left) / 2;
        merge_sort_range(arr, left, mid, metrics, sink);
        merge_sort_range(arr, mid + 1, right, metrics, sink);
        merge(arr, left, mid, right, metrics, sink);
    }
}

/// Classic top-down merge sort. Stable.
pub fn merge_sort(arr: &mut [i64], sink: &mut dyn StepSink) -> Metrics {
    let mut metrics = Metrics::default();
    if arr.len() < 2 {
        return metrics;
    }
    let right = arr.len() - 1;
    merge_sort_range(arr, 0, right, &mut metrics, sink);
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::NoopSink;

    #[test]
    fn test_two_element_merge_space() {
        // One merge call combining two single-element buffers
        let mut arr = vec![4, 2];
        let m = merge_sort(&mut arr, &mut NoopSink);
        assert_eq!(arr, vec![2, 4]);
        assert_eq!(m.space, 2);
        assert_eq!(m.loops, 2);
    }

    #[test]
    fn test_space_is_cumulative_across_recursion() {
        // [a,b,c,d]: two 2-element merges plus one 4-element merge
        let mut arr = vec![4, 3, 2, 1];
        let m = merge_sort(&mut arr, &mut NoopSink);
        assert_eq!(arr, vec![1, 2, 3, 4]);
        assert_eq!(m.space, 2 + 2 + 4);
    }

    #[test]
    fn test_merge_sorts_large_reverse() {
        let mut arr: Vec<i64> = (1..=64).rev().collect();
        merge_sort(&mut arr, &mut NoopSink);
        assert_eq!(arr, (1..=64).collect::<Vec<i64>>());
    }
}
