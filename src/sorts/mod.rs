//! Instrumented sorting algorithms
//!
//! Seven textbook comparison sorts, each counting its dominant inner-loop
//! iterations (`loops`) and the elements it copies into auxiliary buffers
//! (`space`), and reporting every mutation through a
//! [`StepSink`](crate::step::StepSink) for animation.
//!
//! The counters are teaching proxies, not normalized operation counts:
//! each algorithm counts its own dominant step (bubble counts comparisons,
//! heap counts sift-down invocations, merge counts element writes), so
//! absolute values are only comparable across input sizes for one
//! algorithm, never across algorithms. For a fixed input and algorithm both
//! counters are bit-exact reproducible — there is no randomness anywhere in
//! the routines.
//!
//! All seven sort in place over `&mut [i64]`. Empty and single-element
//! slices return immediately with zero counts. `space` is nonzero only for
//! merge sort, which accumulates the length of every temporary buffer it
//! allocates across all recursion levels (cumulative allocation, not peak).

pub mod heap;
pub mod merge;
pub mod quick;
pub mod simple;

pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::{quick_sort_last, quick_sort_median3, PivotStrategy};
pub use simple::{bubble_sort, insertion_sort, selection_sort};

use crate::step::StepSink;
use std::fmt;
use std::str::FromStr;

/// Per-run instrumentation counters.
///
/// `loops` approximates time complexity, `space` approximates auxiliary
/// space. Both are deterministic for a fixed input and algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub loops: u64,
    pub space: u64,
}

/// The seven supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Heap,
    QuickLast,
    QuickMedian3,
}

impl Algorithm {
    /// All algorithms, in display order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::QuickLast,
        Algorithm::QuickMedian3,
    ];

    /// Human-readable display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::QuickLast => "Quick Sort",
            Algorithm::QuickMedian3 => "Quick Sort (Median of 3)",
        }
    }

    /// Short token accepted on the command line.
    pub fn token(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::QuickLast => "quick",
            Algorithm::QuickMedian3 => "quick-median3",
        }
    }

    /// Sort `arr` in place, reporting mutations to `sink`.
    pub fn run(self, arr: &mut [i64], sink: &mut dyn StepSink) -> Metrics {
        match self {
            Algorithm::Bubble => bubble_sort(arr, sink),
            Algorithm::Insertion => insertion_sort(arr, sink),
            Algorithm::Selection => selection_sort(arr, sink),
            Algorithm::Merge => merge_sort(arr, sink),
            Algorithm::Heap => heap_sort(arr, sink),
            Algorithm::QuickLast => quick_sort_last(arr, sink),
            Algorithm::QuickMedian3 => quick_sort_median3(arr, sink),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "selection" => Ok(Algorithm::Selection),
            "merge" => Ok(Algorithm::Merge),
            "heap" => Ok(Algorithm::Heap),
            "quick" => Ok(Algorithm::QuickLast),
            "quick-median3" | "median3" => Ok(Algorithm::QuickMedian3),
            other => Err(format!(
                "unknown algorithm '{}' (expected one of: bubble, insertion, \
                 selection, merge, heap, quick, quick-median3)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_tokens_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.token().parse::<Algorithm>(), Ok(algo));
        }
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert!("bogo".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_names_are_unique() {
        let names: Vec<_> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name));
        }
    }
}
