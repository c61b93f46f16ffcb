//! Parallel fan-out: one worker thread per algorithm
//!
//! Each worker owns a private copy of the input array, so no mutable state
//! ever crosses a thread boundary. Animated runs stream [`StepEvent`]s
//! through a bounded single-producer/single-consumer channel and finish
//! with an explicit [`WorkerMessage::Done`] sentinel carrying the run's
//! metrics. There is no cancellation path: once spawned, every worker runs
//! to completion.
//!
//! The consumer is expected to poll each worker's receiver round-robin with
//! `try_recv` (the TUI does this on its render tick) and to deduplicate
//! consecutive identical snapshots before drawing.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use rustc_hash::FxHashMap;

use crate::sorts::{Algorithm, Metrics};
use crate::step::{NoopSink, StepEvent, StepSink};

/// Bound on each worker's in-flight step queue. A slow consumer applies
/// backpressure to the sort rather than buffering unbounded frames.
pub const STEP_QUEUE_DEPTH: usize = 1024;

/// Message from a sort worker to its consumer.
#[derive(Debug)]
pub enum WorkerMessage {
    Step(StepEvent),
    /// Final sentinel: the sort finished with these metrics. Nothing is
    /// sent after this.
    Done(Metrics),
}

/// Sink that forwards every step into the worker's channel.
struct ChannelSink {
    sender: SyncSender<WorkerMessage>,
}

impl StepSink for ChannelSink {
    fn on_step(&mut self, arr: &[i64], index: usize) {
        // A vanished consumer must not abort the sort; drop the frame
        let _ = self.sender.send(WorkerMessage::Step(StepEvent {
            snapshot: arr.to_vec(),
            index,
        }));
    }
}

/// A running (or finished) sort worker and the receiving end of its
/// step stream.
pub struct SortWorker {
    pub algorithm: Algorithm,
    pub receiver: Receiver<WorkerMessage>,
    handle: JoinHandle<Vec<i64>>,
}

impl SortWorker {
    /// Wait for the worker thread and return its sorted array.
    pub fn join(self) -> Vec<i64> {
        self.handle.join().unwrap_or_default()
    }
}

/// Spawn a single animated sort over a private copy of `input`.
pub fn spawn_worker(algorithm: Algorithm, input: &[i64]) -> SortWorker {
    let (sender, receiver) = sync_channel(STEP_QUEUE_DEPTH);
    let mut data = input.to_vec();
    let handle = thread::spawn(move || {
        let mut sink = ChannelSink {
            sender: sender.clone(),
        };
        let metrics = algorithm.run(&mut data, &mut sink);
        let _ = sender.send(WorkerMessage::Done(metrics));
        data
    });
    SortWorker {
        algorithm,
        receiver,
        handle,
    }
}

/// Spawn all seven algorithms against independent copies of `input`, in
/// display order.
pub fn spawn_all(input: &[i64]) -> Vec<SortWorker> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| spawn_worker(algorithm, input))
        .collect()
}

/// Run all seven algorithms concurrently with no animation and harvest
/// their metrics. Every worker is joined before this returns.
pub fn compare_all(input: &[i64]) -> FxHashMap<Algorithm, Metrics> {
    let handles: Vec<JoinHandle<(Algorithm, Metrics)>> = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let mut data = input.to_vec();
            thread::spawn(move || {
                let metrics = algorithm.run(&mut data, &mut NoopSink);
                (algorithm, metrics)
            })
        })
        .collect();

    let mut results = FxHashMap::default();
    for handle in handles {
        // A panicking worker loses its entry; the others still report
        if let Ok((algorithm, metrics)) = handle.join() {
            results.insert(algorithm, metrics);
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_stream_ends_with_done() {
        let worker = spawn_worker(Algorithm::Bubble, &[3, 1, 2]);
        let mut saw_done = false;
        for msg in worker.receiver.iter() {
            match msg {
                WorkerMessage::Step(event) => {
                    assert!(!saw_done, "step received after Done sentinel");
                    assert!(event.index < 3);
                }
                WorkerMessage::Done(metrics) => {
                    assert_eq!(metrics.loops, 3);
                    saw_done = true;
                }
            }
        }
        assert!(saw_done);
        assert_eq!(worker.join(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input_is_immediately_done() {
        let worker = spawn_worker(Algorithm::Merge, &[]);
        let messages: Vec<_> = worker.receiver.iter().collect();
        assert_eq!(messages.len(), 1);
        assert!(matches!(
            messages[0],
            WorkerMessage::Done(Metrics { loops: 0, space: 0 })
        ));
        assert!(worker.join().is_empty());
    }

    #[test]
    fn test_compare_all_reports_every_algorithm() {
        let input: Vec<i64> = vec![5, 3, 8, 1, 9, 2];
        let results = compare_all(&input);
        assert_eq!(results.len(), Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            assert!(results.contains_key(&algorithm));
        }
    }
}
