//! Step events and the sink contract between sorts and renderers
//!
//! Every sort routine reports each mutation (swap or placement) through a
//! [`StepSink`], passing the full array and the index it just touched. The
//! sink decouples the algorithms from any rendering technology: the TUI
//! feeds steps through a channel, tests record them into a `Vec`, and the
//! metrics-only path uses [`NoopSink`].
//!
//! A sink must never fail — `on_step` returns `()` and implementations
//! swallow delivery problems (e.g. a closed channel) so a vanished consumer
//! cannot corrupt a sort in progress.

use crate::sorts::{Algorithm, Metrics};

/// A single animation frame: the array after one mutation, plus the index
/// that was just written or swapped into place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEvent {
    pub snapshot: Vec<i64>,
    pub index: usize,
}

/// Receiver for per-mutation notifications from a running sort.
///
/// `arr` is the live array; implementations that hold onto the data must
/// copy it (the algorithm keeps mutating the same storage).
pub trait StepSink {
    fn on_step(&mut self, arr: &[i64], index: usize);
}

/// Sink that discards every step. Used for metrics-only passes.
pub struct NoopSink;

impl StepSink for NoopSink {
    fn on_step(&mut self, _arr: &[i64], _index: usize) {}
}

/// Sink that copies every step into an owned event list.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<StepEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink { events: Vec::new() }
    }
}

impl StepSink for RecordingSink {
    fn on_step(&mut self, arr: &[i64], index: usize) {
        self.events.push(StepEvent {
            snapshot: arr.to_vec(),
            index,
        });
    }
}

/// Run `algorithm` over a copy of `input` and return the sorted result, the
/// run metrics, and the complete ordered step stream.
///
/// This is the headless equivalent of an animated run: the event list is
/// exactly what a renderer would have been fed, in order.
pub fn record_steps(algorithm: Algorithm, input: &[i64]) -> (Vec<i64>, Metrics, Vec<StepEvent>) {
    let mut data = input.to_vec();
    let mut sink = RecordingSink::new();
    let metrics = algorithm.run(&mut data, &mut sink);
    (data, metrics, sink.events)
}
