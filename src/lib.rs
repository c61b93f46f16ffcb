//! # Introduction
//!
//! Sortty animates seven classic comparison sorts over a configurable
//! integer array, drawing bar-chart frames in the terminal as each
//! algorithm runs and reporting two counters per run: a loop count (an
//! approximate time-complexity proxy) and an auxiliary-space count.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Sort Library → Step Events → Runner → TUI
//! ```
//!
//! 1. [`input`] — array generation (random, ascending, descending) and
//!    newline-delimited text load/save.
//! 2. [`sorts`] — the instrumented algorithms: bubble, insertion,
//!    selection, merge, heap, and quicksort with last-element or
//!    median-of-three pivots.
//! 3. [`step`] — the [`step::StepSink`] contract that decouples the
//!    algorithms from rendering, plus headless recording.
//! 4. [`runner`] — one worker thread per algorithm, each over its own
//!    copy of the input, streaming steps through a bounded channel.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! The counters are deterministic: sorting the same array with the same
//! algorithm twice yields identical loop and space counts, and the
//! animation speed never influences either.

pub mod error;
pub mod input;
pub mod runner;
pub mod sorts;
pub mod step;
pub mod ui;
