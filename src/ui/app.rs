//! Main TUI application state and logic

use crate::input::{self, DataOrder};
use crate::runner::{spawn_worker, SortWorker, WorkerMessage};
use crate::sorts::{Algorithm, Metrics};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

/// How often the event loop ticks: poll timeout and drain interval.
const TICK: Duration = Duration::from_millis(15);

/// Run parameters collected from the command line.
pub struct RunConfig {
    /// Algorithm for single mode; ignored in compare mode
    pub algorithm: Algorithm,
    /// Run all seven algorithms side by side
    pub compare: bool,
    pub order: DataOrder,
    pub count: usize,
    pub max: i64,
    /// Animation pacing factor, 1..=10. Purely presentational: it never
    /// affects counters or the sorted result.
    pub speed: u64,
    /// Data came from a file; restart replays it instead of regenerating
    pub from_file: bool,
}

/// One algorithm's animation lane: the worker, its latest frame, and its
/// final metrics once the Done sentinel arrives.
pub struct Lane {
    pub algorithm: Algorithm,
    worker: Option<SortWorker>,
    pub frame_data: Vec<i64>,
    pub highlight: Option<usize>,
    pub metrics: Option<Metrics>,
    pub steps_consumed: u64,
}

impl Lane {
    fn spawn(algorithm: Algorithm, input: &[i64]) -> Self {
        Lane {
            algorithm,
            worker: Some(spawn_worker(algorithm, input)),
            frame_data: input.to_vec(),
            highlight: None,
            metrics: None,
            steps_consumed: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.metrics.is_some()
    }

    /// Drain up to `budget` frames from the worker without blocking.
    ///
    /// Consecutive identical snapshots are dropped before they reach the
    /// renderer and do not count against the budget.
    fn pump(&mut self, budget: u64) {
        let mut remaining = budget;
        while remaining > 0 {
            let received = match self.worker.as_ref() {
                Some(worker) => worker.receiver.try_recv(),
                None => return,
            };
            match received {
                Ok(WorkerMessage::Step(event)) => {
                    if event.snapshot != self.frame_data {
                        self.frame_data = event.snapshot;
                        self.highlight = Some(event.index);
                        self.steps_consumed += 1;
                        remaining -= 1;
                    }
                }
                Ok(WorkerMessage::Done(metrics)) => {
                    self.metrics = Some(metrics);
                    self.highlight = None;
                    // Join now; the worker's return value is the exact
                    // final array
                    if let Some(worker) = self.worker.take() {
                        self.frame_data = worker.join();
                    }
                    return;
                }
                Err(_) => return, // queue empty (or producer gone)
            }
        }
    }
}

/// The main application state
pub struct App {
    pub config: RunConfig,

    /// The unsorted input this session started from. Replaced only on an
    /// explicit restart with regeneration; never touched by the lanes.
    pub original: Vec<i64>,

    /// One lane in single mode, seven in compare mode
    pub lanes: Vec<Lane>,

    pub should_quit: bool,
    pub is_paused: bool,
    pub status_message: String,

    /// Completion already announced in the status bar
    done_announced: bool,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app and launch the sort workers.
    pub fn new(config: RunConfig, original: Vec<i64>) -> Self {
        let lanes = Self::spawn_lanes(&config, &original);
        App {
            config,
            original,
            lanes,
            should_quit: false,
            is_paused: false,
            status_message: String::from("Sorting…"),
            done_announced: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    fn spawn_lanes(config: &RunConfig, input: &[i64]) -> Vec<Lane> {
        if config.compare {
            Algorithm::ALL
                .iter()
                .map(|&algorithm| Lane::spawn(algorithm, input))
                .collect()
        } else {
            vec![Lane::spawn(config.algorithm, input)]
        }
    }

    pub fn all_done(&self) -> bool {
        self.lanes.iter().all(Lane::is_done)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if !self.is_paused {
                self.pump();
            }

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Drain every lane's step queue round-robin, `speed` frames per lane
    /// per tick.
    fn pump(&mut self) {
        let budget = self.config.speed;
        for lane in &mut self.lanes {
            lane.pump(budget);
        }
        if self.all_done() && !self.done_announced {
            self.done_announced = true;
            self.status_message = if self.config.compare {
                "All algorithms complete".to_string()
            } else {
                "Sort complete".to_string()
            };
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        if self.config.compare {
            self.render_compare_grid(frame, main_chunks[0]);
        } else {
            self.render_single(frame, main_chunks[0]);
        }

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.config.speed,
            self.is_paused,
            self.all_done(),
        );
    }

    fn render_single(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
            .split(area);

        let lane = &self.lanes[0];
        super::panes::render_bars_pane(
            frame,
            columns[0],
            lane.algorithm.name(),
            &lane.frame_data,
            lane.highlight,
            lane.is_done(),
        );
        super::panes::render_metrics_pane(
            frame,
            columns[1],
            lane.algorithm.name(),
            self.original.len(),
            lane.steps_consumed,
            lane.metrics,
            self.is_paused,
        );
    }

    /// Seven mini bar panes plus the comparison table, in a 4x2 grid.
    fn render_compare_grid(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        let mut cells = Vec::with_capacity(8);
        for row in rows.iter() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            cells.push(cols[0]);
            cells.push(cols[1]);
        }

        for (lane, cell) in self.lanes.iter().zip(cells.iter()) {
            super::panes::render_bars_pane(
                frame,
                *cell,
                lane.algorithm.name(),
                &lane.frame_data,
                lane.highlight,
                lane.is_done(),
            );
        }

        let compare_rows: Vec<super::panes::CompareRow> = self
            .lanes
            .iter()
            .map(|lane| super::panes::CompareRow {
                algorithm: lane.algorithm,
                metrics: lane.metrics,
                steps_consumed: lane.steps_consumed,
            })
            .collect();
        super::panes::render_compare_pane(frame, cells[7], &compare_rows);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle pause (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if !self.all_done() {
                        self.is_paused = !self.is_paused;
                        self.status_message = if self.is_paused {
                            "Paused".to_string()
                        } else {
                            "Sorting…".to_string()
                        };
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if self.config.speed < 10 {
                    self.config.speed += 1;
                }
                self.status_message = format!("Speed x{}", self.config.speed);
            }
            KeyCode::Char('-') => {
                if self.config.speed > 1 {
                    self.config.speed -= 1;
                }
                self.status_message = format!("Speed x{}", self.config.speed);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
            }
            KeyCode::Char('w') | KeyCode::Char('W') => {
                self.save_artifacts();
            }
            _ => {}
        }
    }

    /// Abandon the current lanes and start over. Random data is
    /// regenerated; file-supplied and pre-sorted data replays as-is.
    fn restart(&mut self) {
        if !self.config.from_file && self.config.order == DataOrder::Random {
            self.original = input::generate(
                &mut rand::thread_rng(),
                self.config.count,
                self.config.order,
                self.config.max,
            );
        }
        self.lanes = Self::spawn_lanes(&self.config, &self.original);
        self.is_paused = false;
        self.done_announced = false;
        self.status_message = "Restarted".to_string();
    }

    /// Write the original and (when finished) sorted arrays as
    /// newline-delimited text next to the working directory.
    fn save_artifacts(&mut self) {
        if let Err(e) = input::save_file(Path::new("unsorted.txt"), &self.original) {
            self.status_message = format!("Save failed: {}", e);
            return;
        }

        match self.lanes.iter().find(|lane| lane.is_done()) {
            Some(lane) => {
                match input::save_file(Path::new("sorted.txt"), &lane.frame_data) {
                    Ok(()) => {
                        self.status_message =
                            "Saved unsorted.txt and sorted.txt".to_string();
                    }
                    Err(e) => {
                        self.status_message = format!("Save failed: {}", e);
                    }
                }
            }
            None => {
                self.status_message =
                    "Saved unsorted.txt (sorted.txt once a run finishes)".to_string();
            }
        }
    }
}
