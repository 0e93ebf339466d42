//! Terminal rendering of index-build progress.
//!
//! Each workflow phase gets one line: a spinner while the store is opened or
//! the index is saved, and a component bar while the store is scanned.
//! [`Progress::Message`] notes are printed above the line and counted so the
//! phase summary can mention them.

use ccdict::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 100;
const PHASE_TEMPLATE: &str = "{spinner:.cyan} {prefix:.bold} {wide_msg}";
const SCAN_TEMPLATE: &str =
    "  {prefix:.bold} [{bar:30.cyan/blue}] {pos}/{len} components ({per_sec}, eta {eta})";

struct ScanDisplay {
    line: ProgressBar,
    notes: AtomicUsize,
    phase_notes: AtomicUsize,
}

impl ScanDisplay {
    fn phase_start(&self, name: &'static str) {
        self.phase_notes.store(0, Ordering::Relaxed);
        self.line.reset();
        self.line.set_length(0);
        self.line.set_style(style(PHASE_TEMPLATE));
        self.line.set_prefix(name);
        self.line.set_message("working");
        self.line
            .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    }

    fn scan_start(&self, total_components: u64) {
        self.line.disable_steady_tick();
        self.line.set_style(style(SCAN_TEMPLATE).progress_chars("=> "));
        self.line.set_length(total_components);
        self.line.set_position(0);
    }

    fn scan_finish(&self) {
        if let Some(total) = self.line.length() {
            self.line.set_position(total);
        }
    }

    fn phase_finish(&self) {
        self.line.disable_steady_tick();
        self.line.set_style(style(PHASE_TEMPLATE));
        let summary = match self.phase_notes.load(Ordering::Relaxed) {
            0 => "done".to_string(),
            1 => "done, 1 note".to_string(),
            n => format!("done, {} notes", n),
        };
        self.line.finish_with_message(summary);
    }

    fn note(&self, text: String) {
        self.notes.fetch_add(1, Ordering::Relaxed);
        self.phase_notes.fetch_add(1, Ordering::Relaxed);
        self.line.println(format!("  note: {}", text));
    }

    fn handle(&self, event: Progress) {
        match event {
            Progress::PhaseStart { name } => self.phase_start(name),
            Progress::ScanStart { total_components } => self.scan_start(total_components),
            Progress::ComponentScanned => self.line.inc(1),
            Progress::ScanFinish => self.scan_finish(),
            Progress::PhaseFinish => self.phase_finish(),
            Progress::Message(text) => self.note(text),
        }
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Renders workflow [`Progress`] events on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    display: Arc<ScanDisplay>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let line = ProgressBar::with_draw_target(Some(0), target);
        Self {
            display: Arc::new(ScanDisplay {
                line,
                notes: AtomicUsize::new(0),
                phase_notes: AtomicUsize::new(0),
            }),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let display = self.display.clone();
        Box::new(move |event: Progress| display.handle(event))
    }

    /// Number of notes received over the handler's lifetime.
    pub fn notes(&self) -> usize {
        self.display.notes.load(Ordering::Relaxed)
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
