use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{CIRCUIT_REFRESH_STRIDE, SPINNER_FRAMES, TICK_INTERVAL};
use crate::graph::GraphKind;
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg} [{elapsed}]";

/// Status output on stderr while a command runs.
///
/// Only created when stderr is a terminal, so piped reports stay clean.
pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// Present only when stderr is attached to a terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let spinner_style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["🎡 ", "🎡⊙", "🎡◐", "🎡◓", "🎡◑", "🎡◒", "🎡○", "🎡●", "✓"]);
        pb.set_style(spinner_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_loading(&mut self, path: &Path) {
        let _ = self.term.clear_line();
        let spinner = self.create_spinner(&format!("Reading {}...", path.display()));
        self.current_bar = Some(spinner);
    }

    pub fn finish_loading(&mut self, kind: GraphKind, nodes: usize, edges: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        eprintln!(
            "{} Loaded {} with {} {} and {} {}",
            style("✓").green(),
            style(kind).cyan(),
            style(nodes).yellow().bold(),
            pluralize("node", nodes),
            style(edges).yellow().bold(),
            pluralize("edge", edges)
        );
    }

    pub fn start_analysis(&self, what: &str) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} {}...",
            style(self.next_frame()).yellow(),
            what
        );
    }

    pub fn start_enumeration(&mut self) {
        let spinner = self.create_spinner("Enumerating circuits: 0 found");
        self.current_bar = Some(spinner);
    }

    /// Refresh the live counter; cheap to call for every circuit
    pub fn circuit_found(&self, count: usize) {
        if count % CIRCUIT_REFRESH_STRIDE != 0 {
            return;
        }
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Enumerating circuits: {count} found"));
        }
    }

    pub fn finish_enumeration(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn finish_analysis(&self, found: usize, noun: &str) {
        if found == 0 {
            eprintln!(
                "{} No {} found {}",
                style("✓").green().bold(),
                pluralize(noun, found),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} {}",
                style("⚠").yellow().bold(),
                style(found).red().bold(),
                pluralize(noun, found)
            );
        }
    }
}
