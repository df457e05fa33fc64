use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 100;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it never interferes with rendered output on stdout.
/// While a request to the scanning service is pending an indicatif spinner
/// is shown; it is cleared by the next error or completion message.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: false,
        }
    }

    /// A reporter that prints nothing; used for machine-readable output
    pub fn quiet() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: true,
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn start_waiting(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.clear_spinner();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}
