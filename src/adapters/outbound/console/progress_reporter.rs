use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Messages go to stderr so they never end up in the HTML output. While a
/// backend call is in flight an indicatif spinner is shown.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn finish_spinner(&self) {
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
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn report_waiting(&self, message: &str) {
        self.finish_spinner();

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!();
        eprintln!("{}", message);
    }
}
