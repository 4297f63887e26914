//! Terminal progress bar for model pulls.

use indicatif::{ProgressBar, ProgressStyle};
use lite_llm_core::PullProgressEvent;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}";
const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

/// Renders pull progress events.
///
/// Layer downloads get a byte bar that restarts for every digest; status
/// only events (`pulling manifest`, `verifying sha256 digest`) show as a
/// spinner message.
pub struct PullProgressBar {
    bar: ProgressBar,
    digest: Option<String>,
}

impl PullProgressBar {
    pub fn new(model: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(format!("pulling {model}"));
        Self { bar, digest: None }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░")
    }

    pub fn update(&mut self, event: &PullProgressEvent) {
        match event.total_bytes {
            Some(total) if total > 0 => {
                if self.digest != event.digest || self.bar.length() != Some(total) {
                    self.digest.clone_from(&event.digest);
                    self.bar.set_style(Self::bar_style());
                    self.bar.set_length(total);
                    self.bar.reset();
                }
                self.bar.set_position(event.completed_bytes.unwrap_or(0));
            }
            _ => {
                if self.digest.take().is_some() {
                    self.bar.set_style(Self::spinner_style());
                }
                self.bar.tick();
            }
        }
        self.bar.set_message(event.status.clone());
    }

    pub fn finish(&self, message: String) {
        self.bar.finish_with_message(message);
    }

    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
