//! Indeterminate progress indicator for the push step.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use terminal_size::{terminal_size, Width};

use crate::output::{GREEN, RED, RESET};

const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const DEFAULT_TERMINAL_WIDTH: usize = 80;

fn get_terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Spinner shown while a push is in flight. In plain mode (no spinner) a
/// single line is printed instead, which keeps output readable in logs and
/// non-interactive terminals.
pub struct PushProgress {
    spinner: Option<Arc<ProgressBar>>,
    label: String,
    stop_flag: Arc<AtomicBool>,
    timer_thread: Option<JoinHandle<()>>,
    start_time: Instant,
}

impl PushProgress {
    /// Start the indicator for a push to `branch`.
    pub fn start(branch: &str, plain: bool) -> Self {
        let label = format!("Pushing to branch \"{}\"", branch);
        let stop_flag = Arc::new(AtomicBool::new(false));
        let start_time = Instant::now();

        if plain {
            println!("{}...", label);
            return Self {
                spinner: None,
                label,
                stop_flag,
                timer_thread: None,
                start_time,
            };
        }

        let spinner = Arc::new(ProgressBar::new_spinner());
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars(SPINNER_CHARS)
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        spinner.set_message(format!("{}... [00:00]", label));
        spinner.enable_steady_tick(Duration::from_millis(80));

        // Timer thread keeps the elapsed time in the message current.
        let spinner_clone = Arc::clone(&spinner);
        let stop_flag_clone = Arc::clone(&stop_flag);
        let label_clone = label.clone();
        let timer_thread = thread::spawn(move || {
            while !stop_flag_clone.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_secs(1));
                if stop_flag_clone.load(Ordering::Relaxed) {
                    break;
                }
                let elapsed = start_time.elapsed().as_secs();
                spinner_clone.set_message(format!(
                    "{}... [{:02}:{:02}]",
                    label_clone,
                    elapsed / 60,
                    elapsed % 60
                ));
            }
        });

        Self {
            spinner: Some(spinner),
            label,
            stop_flag,
            timer_thread: Some(timer_thread),
            start_time,
        }
    }

    fn stop_timer(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.timer_thread.take() {
            let _ = handle.join();
        }
    }

    /// Resolve the indicator to success with an elapsed-time line.
    pub fn finish_success(&mut self) {
        self.stop_timer();
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
        let secs = self.start_time.elapsed().as_secs();
        println!("{GREEN}\u{2714} {} done in {}s{RESET}", self.label, secs);
    }

    /// Resolve the indicator to failure, printing a truncated error line.
    pub fn finish_error(&mut self, error: &str) {
        self.stop_timer();
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
        let available = get_terminal_width().saturating_sub(self.label.chars().count() + 12);
        let truncated = truncate(error, available.max(20));
        println!("{RED}\u{2718} {} failed: {}{RESET}", self.label, truncated);
    }
}

impl Drop for PushProgress {
    fn drop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.timer_thread.take() {
            let _ = handle.join();
        }
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 20), "short");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        let long = "a".repeat(50);
        let result = truncate(&long, 20);
        assert_eq!(result.chars().count(), 20);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_plain_progress_lifecycle() {
        let mut progress = PushProgress::start("main", true);
        progress.finish_success();
    }
}
