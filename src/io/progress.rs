//! Progress display for multi-layout runs

use crate::io::configuration::{MIN_LAYOUTS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};

/// Counts generated layouts on a single progress bar
///
/// Runs producing fewer than `MIN_LAYOUTS_FOR_PROGRESS` layouts stay silent.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no visible bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show a bar if `layout_count` is large enough to warrant one
    pub fn initialize(&mut self, layout_count: usize) {
        if layout_count < MIN_LAYOUTS_FOR_PROGRESS {
            return;
        }
        let bar = ProgressBar::new(layout_count as u64);
        bar.set_style(Self::style());
        self.bar = Some(bar);
    }

    /// True once `initialize` created a visible bar
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Mark one layout as done
    pub fn complete_layout(&self, label: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(label.to_string());
            bar.inc(1);
        }
    }

    /// Clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn style() -> ProgressStyle {
        let template =
            format!("[{{elapsed_precise}}] Layouts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}
