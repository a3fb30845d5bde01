//! Progress indicator utilities for the Typesense CLI.
//!
//! Responsibilities:
//! - Provide reusable spinners for long-running steps (snapshotting,
//!   document import).
//! - Ensure ALL progress output is written to STDERR (never stdout), so
//!   generated files and reports piped from stdout stay clean.
//! - Allow global suppression via a caller-provided `enabled` boolean
//!   (driven by `--quiet`).
//!
//! Non-responsibilities:
//! - This module does not decide *when* progress should be shown; callers do.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// A step spinner that always draws to STDERR. When disabled, it is a no-op.
pub(crate) struct StepSpinner {
    label: String,
    pb: Option<ProgressBar>,
}

impl StepSpinner {
    /// Create a new spinner. `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        let label = label.into();

        if !enabled {
            return Self { label, pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("template is a compile-time constant with valid syntax"),
        );
        pb.set_message(label.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            label,
            pb: Some(pb),
        }
    }

    /// Finish the spinner with a stable message (on STDERR).
    pub(crate) fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.finish_with_message(format!("{} done", self.label));
        }
    }
}

impl Drop for StepSpinner {
    fn drop(&mut self) {
        // Clear the progress line on early exit to avoid interleaving with
        // error output.
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
