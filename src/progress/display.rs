//! Progress bar display management and coordination.
//!
//! [`ProgressDisplay`] owns a main bar counting finished segments and hands
//! out one child bar per segment counting received bytes.
//!
//! ```rust
//! use splitfetch::progress::{ProgressDisplay, StyleOptions};
//!
//! let progress_display = ProgressDisplay::new(StyleOptions::default(), 4);
//! let segment = progress_display.create_child_progress(1024, 0);
//! segment.inc(512);
//! progress_display.finish_child(segment);
//! progress_display.increment_main();
//! progress_display.finish();
//! ```

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Progress display manager that coordinates multiple progress bars.
pub struct ProgressDisplay {
    /// The multi-progress instance for coordinating multiple progress bars.
    multi: MultiProgress,
    /// The main progress bar for overall progress.
    main: ProgressBar,
    /// Style options for progress bars.
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display for a download of `total_segments` segments.
    pub fn new(style_options: StyleOptions, total_segments: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };

        let main = multi.add(
            style_options
                .main()
                .clone()
                .to_progress_bar(total_segments as u64),
        );
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Create a child progress bar for one segment.
    ///
    /// # Arguments
    /// * `size` - Total size for the progress bar
    /// * `position` - Starting position
    pub fn create_child_progress(&self, size: u64, position: u64) -> ProgressBar {
        self.multi.add(
            self.style_options
                .child()
                .clone()
                .to_progress_bar(size)
                .with_position(position),
        )
    }

    /// Increment the main progress bar by one.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish the progress display, clearing or keeping bars based on configuration.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }
}
