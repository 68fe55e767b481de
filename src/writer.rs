//! Output channels for formatted log lines.
//!
//! Writing straight to the terminal while an `indicatif` bar is drawn leaves torn bars
//! behind. [`ProgressWriter`] suspends every bar of a [`MultiProgress`] around each line,
//! so logging and progress display can share the terminal.

use std::io::{self, Write};
use std::sync::{Arc, LazyLock, Mutex};

use indicatif::{MultiProgress, ProgressDrawTarget};

/// Sink receiving one fully formatted line per call.
pub trait LineWriter: Send + Sync {
    fn write_line(&self, line: &str);
}

static GLOBAL_MULTI_PROGRESS: LazyLock<MultiProgress> = LazyLock::new(|| {
    let mp = MultiProgress::new();
    mp.set_draw_target(ProgressDrawTarget::stderr_with_hz(20));
    mp
});

/// Returns the process-wide [`MultiProgress`].
///
/// Bars added to it are redrawn around every line written by [`ProgressWriter::global`],
/// so log output never interrupts them.
pub fn global_multi_progress() -> MultiProgress {
    GLOBAL_MULTI_PROGRESS.clone()
}

/// Writes lines to stdout while the bars of a [`MultiProgress`] are hidden.
#[derive(Debug, Clone)]
pub struct ProgressWriter {
    progress: MultiProgress,
}

impl ProgressWriter {
    pub fn new(progress: MultiProgress) -> Self {
        Self { progress }
    }

    /// Writer bound to [`global_multi_progress`].
    pub fn global() -> Self {
        Self::new(global_multi_progress())
    }
}

impl LineWriter for ProgressWriter {
    fn write_line(&self, line: &str) {
        let written = self
            .progress
            .suspend(|| write_flushed(&mut io::stdout().lock(), line));
        if let Err(err) = written {
            tracing::debug!(error = %err, "failed to write log line to stdout");
        }
    }
}

fn write_flushed(out: &mut impl Write, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

/// Keeps every line in memory. Useful for tests and for replaying output later.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(|p| p.into_inner()))
    }
}

impl LineWriter for MemoryWriter {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(line.to_string());
    }
}
