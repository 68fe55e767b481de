//! Logging while progress bars are drawn.
//!
//! Loggers from the global factory write through the shared `MultiProgress`, so bars
//! added to `global_multi_progress()` are hidden around each line and redrawn afterwards.
//!
//! Run with: `cargo run --example progress_logging`

use indicatif::{ProgressBar, ProgressStyle};
use slepy::{colorize_bool, debug_print, global_multi_progress, get_logger, Color, LazyLogger};
use std::thread;
use std::time::Duration;

static LOG: LazyLogger = LazyLogger::new("progress_logging");

fn download(name: &'static str, chunks: u64) -> thread::JoinHandle<bool> {
    let bar = global_multi_progress().add(ProgressBar::new(chunks));
    bar.set_style(
        ProgressStyle::with_template("{prefix:>8} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    bar.set_prefix(name);

    thread::spawn(move || {
        let log = get_logger(name);
        for chunk in 0..chunks {
            thread::sleep(Duration::from_millis(40));
            bar.inc(1);
            if chunk % 5 == 0 {
                log.info(format_args!("chunk {chunk} done"));
            }
        }
        bar.finish_and_clear();
        true
    })
}

fn main() {
    LOG.get().info(Color::CyanBold.paint("starting downloads"));

    let handles = vec![download("alpha", 20), download("beta", 35)];
    let ok = handles.into_iter().all(|h| h.join().unwrap_or(false));

    LOG.get().info(format_args!("all downloads finished: {}", colorize_bool(ok)));
    debug_print(None, "printed plainly, with a warning on the tracing side");
}
