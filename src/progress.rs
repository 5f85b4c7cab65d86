//! Shared progress tracking utilities.
//!
//! `ProgressWriter` counts the bytes pushed into any sink, and
//! `RecordProgress` drives the single overwritten progress line shown while
//! records are being written.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};

/// Records between two progress updates
pub const PROGRESS_INTERVAL: usize = 10_000;

/// A writer wrapper that tracks bytes written.
pub struct ProgressWriter<W: Write> {
    writer: W,
    bytes_written: u64,
}

impl<W: Write> ProgressWriter<W> {
    /// Create a new ProgressWriter wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bytes_written: 0,
        }
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for ProgressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.writer.write(buf)?;
        self.bytes_written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Percentage of `total` reached after `done` records, two decimals
pub fn format_percent(done: usize, total: usize) -> String {
    if total == 0 {
        return "100.00%".to_string();
    }
    format!("{:.2}%", done as f64 / total as f64 * 100.0)
}

/// Overwritten one-line record progress on stderr
pub struct RecordProgress {
    bar: ProgressBar,
    total: usize,
}

impl RecordProgress {
    /// A visible progress line when `enabled`, a no-op otherwise
    pub fn new(total: usize, enabled: bool) -> Self {
        let bar = if enabled {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                    .expect("static progress template")
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
            pb.set_message(format_percent(0, total));
            pb
        } else {
            ProgressBar::hidden()
        };
        Self { bar, total }
    }

    /// Note that `written` records are done; redraws every
    /// [`PROGRESS_INTERVAL`] records
    pub fn record_written(&self, written: usize) {
        if written % PROGRESS_INTERVAL == 0 {
            self.bar.set_position(written as u64);
            self.bar.set_message(format_percent(written, self.total));
        }
    }

    /// Text of the progress line as last drawn
    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_writer_counts_bytes() {
        let mut writer = ProgressWriter::new(Vec::new());

        writer.write_all(b"hello").unwrap();
        assert_eq!(writer.bytes_written(), 5);
        writer.write_all(b", world").unwrap();

        assert_eq!(writer.bytes_written(), 12);
        assert_eq!(writer.into_inner(), b"hello, world");
    }

    #[test]
    fn test_record_progress_updates_on_interval() {
        let total = PROGRESS_INTERVAL * 2 + 5;
        let progress = RecordProgress::new(total, false);

        progress.record_written(1);
        progress.record_written(PROGRESS_INTERVAL - 1);
        assert_eq!(progress.message(), "");

        progress.record_written(PROGRESS_INTERVAL);
        assert_eq!(progress.message(), "49.99%");

        progress.record_written(PROGRESS_INTERVAL + 1);
        assert_eq!(progress.message(), "49.99%");

        progress.record_written(PROGRESS_INTERVAL * 2);
        assert_eq!(progress.message(), "99.98%");
    }

    #[test]
    fn test_record_progress_starts_at_zero() {
        let progress = RecordProgress::new(50, true);
        assert_eq!(progress.message(), "0.00%");
        progress.finish();
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(10_000, 30_000), "33.33%");
        assert_eq!(format_percent(30_000, 30_000), "100.00%");
        assert_eq!(format_percent(0, 5), "0.00%");
        assert_eq!(format_percent(0, 0), "100.00%");
    }
}
