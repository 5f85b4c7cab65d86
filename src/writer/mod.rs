//! Record stream writer.
//!
//! Drives header emission and per-record generation into a sink. Three
//! delivery modes share one production loop:
//!
//! - [`RecordWriter::generate`] writes a file on a background thread and
//!   returns a [`GenerationHandle`] immediately.
//! - [`RecordWriter::generate_and_wait`] writes a file and returns once it
//!   is finalized on disk.
//! - [`RecordWriter::generate_to_stream`] writes into a caller-owned sink
//!   and never closes it.
//!
//! The record loop is not cancellable and has no flow control beyond what
//! the sink's `write` imposes.

mod file;

pub use file::{Compression, OutputFile, WRITER_BUFFER_SIZE};

use crate::config::{OptionOverrides, Options};
use crate::error::{GenerateError, Result};
use crate::format::{format_header, push_line};
use crate::progress::{ProgressWriter, RecordProgress};
use crate::schema::Schema;
use crate::summary::GenerationSummary;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Generates records from a schema using the options it holds.
///
/// Options changes only apply to calls started afterwards. The writer does
/// no locking; share it across threads only behind your own
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct RecordWriter {
    options: Options,
}

impl RecordWriter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Defaults with `overrides` merged on top
    pub fn with_overrides(overrides: &OptionOverrides) -> Self {
        Self::new(Options::with_overrides(overrides))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace all options
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Patch the options that `overrides` sets
    pub fn apply(&mut self, overrides: &OptionOverrides) {
        self.options.apply(overrides);
    }

    pub fn set_header(&mut self, header: bool) {
        self.options.header = header;
    }

    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) {
        self.options.delimiter = delimiter.into();
    }

    pub fn set_quote(&mut self, quote: impl Into<String>) {
        self.options.quote = quote.into();
    }

    pub fn set_escape(&mut self, escape: impl Into<String>) {
        self.options.escape = escape.into();
    }

    pub fn set_new_line(&mut self, new_line: impl Into<String>) {
        self.options.new_line = new_line.into();
    }

    pub fn set_logging(&mut self, logging: bool) {
        self.options.logging = logging;
    }

    /// Write `count` records to `path` on a background thread.
    ///
    /// Returns at once; the outcome, including any error creating or
    /// writing the file, is reported through the handle. Dropping the
    /// handle lets the generation finish unobserved.
    pub fn generate(
        &self,
        schema: Schema,
        count: usize,
        path: impl AsRef<Path>,
    ) -> GenerationHandle {
        let options = self.options.clone();
        let path = path.as_ref().to_path_buf();

        let worker = thread::spawn(move || {
            let mut schema = schema;
            let outcome = write_file(&mut schema, count, &path, &options);
            (schema, outcome)
        });

        GenerationHandle { worker }
    }

    /// Write `count` records to `path`, returning once the file is finalized
    pub fn generate_and_wait(
        &self,
        schema: &mut Schema,
        count: usize,
        path: impl AsRef<Path>,
    ) -> Result<GenerationSummary> {
        write_file(schema, count, path.as_ref(), &self.options)
    }

    /// Write `count` records into a caller-owned sink.
    ///
    /// The sink is flushed but never closed, so several schemas can be
    /// written one after another into the same sink.
    pub fn generate_to_stream<W: Write>(
        &self,
        schema: &mut Schema,
        count: usize,
        sink: &mut W,
    ) -> Result<GenerationSummary> {
        let start = Instant::now();
        let mut counted = ProgressWriter::new(sink);

        write_records(schema, count, &mut counted, &self.options)?;
        counted.flush()?;

        let summary = GenerationSummary {
            records: count,
            header: self.options.header,
            bytes: counted.bytes_written(),
            elapsed: start.elapsed(),
            destination: None,
        };
        log_summary(&summary, &self.options);
        Ok(summary)
    }

    /// Render `count` records, without a header, into one string
    pub fn generate_record_string(&self, schema: &mut Schema, count: usize) -> String {
        let mut out = String::new();
        for _ in 0..count {
            push_line(&mut out, schema.generate_values(), &self.options);
        }
        out
    }
}

/// Handle to a detached file generation
pub struct GenerationHandle {
    worker: JoinHandle<(Schema, Result<GenerationSummary>)>,
}

impl GenerationHandle {
    /// True once the file is finalized or the generation failed
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Block until the generation completes
    pub fn wait(self) -> Result<GenerationSummary> {
        self.join().1
    }

    /// Block until the generation completes, recovering the schema.
    ///
    /// The schema is lost if a field generator panicked.
    pub fn join(self) -> (Option<Schema>, Result<GenerationSummary>) {
        match self.worker.join() {
            Ok((schema, outcome)) => (Some(schema), outcome),
            Err(_) => (None, Err(GenerateError::WorkerPanicked)),
        }
    }
}

fn write_file(
    schema: &mut Schema,
    count: usize,
    path: &Path,
    options: &Options,
) -> Result<GenerationSummary> {
    let start = Instant::now();
    let mut file = OutputFile::create(path)?;

    write_records(schema, count, &mut file, options)
        .map_err(|e| into_resource_error(e, path))?;
    let bytes = file.finish()?;

    let summary = GenerationSummary {
        records: count,
        header: options.header,
        bytes,
        elapsed: start.elapsed(),
        destination: Some(PathBuf::from(path)),
    };
    log_summary(&summary, options);
    Ok(summary)
}

/// The shared production loop: optional header, then `count` records in
/// order, one line materialized at a time.
fn write_records<W: Write>(
    schema: &mut Schema,
    count: usize,
    sink: &mut W,
    options: &Options,
) -> Result<()> {
    if options.header {
        sink.write_all(format_header(schema, options).as_bytes())?;
    }

    let progress = RecordProgress::new(count, options.logging);
    let mut line = String::new();
    for written in 1..=count {
        line.clear();
        push_line(&mut line, schema.generate_values(), options);
        sink.write_all(line.as_bytes())?;
        progress.record_written(written);
    }
    progress.finish();
    Ok(())
}

fn into_resource_error(err: GenerateError, path: &Path) -> GenerateError {
    match err {
        GenerateError::Io(source) => GenerateError::resource(path, source),
        other => other,
    }
}

fn log_summary(summary: &GenerationSummary, options: &Options) {
    if options.logging {
        eprintln!("{}", summary);
    }
}
