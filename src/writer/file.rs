//! File destinations, optionally compressed based on extension.

use crate::error::{GenerateError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Compression format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
    Zstd,
}

impl Compression {
    /// Detect compression format from file extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("gz" | "gzip") => Compression::Gzip,
            Some("bz2" | "bzip2") => Compression::Bzip2,
            Some("xz" | "lzma") => Compression::Xz,
            Some("zst" | "zstd") => Compression::Zstd,
            _ => Compression::None,
        }
    }
}

enum Encoder {
    Plain(BufWriter<File>),
    Gzip(flate2::write::GzEncoder<BufWriter<File>>),
    Bzip2(bzip2::write::BzEncoder<BufWriter<File>>),
    Xz(xz2::write::XzEncoder<BufWriter<File>>),
    Zstd(zstd::stream::write::Encoder<'static, BufWriter<File>>),
}

/// A file created by the writer for a path destination.
///
/// The writer owns this file, so unlike caller-supplied sinks it is always
/// finalized: encoder trailers written, buffers flushed, data synced.
pub struct OutputFile {
    path: PathBuf,
    encoder: Encoder,
}

impl OutputFile {
    /// Create or truncate `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| GenerateError::resource(path, e))?;
        let writer = BufWriter::with_capacity(WRITER_BUFFER_SIZE, file);

        let encoder = match Compression::from_path(path) {
            Compression::None => Encoder::Plain(writer),
            Compression::Gzip => Encoder::Gzip(flate2::write::GzEncoder::new(
                writer,
                flate2::Compression::default(),
            )),
            Compression::Bzip2 => Encoder::Bzip2(bzip2::write::BzEncoder::new(
                writer,
                bzip2::Compression::default(),
            )),
            Compression::Xz => Encoder::Xz(xz2::write::XzEncoder::new(writer, 6)),
            Compression::Zstd => Encoder::Zstd(
                zstd::stream::write::Encoder::new(writer, 0)
                    .map_err(|e| GenerateError::resource(path, e))?,
            ),
        };

        Ok(Self {
            path: path.to_path_buf(),
            encoder,
        })
    }

    /// Write encoder trailers, flush and sync. Returns the final size on disk.
    pub fn finish(self) -> Result<u64> {
        let path = self.path;
        let writer = match self.encoder {
            Encoder::Plain(w) => Ok(w),
            Encoder::Gzip(e) => e.finish(),
            Encoder::Bzip2(e) => e.finish(),
            Encoder::Xz(e) => e.finish(),
            Encoder::Zstd(e) => e.finish(),
        }
        .map_err(|e| GenerateError::resource(&path, e))?;

        let file = writer
            .into_inner()
            .map_err(|e| GenerateError::resource(&path, e.into_error()))?;
        file.sync_all()
            .map_err(|e| GenerateError::resource(&path, e))?;

        let size = file
            .metadata()
            .map_err(|e| GenerateError::resource(&path, e))?
            .len();
        Ok(size)
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.encoder {
            Encoder::Plain(ref mut w) => w.write(buf),
            Encoder::Gzip(ref mut w) => w.write(buf),
            Encoder::Bzip2(ref mut w) => w.write(buf),
            Encoder::Xz(ref mut w) => w.write(buf),
            Encoder::Zstd(ref mut w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.encoder {
            Encoder::Plain(ref mut w) => w.flush(),
            Encoder::Gzip(ref mut w) => w.flush(),
            Encoder::Bzip2(ref mut w) => w.flush(),
            Encoder::Xz(ref mut w) => w.flush(),
            Encoder::Zstd(ref mut w) => w.flush(),
        }
    }
}
