//! Output sink for report records.
//!
//! A sink is either stdout or a file opened in append or truncate mode.
//! Files ending in `.gz` are gzip-compressed; appending adds a new gzip
//! member. Writes are buffered; `with_sink` finishes the stream before
//! returning.

use super::{is_gzip_path, validate_path};
use crate::utils::config::STDOUT_PATH;
use crate::utils::error::OutputError;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

/// How an existing output file is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenMode {
    /// Keep existing records and add new ones at the end
    #[default]
    Append,
    /// Replace the file contents
    Truncate,
}

/// Where report records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    Stdout,
    File(PathBuf),
}

impl SinkTarget {
    /// Interpret a CLI path, where `-` means stdout
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str() == STDOUT_PATH {
            SinkTarget::Stdout
        } else {
            SinkTarget::File(path.to_path_buf())
        }
    }
}

enum SinkStream {
    Stdout(BufWriter<Stdout>),
    File(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

/// Buffered writable stream for report output
///
/// **Public** - handed to writers by `with_sink`
pub struct OutputSink {
    stream: SinkStream,
}

impl OutputSink {
    /// Open a sink for `target`
    ///
    /// Parent directories of file targets are created as needed.
    ///
    /// # Errors
    /// * `OutputError::InvalidPath` - path is empty, a directory, or its
    ///   parent cannot be created
    /// * `OutputError::WriteFailed` - the file cannot be opened
    pub fn open(target: &SinkTarget, mode: OpenMode) -> Result<Self, OutputError> {
        let stream = match target {
            SinkTarget::Stdout => SinkStream::Stdout(BufWriter::new(io::stdout())),
            SinkTarget::File(path) => {
                validate_path(path)?;
                create_parent_dirs(path)?;

                let mut options = OpenOptions::new();
                options.create(true);
                match mode {
                    OpenMode::Append => options.append(true),
                    OpenMode::Truncate => options.write(true).truncate(true),
                };

                debug!("Opening sink {} ({:?})", path.display(), mode);
                let file = options.open(path).map_err(OutputError::WriteFailed)?;
                if is_gzip_path(path) {
                    SinkStream::Gzip(GzEncoder::new(BufWriter::new(file), Compression::default()))
                } else {
                    SinkStream::File(BufWriter::new(file))
                }
            }
        };

        Ok(Self { stream })
    }

    /// Flush buffered data and, for gzip sinks, write the gzip trailer
    pub fn finish(self) -> io::Result<()> {
        match self.stream {
            SinkStream::Stdout(mut w) => w.flush(),
            SinkStream::File(mut w) => w.flush(),
            SinkStream::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.stream {
            SinkStream::Stdout(w) => w.write(buf),
            SinkStream::File(w) => w.write(buf),
            SinkStream::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.stream {
            SinkStream::Stdout(w) => w.flush(),
            SinkStream::File(w) => w.flush(),
            SinkStream::Gzip(w) => w.flush(),
        }
    }
}

/// Open a sink, run `f` against it, then finish the stream
///
/// **Public** - scoped acquisition for report output
///
/// The sink is dropped on every exit path. Errors from `f` take precedence
/// over finish errors.
pub fn with_sink<T, F>(target: &SinkTarget, mode: OpenMode, f: F) -> Result<T, OutputError>
where
    F: FnOnce(&mut OutputSink) -> Result<T, OutputError>,
{
    let mut sink = OutputSink::open(target, mode)?;
    let value = f(&mut sink)?;
    sink.finish().map_err(OutputError::WriteFailed)?;
    Ok(value)
}

/// Create parent directories if needed
///
/// **Private** - internal helper for OutputSink::open
fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
