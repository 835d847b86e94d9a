use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::directory;
use crate::RecorderConfig;

/// Append-only destination for serialized records.
///
/// The writers only ever call [`RecordSink::append`]. Closing is left to
/// whoever opened the sink.
pub trait RecordSink {
    fn append(&mut self, text: &str) -> io::Result<usize>;

    fn release(&mut self) -> io::Result<()>;
}

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "record sink has been released")
}

/// Sink backed by a file opened in append mode.
///
/// Callers must `release()` the sink when done. Dropping it unreleased
/// flushes any buffered records but discards a flush error.
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    flush_each_record: bool,
}

impl FileSink {
    pub fn open(path: &Path, flush_each_record: bool) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        debug!("Opened record sink at {:?}", path);
        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
            flush_each_record,
        })
    }

    /// Open `<replay_dir>/<game_id>.jsonl`, creating the directory if needed.
    pub fn open_for_game(config: &RecorderConfig, game_id: &str) -> Result<Self> {
        directory::ensure_record_directory(&config.replay_dir)?;
        let path = directory::record_path(&config.replay_dir, game_id)?;
        Self::open(&path, config.flush_each_record)
            .with_context(|| format!("Failed to open record file: {:?}", path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_released(&self) -> bool {
        self.writer.is_none()
    }
}

impl RecordSink for FileSink {
    fn append(&mut self, text: &str) -> io::Result<usize> {
        let writer = self.writer.as_mut().ok_or_else(closed_error)?;
        writer.write_all(text.as_bytes())?;
        if self.flush_each_record {
            writer.flush()?;
        }
        Ok(text.len())
    }

    fn release(&mut self) -> io::Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
            debug!("Released record sink at {:?}", self.path);
        }
        Ok(())
    }
}

/// In-memory sink, mostly useful for tests and for buffering a record
/// before handing it to another transport.
#[derive(Debug, Default)]
pub struct MemorySink {
    text: String,
    closed: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl RecordSink for MemorySink {
    fn append(&mut self, text: &str) -> io::Result<usize> {
        if self.closed {
            return Err(closed_error());
        }
        self.text.push_str(text);
        Ok(text.len())
    }

    fn release(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}
