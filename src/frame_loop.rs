//! Line-oriented request/response loop.
//!
//! Reads one cursor record per line, advances the engine, and writes at most
//! one render instruction per record. Every written record is flushed before
//! the next line is read. Reading is the only place the loop blocks.

use crate::engine::EffectEngine;
use crate::error::FrameError;
use serde::Deserialize;
use std::io::{self, BufRead, ErrorKind, Write};
use tracing::{debug, info, trace};

/// One cursor sample from the host. Missing coordinates default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct CursorEvent {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl CursorEvent {
    /// Decode a single trimmed line.
    pub fn decode(line: &str) -> Result<Self, FrameError> {
        if !line.starts_with('{') {
            return Err(FrameError::NotAnObject);
        }
        Ok(serde_json::from_str(line)?)
    }
}

/// Counters collected over one run of the loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Lines received, including blank and malformed ones.
    pub lines_read: u64,
    /// Records that reached [`EffectEngine::advance`].
    pub frames_applied: u64,
    pub lines_skipped: u64,
    /// Render instructions written to the host.
    pub records_written: u64,
}

/// Drives an [`EffectEngine`] from a line reader into a writer.
pub struct FrameLoop<R, W> {
    reader: R,
    writer: W,
    engine: EffectEngine,
    stats: LoopStats,
}

impl<R: BufRead, W: Write> FrameLoop<R, W> {
    pub fn new(reader: R, writer: W, engine: EffectEngine) -> Self {
        Self {
            reader,
            writer,
            engine,
            stats: LoopStats::default(),
        }
    }

    pub fn engine(&self) -> &EffectEngine {
        &self.engine
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run until end of input.
    ///
    /// End of stream, an interrupted read and a closed output pipe all end
    /// the loop normally. Other I/O errors are returned.
    pub fn run(&mut self) -> io::Result<LoopStats> {
        debug!(kind = %self.engine.kind(), "frame loop started");

        let mut buf = Vec::with_capacity(128);
        loop {
            buf.clear();
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    debug!("input closed");
                    break;
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    debug!("input interrupted");
                    break;
                }
                Err(e) => return Err(e),
            }
            self.stats.lines_read += 1;

            let line = String::from_utf8_lossy(&buf);
            match self.step(line.trim()) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("output closed by host");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            lines_read = self.stats.lines_read,
            frames_applied = self.stats.frames_applied,
            lines_skipped = self.stats.lines_skipped,
            records_written = self.stats.records_written,
            "frame loop finished"
        );
        Ok(self.stats)
    }

    /// Handle one trimmed input line.
    fn step(&mut self, line: &str) -> io::Result<()> {
        let event = match CursorEvent::decode(line) {
            Ok(event) => event,
            Err(e) => {
                trace!(error = %e, line, "skipping input line");
                self.stats.lines_skipped += 1;
                return Ok(());
            }
        };

        let instruction = self.engine.advance(event.x, event.y);
        self.stats.frames_applied += 1;
        if !instruction.is_drawable() {
            return Ok(());
        }

        // Whole record in a single write.
        let record = instruction.to_line().map_err(io::Error::other)?;
        self.writer.write_all(&record)?;
        self.writer.flush()?;
        self.stats.records_written += 1;
        Ok(())
    }
}
