//! JSON Lines display: one serialized `GameEvent` per line.

use std::io::{self, Write};

use super::{GameEvent, GameObserver};

/// Writes each event as a single line of JSON.
///
/// Like [`super::ConsoleDisplay`], the first error stops output and is
/// reported by [`JsonLinesDisplay::finish`].
pub struct JsonLinesDisplay<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and hand back the writer, or the first error hit.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)
    }
}

impl<W: Write> GameObserver for JsonLinesDisplay<W> {
    fn notify(&mut self, event: &GameEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_event(event) {
            self.error = Some(err);
        }
    }
}
