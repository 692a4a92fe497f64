//! Plain-text table display.

use std::io::{self, Write};

use super::{GameEvent, GameObserver, PassEvent};
use crate::core::{PlayerView, Snapshot};

/// Writes game progress as text.
///
/// ```text
/// ==== Round Start ====
/// Player #1 passes a die to Player #2: New die = 4
/// Player #1 (Points: 1, Dice: [3 5])
/// Player #2 (Points: 0, Dice: [2])
/// ```
///
/// The first write error stops further output and is returned by
/// [`ConsoleDisplay::finish`].
pub struct ConsoleDisplay<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleDisplay<W> {
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
        match event {
            GameEvent::InitialState { state } => {
                writeln!(self.out, "==== Initial State ====")?;
                self.write_table(state)
            }
            GameEvent::RoundStart { .. } => writeln!(self.out, "==== Round Start ===="),
            GameEvent::Pass(pass) => self.write_pass(pass),
            GameEvent::RoundEnd { state } => self.write_table(state),
            GameEvent::GameOver(summary) => {
                writeln!(self.out, "Game Over")?;
                self.write_table(&summary.final_state)
            }
        }
    }

    fn write_pass(&mut self, pass: &PassEvent) -> io::Result<()> {
        writeln!(
            self.out,
            "Player #{} passes a die to Player #{}: New die = {}",
            pass.from.get(),
            pass.to.get(),
            pass.die
        )
    }

    fn write_table(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        for player in &snapshot.players {
            self.write_player(player)?;
        }
        writeln!(self.out)
    }

    fn write_player(&mut self, player: &PlayerView) -> io::Result<()> {
        let dice: Vec<String> = player.dice.iter().map(ToString::to_string).collect();
        writeln!(
            self.out,
            "Player #{} (Points: {}, Dice: [{}])",
            player.id.get(),
            player.score,
            dice.join(" ")
        )
    }
}

impl<W: Write> GameObserver for ConsoleDisplay<W> {
    fn notify(&mut self, event: &GameEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_event(event) {
            self.error = Some(err);
        }
    }
}
