use std::io;

use serde::Serialize;
use tracing::{trace, warn};

use common::{Game, GameTick, Snake};

use super::{Frame, GameInfo, RecordSink};

/// Write the game info line. The sink's error is returned as-is.
pub fn write_game_info<S: RecordSink + ?Sized>(
    sink: &mut S,
    game: &Game,
    snakes: &[Snake],
) -> io::Result<()> {
    let info = GameInfo::new(game, snakes);
    trace!("Writing game info for {} with {} snakes", game.id, snakes.len());
    write_record(sink, &info)
}

/// Write one frame for `tick`. Dead snakes stay in roster order.
pub fn write_tick<S: RecordSink + ?Sized>(sink: &mut S, tick: &GameTick) -> io::Result<()> {
    let frame = Frame::from(tick);
    trace!("Writing frame for turn {}", tick.turn);
    write_record(sink, &frame)
}

// One record per line, handed to the sink in a single append.
fn write_record<S, T>(sink: &mut S, record: &T) -> io::Result<()>
where
    S: RecordSink + ?Sized,
    T: Serialize,
{
    let mut line = serde_json::to_string(record)?;
    line.push('\n');

    if let Err(e) = sink.append(&line) {
        warn!("Record sink rejected write: {}", e);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySink;
    use common::Point;

    #[test]
    fn test_each_call_writes_exactly_one_line() {
        let mut sink = MemorySink::new();
        let game = Game::new("myid", 10, 15);
        let tick = GameTick { turn: 1, food: vec![Point::new(1, 1)], snakes: vec![] };

        write_game_info(&mut sink, &game, &[]).unwrap();
        write_tick(&mut sink, &tick).unwrap();
        write_tick(&mut sink, &tick).unwrap();

        let lines: Vec<&str> = sink.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], lines[2]);
        assert!(sink.text().ends_with('\n'));
    }

    #[test]
    fn test_empty_roster_writes_empty_array() {
        let mut sink = MemorySink::new();
        write_game_info(&mut sink, &Game::new("empty", 7, 7), &[]).unwrap();

        let info: GameInfo = serde_json::from_str(sink.text().trim_end()).unwrap();
        assert!(info.snakes.is_empty());
    }

    #[test]
    fn test_extreme_dimensions_copied_verbatim() {
        let mut sink = MemorySink::new();
        write_game_info(&mut sink, &Game::new("big", i64::MAX, i64::MIN), &[]).unwrap();

        let info: GameInfo = serde_json::from_str(sink.text().trim_end()).unwrap();
        assert_eq!((info.width, info.height), (i64::MAX, i64::MIN));
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut sink = MemorySink::new();
        let dyn_sink: &mut dyn RecordSink = &mut sink;
        write_tick(dyn_sink, &GameTick::default()).unwrap();
        assert_eq!(sink.text(), "{\"turn\":0,\"food\":[],\"snakes\":[]}\n");
    }
}
