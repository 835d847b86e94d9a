use serde::{Deserialize, Serialize};

/// Match-level metadata as the engine hands it to the recorder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub status: String,
    pub width: i64,
    pub height: i64,
    /// Milliseconds a snake has to answer a move request.
    pub snake_timeout: i64,
    /// Milliseconds between turns.
    pub turn_timeout: i64,
    pub mode: String,
}

impl Game {
    pub fn new(id: impl Into<String>, width: i64, height: i64) -> Self {
        Game {
            id: id.into(),
            width,
            height,
            ..Default::default()
        }
    }
}
