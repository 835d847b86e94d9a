use serde::{Deserialize, Serialize};
use crate::{Point, Snake};

/// Board snapshot produced by the engine once per turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameTick {
    pub turn: i64,
    pub food: Vec<Point>,
    pub snakes: Vec<Snake>,
}

impl GameTick {
    pub fn alive_count(&self) -> usize {
        self.snakes.iter().filter(|s| s.is_alive()).count()
    }
}
