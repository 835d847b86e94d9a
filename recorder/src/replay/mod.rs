use serde::{Deserialize, Serialize};

use common::{Death, Game, GameTick, Point, Snake};

pub mod directory;
mod sink;
mod writer;

pub use sink::{FileSink, MemorySink, RecordSink};
pub use writer::{write_game_info, write_tick};

/// First line of a game record: match metadata and the starting roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: String,
    pub width: i64,
    pub height: i64,
    pub snakes: Vec<SnakeInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeInfo {
    pub id: String,
    pub name: String,
    pub url: String,
    pub color: String,
}

/// One line per turn after the game info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub turn: i64,
    pub food: Vec<FramePoint>,
    pub snakes: Vec<SnakeFrame>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeFrame {
    pub id: String,
    pub body: Vec<FramePoint>,
    pub health: i64,
    // Absent rather than null so readers can test for presence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<DeathInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramePoint {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathInfo {
    pub cause: String,
    pub turn: i64,
}

impl GameInfo {
    pub fn new(game: &Game, snakes: &[Snake]) -> Self {
        Self {
            id: game.id.clone(),
            width: game.width,
            height: game.height,
            snakes: snakes.iter().map(SnakeInfo::from).collect(),
        }
    }
}

impl From<&Snake> for SnakeInfo {
    fn from(snake: &Snake) -> Self {
        Self {
            id: snake.id.clone(),
            name: snake.name.clone(),
            url: snake.url.clone(),
            color: snake.color.clone(),
        }
    }
}

impl From<&GameTick> for Frame {
    fn from(tick: &GameTick) -> Self {
        Self {
            turn: tick.turn,
            food: tick.food.iter().map(FramePoint::from).collect(),
            snakes: tick.snakes.iter().map(SnakeFrame::from).collect(),
        }
    }
}

impl From<&Snake> for SnakeFrame {
    fn from(snake: &Snake) -> Self {
        Self {
            id: snake.id.clone(),
            body: snake.body.iter().map(FramePoint::from).collect(),
            health: snake.health,
            death: snake.death.as_ref().map(DeathInfo::from),
        }
    }
}

impl From<&Point> for FramePoint {
    fn from(point: &Point) -> Self {
        Self { x: point.x, y: point.y }
    }
}

impl From<&Death> for DeathInfo {
    fn from(death: &Death) -> Self {
        Self {
            cause: death.cause.clone(),
            turn: death.turn,
        }
    }
}
