mod game;
mod game_state;
mod snake;

pub use game::*;
pub use game_state::*;
pub use snake::*;
