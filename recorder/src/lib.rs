pub mod config;
pub mod replay;

pub use config::{ConfigError, RecorderConfig};
pub use replay::{write_game_info, write_tick, FileSink, MemorySink, RecordSink};
