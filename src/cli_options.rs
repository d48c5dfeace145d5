use clap::{Parser, ValueEnum};
use tetris_stack_core::piece_source::time_seed;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct GameArgs {
    /// Seed for piece generation, defaults to the current time.
    #[arg(long)]
    pub seed: Option<u64>,
    /// How the queue and reserve are dumped after each choice.
    #[arg(long, value_enum, default_value = "text")]
    pub format: DumpFormat,
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DumpFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl GameArgs {
    pub fn seed_or_now(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        use LogLevel::*;
        match level {
            Error => Level::ERROR,
            Warn => Level::WARN,
            Info => Level::INFO,
            Debug => Level::DEBUG,
            Trace => Level::TRACE,
        }
    }
}
