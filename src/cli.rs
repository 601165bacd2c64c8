use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "whitted")]
#[command(about = "Batched Whitted-style ray tracer")]
pub struct Args {
    /// Scene description in TOML; renders the built-in blood moon scene when absent
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels (overrides the scene file)
    #[arg(long)]
    pub width: Option<usize>,

    /// Image height in pixels (overrides the scene file)
    #[arg(long)]
    pub height: Option<usize>,

    /// Number of mirror bounces (overrides the scene file)
    #[arg(long, short = 'd')]
    pub max_depth: Option<usize>,

    /// Pixel rows traced together in one parallel tile
    #[arg(long, default_value = "16")]
    pub tile_rows: usize,

    /// Trace the whole image as a single batch on one thread
    #[arg(long)]
    pub sequential: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "blood_moon.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,
}
