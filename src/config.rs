use clap::{Parser, ValueEnum};
use log::LevelFilter;
use stopwatch_core::DEFAULT_SAMPLE_INTERVAL_MS;

#[derive(Parser, Debug)]
#[command(name = "stopwatch", about = "Terminal stopwatch with lap splits", version)]
pub struct Args {
    #[arg(
        long = "interval-ms",
        default_value_t = DEFAULT_SAMPLE_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "How often elapsed time is re-sampled while running"
    )]
    pub interval_ms: u64,

    #[arg(
        long = "refresh-ms",
        default_value_t = 100,
        help = "Minimum period between live display refreshes"
    )]
    pub refresh_ms: u64,

    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["stopwatch"]).unwrap();
        assert_eq!(args.interval_ms, 10);
        assert_eq!(args.refresh_ms, 100);
        assert_eq!(args.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "stopwatch",
            "--interval-ms",
            "25",
            "--refresh-ms",
            "0",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.interval_ms, 25);
        assert_eq!(args.refresh_ms, 0);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Args::try_parse_from(["stopwatch", "--interval-ms", "0"]).is_err());
    }
}
