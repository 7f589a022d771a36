/*
Terminal logging for polynomial tasks. The library only emits records through the `log` macros,
the binary decides the level and installs a simplelog terminal logger once.
*/
use crate::error::PolyError;
use simplelog::*;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(level: &str) -> Result<Self, PolyError> {
        LogLevel::from_str(level.trim()).map_err(|_| PolyError::LogLevel(level.to_string()))
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Installs the terminal logger. Returns `false` when a logger was already installed,
/// in that case the existing one keeps working and nothing changes.
pub fn init_logger(level: LogLevel) -> bool {
    if level == LogLevel::Off {
        return false;
    }
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        level.to_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    logger_instance.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_log_levels() {
        assert_eq!(LogLevel::parse("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::parse(" DEBUG ").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::parse("off").unwrap(), LogLevel::Off);
        assert!(matches!(
            LogLevel::parse("verbose"),
            Err(PolyError::LogLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for level in LogLevel::iter() {
            assert_eq!(LogLevel::parse(&level.to_string()).unwrap(), level);
        }
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_off_installs_nothing() {
        assert!(!init_logger(LogLevel::Off));
    }
}
