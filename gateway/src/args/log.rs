use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from the gateway crates
    Error,
    /// Warnings and errors from the gateway crates
    Warn,
    /// Info, warning and error messages from the gateway crates
    #[default]
    Info,
    /// Debug, info, warning and error messages from the gateway crates
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "pokedex_gateway=error,pokedex_server=error,pokeapi_client=error,off",
            LogLevel::Warn => "pokedex_gateway=warn,pokedex_server=warn,pokeapi_client=warn,off",
            LogLevel::Info => "pokedex_gateway=info,pokedex_server=info,pokeapi_client=info,off",
            LogLevel::Debug => "pokedex_gateway=debug,pokedex_server=debug,pokeapi_client=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogStyle {
    /// Human readable lines
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

/// Writes the name clap accepts for the variant, so `default_value_t` and
/// the help text agree with the parser.
fn write_value_name<T: ValueEnum>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.to_possible_value() {
        Some(possible) => f.write_str(possible.get_name()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    use super::*;

    #[test]
    fn every_level_is_a_valid_filter() {
        for level in LogLevel::value_variants() {
            EnvFilter::try_new(level.as_filter_str()).unwrap();
        }
    }

    #[test]
    fn display_matches_cli_value() {
        for level in LogLevel::value_variants() {
            let parsed = LogLevel::from_str(&level.to_string(), false).unwrap();
            assert_eq!(parsed, *level);
        }
    }

    #[test]
    fn style_names() {
        assert_eq!(LogStyle::Text.to_string(), "text");
        assert_eq!(LogStyle::Json.to_string(), "json");
        assert_eq!(LogLevel::default().to_string(), "info");
    }
}
