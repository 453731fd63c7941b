use clap::{Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Parses `SUPERHEROES_LOG_LEVEL`, either a level name or a verbosity count (0-5).
fn parse_log_level(value: &str) -> Result<u8, String> {
    let value = value.trim();

    if let Ok(count) = value.parse::<u8>() {
        return if count <= 5 {
            Ok(count)
        } else {
            Err(format!("verbosity {count} is out of range (0-5)"))
        };
    }

    LEVEL_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(value))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            format!(
                "unknown log level `{value}`, expected one of: {}",
                LEVEL_NAMES.join(", ")
            )
        })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Repeat for more output, or set a level name (default: error)")
            .env("SUPERHEROES_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(parse_log_level),
    )
}
