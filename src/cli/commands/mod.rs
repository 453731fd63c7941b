pub mod logging;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_PORT: &str = "port";
pub const ARG_DSN: &str = "dsn";
pub const ARG_MAX_CONNECTIONS: &str = "max-connections";
pub const CMD_SEED: &str = "seed";
pub const ARG_RESET: &str = "reset";

pub const DEFAULT_DSN: &str = "sqlite://app.db?mode=rwc";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("superheroes")
        .about("Heroes, powers and the links between them")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("5550")
                .env("SUPERHEROES_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_DSN)
                .short('d')
                .long("dsn")
                .help("Database connection string")
                .long_help(
                    "SQLite connection string. The database file is created if it does not exist.",
                )
                .default_value(DEFAULT_DSN)
                .env("SUPERHEROES_DSN")
                .global(true),
        )
        .arg(
            Arg::new(ARG_MAX_CONNECTIONS)
                .long("max-connections")
                .help("Maximum number of pooled database connections")
                .default_value("5")
                .env("SUPERHEROES_MAX_CONNECTIONS")
                .global(true)
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .subcommand(
            Command::new(CMD_SEED)
                .about("Populate the database with sample heroes and powers")
                .arg(
                    Arg::new(ARG_RESET)
                        .long("reset")
                        .help("Delete existing records before seeding")
                        .action(ArgAction::SetTrue),
                ),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "superheroes");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Heroes, powers and the links between them".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("SUPERHEROES_PORT", None::<&str>),
                ("SUPERHEROES_DSN", None),
                ("SUPERHEROES_MAX_CONNECTIONS", None),
                ("SUPERHEROES_LOG_LEVEL", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["superheroes"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(5550));
                assert_eq!(
                    matches.get_one::<String>(ARG_DSN).cloned(),
                    Some(DEFAULT_DSN.to_string())
                );
                assert_eq!(matches.get_one::<u32>(ARG_MAX_CONNECTIONS).copied(), Some(5));
                assert!(matches.subcommand().is_none());
            },
        );
    }

    #[test]
    fn test_check_port_and_dsn() {
        temp_env::with_var_unset("SUPERHEROES_LOG_LEVEL", || {
            let matches = new().get_matches_from(vec![
                "superheroes",
                "--port",
                "8080",
                "--dsn",
                "sqlite://heroes.db",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
            assert_eq!(
                matches.get_one::<String>(ARG_DSN).cloned(),
                Some("sqlite://heroes.db".to_string())
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("SUPERHEROES_PORT", Some("443")),
                ("SUPERHEROES_DSN", Some("sqlite::memory:")),
                ("SUPERHEROES_MAX_CONNECTIONS", Some("2")),
                ("SUPERHEROES_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["superheroes"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_DSN).cloned(),
                    Some("sqlite::memory:".to_string())
                );
                assert_eq!(matches.get_one::<u32>(ARG_MAX_CONNECTIONS).copied(), Some(2));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_zero_connections_rejected() {
        temp_env::with_var_unset("SUPERHEROES_LOG_LEVEL", || {
            let result =
                new().try_get_matches_from(vec!["superheroes", "--max-connections", "0"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_seed_subcommand() {
        temp_env::with_var_unset("SUPERHEROES_LOG_LEVEL", || {
            let matches = new().get_matches_from(vec![
                "superheroes",
                "seed",
                "--reset",
                "--dsn",
                "sqlite://seed.db",
            ]);
            let Some((name, sub)) = matches.subcommand() else {
                panic!("expected a subcommand");
            };
            assert_eq!(name, CMD_SEED);
            assert!(sub.get_flag(ARG_RESET));
            assert_eq!(
                sub.get_one::<String>(ARG_DSN).cloned(),
                Some("sqlite://seed.db".to_string())
            );
        });
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("SUPERHEROES_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["superheroes".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
