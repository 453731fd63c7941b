//! Map parsed CLI arguments to an action.
//!
//! With no subcommand the server starts; `seed` populates the database.

use crate::cli::actions::{Action, seed, server};
use crate::cli::commands::{ARG_DSN, ARG_MAX_CONNECTIONS, ARG_PORT, ARG_RESET, CMD_SEED};
use anyhow::{Context, Result};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_SEED, sub_m)) => Ok(Action::Seed(seed::Args {
            dsn: dsn(sub_m)?,
            max_connections: max_connections(sub_m),
            reset: sub_m.get_flag(ARG_RESET),
        })),
        _ => Ok(Action::Server(server::Args {
            port: matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(5550),
            dsn: dsn(matches)?,
            max_connections: max_connections(matches),
        })),
    }
}

fn dsn(matches: &clap::ArgMatches) -> Result<String> {
    matches
        .get_one::<String>(ARG_DSN)
        .cloned()
        .context("missing required argument: --dsn")
}

fn max_connections(matches: &clap::ArgMatches) -> u32 {
    matches
        .get_one::<u32>(ARG_MAX_CONNECTIONS)
        .copied()
        .unwrap_or(5)
}
