use crate::cli::{
    actions::{Action, seed, server},
    telemetry,
};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    let result = match action {
        Action::Server(args) => server::execute(args).await,
        Action::Seed(args) => seed::execute(args).await,
    };

    telemetry::shutdown_tracer();

    result
}
