use crate::{api, roster::Store};
use anyhow::Result;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub max_connections: u32,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database cannot be opened or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Server args: {:?}", args);

    let store = Store::connect(&args.dsn, args.max_connections).await?;

    api::new(args.port, store).await
}
