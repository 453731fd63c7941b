use crate::roster::{Store, seed};
use anyhow::{Context, Result};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub dsn: String,
    pub max_connections: u32,
    pub reset: bool,
}

/// Execute the seed action.
/// # Errors
/// Returns an error if the database cannot be opened or seeding fails.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Seed args: {:?}", args);

    let store = Store::connect(&args.dsn, args.max_connections).await?;

    let summary = seed::seed(&store, args.reset)
        .await
        .context("Failed to seed database")?;

    println!(
        "Seeded {} heroes, {} powers and {} hero powers",
        summary.heroes, summary.powers, summary.hero_powers
    );

    Ok(())
}
