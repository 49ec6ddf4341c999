//! Seeds the dashboard database once and exits.
//!
//! Run with:
//! ```
//! POSTGRES_URL=postgres://... cargo run -p dashboard --bin seed
//! ```

use dashboard::{config::Config, seeder::Seeder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let seeder = Seeder::from_config(&config);

    let report = seeder.seed().await.inspect_err(|e| {
        tracing::error!(error = ?e, "Seeding failed, nothing was committed");
    })?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Users: {}", report.users);
    tracing::info!("  Customers: {}", report.customers);
    tracing::info!("  Invoices: {}", report.invoices);
    tracing::info!("  Revenue months: {}", report.revenue);

    Ok(())
}
