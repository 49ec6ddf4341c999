//! Database seeding.
//!
//! A run ensures the schema and inserts every fixture collection inside one
//! transaction. Each collection goes to the database in multi-row batches;
//! a failed batch fails the whole run and nothing is committed.

use std::{fmt, str::FromStr};

use placeholder_data::{Customer, Invoice, Revenue, User};
use rayon::prelude::*;
use sqlx::{Connection, PgConnection, Postgres, QueryBuilder};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    config::Config,
    password::{PasswordError, PasswordHashConfig, hash_password},
    schema,
    store::Store,
};

/// The fixture collection a failed insert belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Users => "users",
            Entity::Customers => "customers",
            Entity::Invoices => "invoices",
            Entity::Revenue => "revenue",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("Failed to insert {entity}: {source}")]
    Insert {
        entity: Entity,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to hash password: {0}")]
    Hash(#[from] PasswordError),

    #[error("Password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),

    #[error("Failed to commit seed transaction: {0}")]
    Commit(#[source] sqlx::Error),
}

/// How invoice inserts treat rows that are already present.
///
/// Invoice ids are generated by the database, so a conflict on `id` can never
/// happen and [`InvoiceConflict::GeneratedId`] appends a fresh copy of every
/// fixture invoice on each run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvoiceConflict {
    /// `ON CONFLICT (id) DO NOTHING` on the generated id.
    #[default]
    GeneratedId,
    /// Skip an invoice when one with the same customer, amount, status and date exists.
    NaturalKey,
}

impl FromStr for InvoiceConflict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generated-id" => Ok(Self::GeneratedId),
            "natural-key" => Ok(Self::NaturalKey),
            other => Err(format!(
                "unknown invoice conflict policy '{other}', expected generated-id or natural-key"
            )),
        }
    }
}

/// The records a run inserts.
#[derive(Debug, Clone, Copy)]
pub struct Fixtures {
    pub users: &'static [User],
    pub customers: &'static [Customer],
    pub invoices: &'static [Invoice],
    pub revenue: &'static [Revenue],
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            users: placeholder_data::USERS,
            customers: placeholder_data::CUSTOMERS,
            invoices: placeholder_data::INVOICES,
            revenue: placeholder_data::REVENUE,
        }
    }
}

/// Rows actually inserted by a run. Skipped conflicts are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

/// Rows per insert statement. Four binds per row keeps a batch far below
/// PostgreSQL's 65535 bind parameter limit.
const DEFAULT_BATCH_SIZE: usize = 1000;

/// Seeds the dashboard database with fixture data.
#[derive(Debug, Clone)]
pub struct Seeder {
    store: Store,
    batch_size: usize,
    password_hashing: PasswordHashConfig,
    invoice_conflict: InvoiceConflict,
    fixtures: Fixtures,
}

impl Seeder {
    /// Creates a seeder for the placeholder fixtures with default hashing cost.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            batch_size: DEFAULT_BATCH_SIZE,
            password_hashing: PasswordHashConfig::default(),
            invoice_conflict: InvoiceConflict::default(),
            fixtures: Fixtures::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Store::new(config.connect_options.clone()))
            .with_password_hashing(config.password_hashing.clone())
            .with_invoice_conflict(config.invoice_conflict)
    }

    /// Sets the number of rows sent per insert statement. Zero is treated as one.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    pub fn with_password_hashing(mut self, config: PasswordHashConfig) -> Self {
        self.password_hashing = config;
        self
    }

    pub fn with_invoice_conflict(mut self, policy: InvoiceConflict) -> Self {
        self.invoice_conflict = policy;
        self
    }

    pub fn with_fixtures(mut self, fixtures: Fixtures) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// Ensures the schema and inserts all fixtures in one transaction.
    ///
    /// Opens a dedicated connection for the run and closes it afterwards. On
    /// error the transaction is rolled back and nothing is committed.
    pub async fn seed(&self) -> Result<SeedReport, SeedError> {
        let mut conn = self.store.open().await.map_err(SeedError::Connect)?;

        let result = self.seed_in_transaction(&mut conn).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {e}");
        }

        result
    }

    async fn seed_in_transaction(&self, conn: &mut PgConnection) -> Result<SeedReport, SeedError> {
        let mut tx = conn.begin().await.map_err(SeedError::Connect)?;

        match self.run_steps(&mut tx).await {
            Ok(report) => {
                tx.commit().await.map_err(SeedError::Commit)?;
                Ok(report)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    warn!("Rollback after failed seed also failed: {rollback}");
                }
                Err(e)
            }
        }
    }

    async fn run_steps(&self, conn: &mut PgConnection) -> Result<SeedReport, SeedError> {
        schema::ensure_extension(conn)
            .await
            .map_err(SeedError::Schema)?;
        schema::ensure_tables(conn).await.map_err(SeedError::Schema)?;

        Ok(SeedReport {
            users: self.seed_users(conn).await?,
            customers: self.seed_customers(conn).await?,
            invoices: self.seed_invoices(conn).await?,
            revenue: self.seed_revenue(conn).await?,
        })
    }

    /// Seeds users, hashing every password before anything is sent.
    async fn seed_users(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        let users = self.fixtures.users;
        if users.is_empty() {
            return Ok(0);
        }
        info!("Seeding {} users...", users.len());

        let hashes = hash_passwords(self.password_hashing.clone(), users).await?;

        let mut inserted = 0;
        for (chunk, hashes) in users
            .chunks(self.batch_size)
            .zip(hashes.chunks(self.batch_size))
        {
            let mut query =
                QueryBuilder::<Postgres>::new("INSERT INTO users (id, name, email, password) ");
            query.push_values(chunk.iter().zip(hashes), |mut row, (user, hash)| {
                row.push_bind(user.id)
                    .push_bind(user.name)
                    .push_bind(user.email)
                    .push_bind(hash.as_str());
            });
            query.push(" ON CONFLICT (id) DO NOTHING");
            inserted += execute(query, conn, Entity::Users).await?;
        }

        info!("Seeded {inserted} of {} users", users.len());
        Ok(inserted)
    }

    async fn seed_customers(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        let customers = self.fixtures.customers;
        if customers.is_empty() {
            return Ok(0);
        }
        info!("Seeding {} customers...", customers.len());

        let mut inserted = 0;
        for chunk in customers.chunks(self.batch_size) {
            let mut query =
                QueryBuilder::<Postgres>::new("INSERT INTO customers (id, name, email, image_url) ");
            query.push_values(chunk, |mut row, customer| {
                row.push_bind(customer.id)
                    .push_bind(customer.name)
                    .push_bind(customer.email)
                    .push_bind(customer.image_url);
            });
            query.push(" ON CONFLICT (id) DO NOTHING");
            inserted += execute(query, conn, Entity::Customers).await?;
        }

        info!("Seeded {inserted} of {} customers", customers.len());
        Ok(inserted)
    }

    async fn seed_invoices(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        let invoices = self.fixtures.invoices;
        if invoices.is_empty() {
            return Ok(0);
        }
        info!("Seeding {} invoices...", invoices.len());
        if self.invoice_conflict == InvoiceConflict::GeneratedId {
            warn!("Invoice ids are generated on insert; re-running appends duplicate invoices");
        }

        let mut inserted = 0;
        for chunk in invoices.chunks(self.batch_size) {
            let query = invoice_query(self.invoice_conflict, chunk);
            inserted += execute(query, conn, Entity::Invoices).await?;
        }

        info!("Seeded {inserted} of {} invoices", invoices.len());
        Ok(inserted)
    }

    async fn seed_revenue(&self, conn: &mut PgConnection) -> Result<u64, SeedError> {
        let revenue = self.fixtures.revenue;
        if revenue.is_empty() {
            return Ok(0);
        }
        info!("Seeding {} revenue months...", revenue.len());

        let mut inserted = 0;
        for chunk in revenue.chunks(self.batch_size) {
            let mut query = QueryBuilder::<Postgres>::new("INSERT INTO revenue (month, revenue) ");
            query.push_values(chunk, |mut row, rev| {
                row.push_bind(rev.month).push_bind(rev.revenue);
            });
            query.push(" ON CONFLICT (month) DO NOTHING");
            inserted += execute(query, conn, Entity::Revenue).await?;
        }

        info!("Seeded {inserted} of {} revenue months", revenue.len());
        Ok(inserted)
    }
}

/// Builds one insert statement for a batch of invoices under `policy`.
fn invoice_query(
    policy: InvoiceConflict,
    invoices: &'static [Invoice],
) -> QueryBuilder<'static, Postgres> {
    match policy {
        InvoiceConflict::GeneratedId => {
            let mut query =
                QueryBuilder::new("INSERT INTO invoices (customer_id, amount, status, date) ");
            push_invoice_values(&mut query, invoices);
            query.push(" ON CONFLICT (id) DO NOTHING");
            query
        }
        InvoiceConflict::NaturalKey => {
            let mut query = QueryBuilder::new(
                "INSERT INTO invoices (customer_id, amount, status, date) \
                 SELECT v.customer_id, v.amount, v.status, v.date FROM (",
            );
            push_invoice_values(&mut query, invoices);
            query.push(
                ") AS v (customer_id, amount, status, date) \
                 WHERE NOT EXISTS ( \
                    SELECT 1 FROM invoices i \
                    WHERE i.customer_id = v.customer_id \
                      AND i.amount = v.amount \
                      AND i.status = v.status \
                      AND i.date = v.date \
                 )",
            );
            query
        }
    }
}

fn push_invoice_values(query: &mut QueryBuilder<'_, Postgres>, invoices: &'static [Invoice]) {
    query.push_values(invoices, |mut row, invoice| {
        row.push_bind(invoice.customer_id)
            .push_bind(invoice.amount)
            .push_bind(invoice.status.as_str())
            .push_bind(invoice.date);
    });
}

async fn execute(
    mut query: QueryBuilder<'_, Postgres>,
    conn: &mut PgConnection,
    entity: Entity,
) -> Result<u64, SeedError> {
    let result = query
        .build()
        .execute(&mut *conn)
        .await
        .map_err(|source| SeedError::Insert { entity, source })?;
    Ok(result.rows_affected())
}

/// Hashes all fixture passwords in parallel on the rayon pool, preserving order.
async fn hash_passwords(
    config: PasswordHashConfig,
    users: &'static [User],
) -> Result<Vec<String>, SeedError> {
    let hashes = tokio::task::spawn_blocking(move || {
        users
            .par_iter()
            .map(|user| hash_password(&config, user.password))
            .collect::<Result<Vec<_>, _>>()
    })
    .await??;
    Ok(hashes)
}
