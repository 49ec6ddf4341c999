//! Idempotent DDL for the dashboard tables.
//!
//! Every statement is `IF NOT EXISTS`; existing tables are never altered.

use sqlx::PgConnection;
use tracing::info;

const CREATE_UUID_EXTENSION: &str = r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )
"#;

const CREATE_INVOICES: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        customer_id UUID NOT NULL,
        amount INT NOT NULL,
        status VARCHAR(255) NOT NULL,
        date DATE NOT NULL
    )
"#;

const CREATE_REVENUE: &str = r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )
"#;

/// Table names paired with their DDL, in creation order.
pub const TABLES: &[(&str, &str)] = &[
    ("users", CREATE_USERS),
    ("customers", CREATE_CUSTOMERS),
    ("invoices", CREATE_INVOICES),
    ("revenue", CREATE_REVENUE),
];

/// Enables `uuid-ossp`, which provides `uuid_generate_v4()` for the id defaults.
pub async fn ensure_extension(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_UUID_EXTENSION).execute(&mut *conn).await?;
    Ok(())
}

pub async fn ensure_tables(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    for &(name, ddl) in TABLES {
        sqlx::query(ddl).execute(&mut *conn).await?;
        info!("Ensured table {name}");
    }
    Ok(())
}
