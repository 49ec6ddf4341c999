use sqlx::{Connection, PgConnection, postgres::PgConnectOptions};

/// Handle to the dashboard database.
///
/// Holds connection options only. Each seeding run opens its own connection
/// through [`Store::open`] and closes it when the run is over, so no connection
/// outlives the work that needed it.
#[derive(Debug, Clone)]
pub struct Store {
    options: PgConnectOptions,
}

impl Store {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    pub async fn open(&self) -> Result<PgConnection, sqlx::Error> {
        tracing::debug!(
            host = self.options.get_host(),
            port = self.options.get_port(),
            "Opening store connection"
        );
        PgConnection::connect_with(&self.options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgSslMode;

    #[tokio::test]
    async fn test_open_unreachable_store_fails() {
        let options = PgConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .username("nobody")
            .database("nothing")
            .ssl_mode(PgSslMode::Require);
        let store = Store::new(options);

        assert!(store.open().await.is_err());
    }
}
