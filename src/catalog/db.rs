use std::future::Future;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::debug;

/// Hands out one store connection per invocation and takes it back.
///
/// Every successful [`Connector::connect`] is paired with exactly one
/// [`Connector::release`], whichever way the invocation ends.
pub trait Connector: Send + Sync {
    fn connect(&self) -> impl Future<Output = Result<DatabaseConnection, DbErr>> + Send;

    fn release(&self, db: DatabaseConnection) -> impl Future<Output = Result<(), DbErr>> + Send {
        async move { db.close().await }
    }
}

/// Opens a fresh single-connection pool from a connection string.
#[derive(Clone, Debug)]
pub struct UrlConnector {
    opts: ConnectOptions,
}

impl UrlConnector {
    pub fn new(url: impl Into<String>) -> Self {
        let mut opts = ConnectOptions::new(url);
        opts.max_connections(1)
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);
        Self { opts }
    }
}

impl Connector for UrlConnector {
    fn connect(&self) -> impl Future<Output = Result<DatabaseConnection, DbErr>> + Send {
        let opts = self.opts.clone();
        async move {
            debug!("opening catalog connection");
            Database::connect(opts).await
        }
    }
}
