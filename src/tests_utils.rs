use std::{
    future::Future,
    sync::atomic::{AtomicU32, Ordering},
};

use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tempfile::TempDir;

use crate::{
    catalog::{migration::Migrator, Connector, UrlConnector},
    handler::Handler,
};

/// Counts how often the handler takes and gives back a connection.
pub(crate) struct CountingConnector {
    inner: UrlConnector,
    pub(crate) connects: AtomicU32,
    pub(crate) releases: AtomicU32,
}

impl CountingConnector {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        CountingConnector {
            inner: UrlConnector::new(url),
            connects: AtomicU32::new(0),
            releases: AtomicU32::new(0),
        }
    }
}

impl Connector for CountingConnector {
    fn connect(&self) -> impl Future<Output = Result<DatabaseConnection, DbErr>> + Send {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.inner.connect()
    }

    fn release(&self, db: DatabaseConnection) -> impl Future<Output = Result<(), DbErr>> + Send {
        self.releases.fetch_add(1, Ordering::SeqCst);
        self.inner.release(db)
    }
}

fn sqlite_url(dir: &TempDir) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("catalogue.sqlite").display()
    )
}

/// A handler over a migrated, empty SQLite file. Keep the `TempDir` alive.
pub(crate) async fn scratch_handler() -> (TempDir, Handler<CountingConnector>) {
    let dir = tempfile::tempdir().unwrap();
    let url = sqlite_url(&dir);

    let setup = UrlConnector::new(url.clone());
    let db = setup.connect().await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    setup.release(db).await.unwrap();

    (dir, Handler::new(CountingConnector::new(url)))
}

/// A handler over a SQLite file that has none of the catalog tables.
pub(crate) fn unmigrated_handler() -> (TempDir, Handler<CountingConnector>) {
    let dir = tempfile::tempdir().unwrap();
    let url = sqlite_url(&dir);
    (dir, Handler::new(CountingConnector::new(url)))
}
