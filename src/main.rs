use std::sync::Arc;

use catalogue::{
    api::serve,
    catalog::{migration::Migrator, Connector, UrlConnector},
    config::Config,
    handler::Handler,
    options,
};
use clap::Parser;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = options::Args::parse();
    debug!("{args:?}");

    let config = Config::new(args.config)?;
    let connector = UrlConnector::new(&config.database_url);

    if args.migrate || config.system.migrate {
        info!("applying migrations");
        let db = connector.connect().await?;
        Migrator::up(&db, None).await?;
        connector.release(db).await?;
    }

    let addr = args.address.unwrap_or(config.system.bind_addr);
    serve(Arc::new(Handler::new(connector)), addr).await?;
    Ok(())
}
