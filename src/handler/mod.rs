use axum::http::StatusCode;
use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::catalog::{Catalog, Connector};

pub mod event;

pub(crate) mod request;

pub mod route;

pub use event::{Event, Reply};
pub use request::InvalidBody;
pub use route::{Creation, Listing, Route};

/// Faults the handler does not turn into a reply. The runtime deals with
/// these; the connection has already been released by then.
#[derive(Debug, Error)]
pub enum Error {
    #[error("store: {0}")]
    Store(#[from] DbErr),
    #[error("encoding reply: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Runs invocations; each one gets a connection of its own.
pub struct Handler<C> {
    connector: C,
}

impl<C: Connector> Handler<C> {
    pub fn new(connector: C) -> Self {
        Handler { connector }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub async fn handle(&self, event: Event) -> Result<Reply, Error> {
        let path = event.path();
        let route = event
            .method()
            .and_then(|method| Route::resolve(&method, path));
        debug!(
            "{} ?path={path} => {route:?}",
            event.http_method.as_deref().unwrap_or("GET")
        );

        if route == Some(Route::Preflight) {
            return Ok(Reply::preflight());
        }

        let db = self.connector.connect().await?;
        let outcome = dispatch(&db, route, event.body()).await;
        if let Err(e) = self.connector.release(db).await {
            warn!("releasing catalog connection: {e}");
        }

        if let Err(e) = &outcome {
            error!("{route:?} failed: {e}");
        }
        outcome
    }
}

async fn dispatch(
    db: &DatabaseConnection,
    route: Option<Route>,
    body: &str,
) -> Result<Reply, Error> {
    let catalog = Catalog::new(db);
    let reply = match route {
        Some(Route::List(Listing::Albums)) => {
            Reply::json(StatusCode::OK, &catalog.albums().await?)?
        }
        Some(Route::List(Listing::Videos)) => {
            Reply::json(StatusCode::OK, &catalog.videos().await?)?
        }
        Some(Route::List(Listing::Lyrics)) => {
            Reply::json(StatusCode::OK, &catalog.lyrics().await?)?
        }
        Some(Route::Create(kind)) => match request::parse(kind, body) {
            Ok(new) => {
                let created = catalog.create(new).await?;
                info!("created {kind:?} {}", created.id);
                Reply::json(StatusCode::OK, &created)?
            }
            Err(e) => {
                warn!("{kind:?}: {e}");
                Reply::error(StatusCode::BAD_REQUEST, e.to_string())
            }
        },
        Some(Route::Preflight) | None => Reply::invalid_route(),
    };
    Ok(reply)
}
