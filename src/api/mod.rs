use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde_json::json;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{debug, error, info, warn, Span};

use crate::{
    catalog::Connector,
    handler::{Event, Handler, Reply},
};

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or_else(|_| {
            warn!("handler replied with bogus status {}", self.status_code);
            StatusCode::INTERNAL_SERVER_ERROR
        });
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        for (name, value) in self.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => warn!("dropping unrepresentable header {name}: {value}"),
            }
        }
        response
    }
}

// stands in for the gateway: one HTTP request in, one invocation
async fn invoke<C: Connector + 'static>(
    State(handler): State<Arc<Handler<C>>>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.to_string(), value.to_string()))
        })
        .collect();
    let event = Event {
        http_method: Some(method.to_string()),
        query_string_parameters: Some(query),
        headers: Some(headers),
        body: (!body.is_empty()).then_some(body),
        is_base64_encoded: false,
    };

    match handler.handle(event).await {
        Ok(reply) => reply.into_response(),
        Err(e) => {
            error!("invocation failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response()
        }
    }
}

pub fn router<C: Connector + 'static>(handler: Arc<Handler<C>>) -> Router {
    Router::new()
        .route("/", any(invoke::<C>))
        .with_state(handler)
        .layer(
            TraceLayer::new_for_http()
                .on_request(|req: &Request<Body>, _span: &Span| {
                    debug!("{} {}", req.method(), req.uri());
                })
                .on_response(|response: &Response, latency: Duration, _span: &Span| {
                    debug!("{} in {latency:?}", response.status());
                })
                .on_failure(
                    |error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                        error!("{error:?}");
                    },
                ),
        )
}

pub async fn serve<C: Connector + 'static>(
    handler: Arc<Handler<C>>,
    addr: impl AsRef<str>,
) -> std::io::Result<()> {
    let app = router(handler);

    let listener = tokio::net::TcpListener::bind(addr.as_ref()).await?;
    info!("Running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("cannot listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
