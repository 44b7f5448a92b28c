//! Observer HTTP server lifecycle.

use std::net::SocketAddr;

use tracing::info;

use crate::router::build_router;
use crate::state::AppState;
use crate::{ObserverError, ObserverResult};

/// Bind `addr` and serve the observer API until the process exits.
///
/// The simulation loop runs on its own thread; this only serves reads, so
/// shutting the process down is the supported way to stop both.
pub async fn serve(state: AppState, addr: SocketAddr) -> ObserverResult<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ObserverError::Bind)?;
    info!("observer API listening on http://{addr}");

    axum::serve(listener, app).await.map_err(ObserverError::Serve)
}
