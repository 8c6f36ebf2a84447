//! Web Form Adapter
//!
//! Serves the order form via axum 0.7 and routes submissions to the
//! order submitter. Outcomes travel back to the form as a one-shot
//! flash message in the redirect URL.
//!
//! Sub-modules:
//! - `page`: HTML rendering and escaping
//! - `routes`: Router and handlers

pub mod page;
pub mod routes;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::ports::exchange::FuturesExchange;
use crate::usecases::order_submitter::OrderSubmitter;

pub use routes::build_router;

/// Serve the order form until the shutdown future resolves.
pub async fn serve<E, F>(
    submitter: Arc<OrderSubmitter<E>>,
    bind_address: &str,
    shutdown: F,
) -> anyhow::Result<()>
where
    E: FuturesExchange,
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_router(submitter);
    let listener = TcpListener::bind(bind_address).await?;

    info!(address = %bind_address, "Order form server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
