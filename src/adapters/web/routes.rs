//! Order Form Routes - GET/POST handlers
//!
//! `GET /` renders the form (plus any flash message carried in the
//! query string), `POST /` places the order and redirects back with
//! the outcome, `GET /live` is the liveness probe.

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use url::form_urlencoded;

use super::page::{render_form, Flash, FlashCategory};
use crate::domain::order::OrderInput;
use crate::ports::exchange::FuturesExchange;
use crate::usecases::order_submitter::{OrderResult, OrderSubmitter};

/// Flash message carried across the post/redirect/get round trip.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl FlashQuery {
    fn into_flash(self) -> Option<Flash> {
        let message = self.message.filter(|m| !m.is_empty())?;
        let category = FlashCategory::parse(self.status.as_deref().unwrap_or_default());
        Some(Flash { category, message })
    }
}

/// Build the web router around a shared order submitter.
#[must_use]
pub fn build_router<E: FuturesExchange>(submitter: Arc<OrderSubmitter<E>>) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_order::<E>))
        .route("/live", get(liveness))
        .with_state(submitter)
}

async fn show_form(Query(query): Query<FlashQuery>) -> Html<String> {
    Html(render_form(query.into_flash().as_ref()))
}

async fn submit_order<E: FuturesExchange>(
    State(submitter): State<Arc<OrderSubmitter<E>>>,
    Form(input): Form<OrderInput>,
) -> Redirect {
    let result = submitter.place_order(&input).await;
    Redirect::to(&flash_location(&flash_for(&input, &result)))
}

async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Flash message for an order outcome.
#[must_use]
pub fn flash_for(input: &OrderInput, result: &OrderResult) -> Flash {
    let order_type = input.order_type.trim().to_ascii_uppercase();
    match result {
        Ok(_) => Flash {
            category: FlashCategory::Success,
            message: format!("{order_type} order placed successfully!"),
        },
        Err(e) => Flash {
            category: FlashCategory::Danger,
            message: format!("Failed to place {order_type} order: {}", e.reason()),
        },
    }
}

/// Redirect target carrying the flash message.
#[must_use]
pub fn flash_location(flash: &Flash) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("status", flash.category.as_str())
        .append_pair("message", &flash.message)
        .finish();
    format!("/?{query}")
}
