//! HTTP interface
//!
//! Public HTML pages live under `/polls/`; the administrative JSON API under
//! `/admin/`. Anything else is answered with the HTML not-found page.

pub mod actor;
pub mod admin;
pub mod error;
pub mod polls;
pub mod state;
pub mod templates;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, WebError};
pub use state::AppState;
pub use templates::Templates;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(polls::root))
        .route("/polls/", get(polls::index))
        .route("/polls/{id}/", get(polls::detail))
        .route("/polls/{id}/results/", get(polls::results))
        .route("/polls/{id}/vote/", post(polls::vote))
        .route("/admin/questions", post(admin::create_question))
        .route(
            "/admin/questions/{id}",
            get(admin::get_question)
                .put(admin::update_question)
                .delete(admin::delete_question),
        )
        .route("/admin/questions/{id}/choices", post(admin::add_choice))
        .route("/admin/choices/{id}", delete(admin::delete_choice))
        .fallback(|| async { WebError::NotFound })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
