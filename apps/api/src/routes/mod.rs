pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::extraction::handlers as extraction_handlers;
use crate::session::handlers as session_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session gate
        .route(
            "/api/v1/session/login",
            post(session_handlers::handle_login),
        )
        // Record lifecycle
        .route(
            "/api/v1/record",
            get(session_handlers::handle_get_record)
                .put(session_handlers::handle_put_record)
                .delete(session_handlers::handle_delete_record),
        )
        .route(
            "/api/v1/record/save",
            post(session_handlers::handle_save_record),
        )
        .route(
            "/api/v1/record/extract",
            post(extraction_handlers::handle_extract),
        )
        // Scalar sections
        .route(
            "/api/v1/record/profile",
            put(session_handlers::handle_put_profile),
        )
        .route(
            "/api/v1/record/skills",
            put(session_handlers::handle_put_skills),
        )
        // Collection editor (:collection = experience|education|projects|links)
        .route(
            "/api/v1/record/:collection/items",
            post(session_handlers::handle_append_item),
        )
        .route(
            "/api/v1/record/:collection/items/:index",
            put(session_handlers::handle_update_item),
        )
        .route(
            "/api/v1/record/:collection/items/:index/remove",
            post(session_handlers::handle_arm_removal),
        )
        .route(
            "/api/v1/record/:collection/remove/confirm",
            post(session_handlers::handle_confirm_removal),
        )
        .route(
            "/api/v1/record/:collection/remove/cancel",
            post(session_handlers::handle_cancel_removal),
        )
        .with_state(state)
}
