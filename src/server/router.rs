use axum::{
    http::Uri,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        business::{
            deactivate_business, get_business, get_businesses, register_business,
            update_business, validate_business_number,
        },
        docs::openapi,
        server::{get_server_by_name, get_servers},
        user::{
            create_user, delete_user, get_user_by_email, get_user_by_id, get_users, login,
            update_user,
        },
    },
    error::AppError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/servers", get(get_servers))
        .route("/api/servers/name/{name}", get(get_server_by_name))
        .route("/api/users", get(get_users).post(create_user))
        .route("/api/users/id/{id}", get(get_user_by_id))
        .route("/api/users/email", get(get_user_by_email))
        .route("/api/users/login", post(login))
        .route("/api/users/{id}", put(update_user).delete(delete_user))
        .route(
            "/api/businesses",
            get(get_businesses).post(register_business),
        )
        .route(
            "/api/businesses/validate-number",
            post(validate_business_number),
        )
        .route(
            "/api/businesses/{id}",
            get(get_business)
                .put(update_business)
                .delete(deactivate_business),
        )
        .route("/api/openapi.json", get(openapi))
        .fallback(not_found)
}

/// Full application: routes, shared state, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {} not found", uri.path()))
}
