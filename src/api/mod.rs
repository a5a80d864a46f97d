// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{Credentials, LoginResponse, UserProfile, UserResponse},
    state::AppState,
};

pub mod extract;
pub mod health;
pub mod users;

const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let user_routes = Router::new()
        .route("/user/login", post(users::login))
        .route("/user", get(users::get_current_user))
        .with_state(state);

    Router::new()
        .merge(user_routes)
        .route("/health/live", get(health::liveness))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

#[derive(OpenApi)]
#[openapi(
    paths(users::login, users::get_current_user, health::liveness),
    components(
        schemas(
            Credentials,
            LoginResponse,
            UserProfile,
            UserResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Users", description = "Sign-in and current user"),
        (name = "Health", description = "Liveness check")
    )
)]
struct ApiDoc;
