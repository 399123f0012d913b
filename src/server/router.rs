//! HTTP routing, OpenAPI document and cross-cutting layers.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorError, GovernorLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::model::api::ErrorDto;
use crate::server::{
    config::Config,
    controller::{
        attendance, auth, config, favorite, health, photo, review, route, route_call,
    },
    error::{config::ConfigError, AppError},
    state::AppState,
    util::upload::MAX_FILE_SIZE,
};

/// Multipart bodies carry the file plus a few text fields.
const UPLOAD_BODY_LIMIT: usize = MAX_FILE_SIZE + 1024 * 1024;

/// 100 requests per 15 minutes per IP: burst of 100, one token back every 9 seconds.
const GENERAL_REPLENISH_SECS: u64 = 9;
const GENERAL_BURST: u32 = 100;

/// 20 creations per 15 minutes per IP: burst of 20, one token back every 45 seconds.
const CREATION_REPLENISH_SECS: u64 = 45;
const CREATION_BURST: u32 = 20;

const GENERAL_LIMIT_MESSAGE: &str = "Too many requests from this IP, please try again later";
const CREATION_LIMIT_MESSAGE: &str = "Too many creation requests, please slow down";

#[derive(OpenApi)]
#[openapi(
    info(title = "Skate Club API", description = "Routes, route calls and photo gallery of the skating club"),
    modifiers(&BearerSecurity),
    tags(
        (name = health::HEALTH_TAG, description = "Service health"),
        (name = config::CONFIG_TAG, description = "Static form catalogs"),
        (name = auth::AUTH_TAG, description = "Authenticated user"),
        (name = route::ROUTE_TAG, description = "Catalog routes"),
        (name = review::REVIEW_TAG, description = "Route reviews"),
        (name = favorite::FAVORITE_TAG, description = "Favorite routes"),
        (name = route_call::ROUTE_CALL_TAG, description = "Group outings"),
        (name = attendance::ATTENDANCE_TAG, description = "Route call attendance"),
        (name = photo::PHOTO_TAG, description = "Photo gallery"),
    )
)]
struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Default::default)
            .add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
    }
}

/// Builds the application router.
///
/// All `/api` routes share a per-IP rate limit; route call and photo creation have a stricter
/// one on top. Swagger UI is served under `/api-docs`.
///
/// # Returns
/// - `Ok(Router)` - Router ready to serve
/// - `Err(AppError::ConfigErr)` - `FRONTEND_URL` is not a valid header value
pub fn router(state: AppState, app_config: &Config) -> Result<Router, AppError> {
    let general_limit = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(GENERAL_REPLENISH_SECS)
            .burst_size(GENERAL_BURST)
            .finish()
            .ok_or_else(invalid_rate_limit)?,
    );
    let creation_limit = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(CREATION_REPLENISH_SECS)
            .burst_size(CREATION_BURST)
            .finish()
            .ok_or_else(invalid_rate_limit)?,
    );

    let general_limiter = general_limit.limiter().clone();
    spawn_limiter_cleanup(move || general_limiter.retain_recent());
    let creation_limiter = creation_limit.limiter().clone();
    spawn_limiter_cleanup(move || creation_limiter.retain_recent());

    let creation = OpenApiRouter::new()
        .routes(routes!(route_call::create_route_call))
        .routes(routes!(photo::upload_photo))
        .layer(
            GovernorLayer::new(creation_limit).error_handler(rate_limited(CREATION_LIMIT_MESSAGE)),
        );

    let uploads = OpenApiRouter::new()
        .routes(routes!(photo::update_cover_photo))
        .merge(creation)
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    let api = OpenApiRouter::new()
        .routes(routes!(config::get_config))
        .routes(routes!(auth::get_me))
        .routes(routes!(route::get_routes))
        .routes(routes!(route::get_route))
        .routes(routes!(review::get_route_reviews, review::create_review))
        .routes(routes!(review::update_review, review::delete_review))
        .routes(routes!(favorite::add_favorite, favorite::remove_favorite))
        .routes(routes!(favorite::get_my_favorites))
        .routes(routes!(favorite::check_favorite))
        .routes(routes!(route_call::get_route_calls))
        .routes(routes!(
            route_call::get_route_call,
            route_call::update_route_call,
            route_call::delete_route_call
        ))
        .routes(routes!(route_call::cancel_route_call))
        .routes(routes!(
            attendance::attend,
            attendance::cancel_attendance,
            attendance::get_route_call_attendances
        ))
        .routes(routes!(attendance::get_my_attendances))
        .routes(routes!(photo::get_photos))
        .routes(routes!(photo::get_route_gallery))
        .routes(routes!(photo::get_route_call_gallery))
        .routes(routes!(photo::get_my_photos))
        .routes(routes!(photo::get_pending_photos))
        .routes(routes!(photo::approve_photo))
        .routes(routes!(photo::reject_photo))
        .routes(routes!(photo::delete_photo))
        .merge(uploads)
        .layer(
            GovernorLayer::new(general_limit).error_handler(rate_limited(GENERAL_LIMIT_MESSAGE)),
        );

    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .merge(api)
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", openapi))
        .fallback(not_found)
        .layer(cors(&app_config.frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

fn invalid_rate_limit() -> ConfigError {
    ConfigError::InvalidValue {
        name: "rate limit".to_string(),
        reason: "period and burst size must be non-zero".to_string(),
    }
}

/// Answers a tripped rate limit with the JSON error envelope, keeping the limiter's
/// `retry-after` headers.
fn rate_limited(message: &'static str) -> impl Fn(GovernorError) -> Response + Send + Sync + 'static {
    move |error| match error {
        GovernorError::TooManyRequests { headers, .. } => {
            let mut response =
                (StatusCode::TOO_MANY_REQUESTS, Json(ErrorDto::new(message))).into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        other => {
            tracing::error!("Rate limiter failed: {}", other);
            other.into()
        }
    }
}

/// Periodically drops limiter state of clients that have not been seen recently.
fn spawn_limiter_cleanup(retain_recent: impl Fn() + Send + 'static) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            retain_recent();
        }
    });
}

fn cors(frontend_url: &str) -> Result<CorsLayer, AppError> {
    let origin = frontend_url
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidValue {
            name: "FRONTEND_URL".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]))
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "error": "Route not found",
            "path": uri.path(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn rate_limit_answers_with_error_envelope() {
        let response = rate_limited(CREATION_LIMIT_MESSAGE)(GovernorError::TooManyRequests {
            wait_time: 45,
            headers: None,
        });

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": "Too many creation requests, please slow down",
            })
        );
    }

    #[tokio::test]
    async fn key_extraction_failure_stays_internal_error() {
        let response = rate_limited(GENERAL_LIMIT_MESSAGE)(GovernorError::UnableToExtractKey);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
