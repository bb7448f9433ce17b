use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{classes, crm_webhook, franchises, health, invites, profiles, students};
use crate::services::{CrmNotifier, StorageClient};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub crm: Arc<CrmNotifier>,
    pub storage: Option<Arc<StorageClient>>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let crm = Arc::new(CrmNotifier::new(config.crm.clone()));
    let storage = StorageClient::from_config(&config.storage).map(Arc::new);

    let state = AppState {
        pool,
        config: config.clone(),
        crm,
        storage,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Dashboard-facing routes (authorization is enforced by row security in
    // the backing database, not here)
    let api_routes = Router::new()
        // Franchise routes (v1)
        .route(
            "/api/v1/franchises",
            post(franchises::create_franchise).get(franchises::list_franchises),
        )
        .route(
            "/api/v1/franchises/:franchise_id",
            get(franchises::get_franchise).patch(franchises::update_franchise),
        )
        // Instructor invite routes (v1)
        .route(
            "/api/v1/franchises/:franchise_id/invites",
            post(invites::create_invite).get(invites::list_invites),
        )
        .route(
            "/api/v1/franchises/:franchise_id/instructors/deactivate",
            post(invites::deactivate_instructor),
        )
        .route(
            "/api/v1/franchises/:franchise_id/instructors/assignable",
            get(invites::list_assignable_instructors),
        )
        // Profile routes (v1)
        .route(
            "/api/v1/franchises/:franchise_id/profiles",
            get(profiles::list_profiles),
        )
        .route(
            "/api/v1/profiles/:profile_id",
            get(profiles::get_profile).patch(profiles::update_profile),
        )
        // Student routes (v1)
        .route(
            "/api/v1/franchises/:franchise_id/students",
            post(students::create_student).get(students::list_students),
        )
        .route(
            "/api/v1/students/:student_id",
            get(students::get_student)
                .patch(students::update_student)
                .delete(students::delete_student),
        )
        .route(
            "/api/v1/students/:student_id/belts",
            post(students::award_belt),
        )
        .route(
            "/api/v1/students/:student_id/notes",
            post(students::add_feedback_note),
        )
        .route(
            "/api/v1/students/:student_id/avatar",
            post(students::upload_avatar),
        )
        .route(
            "/api/v1/students/:student_id/avatar-url",
            get(students::get_avatar_url),
        )
        // Class routes (v1)
        .route(
            "/api/v1/franchises/:franchise_id/classes",
            post(classes::create_class).get(classes::list_classes),
        )
        .route(
            "/api/v1/classes/:class_id",
            patch(classes::update_class).delete(classes::delete_class),
        );

    // CRM webhook route (shared-secret authenticated via extractor)
    let webhook_routes = Router::new().route(
        "/api/v1/webhooks/crm/instructor-completed",
        post(crm_webhook::instructor_completed),
    );

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(webhook_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
