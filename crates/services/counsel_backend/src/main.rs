use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use counsel_appointments::routes as appointment_routes;
use counsel_common::services::NotificationService;
use counsel_config::load_config;
use counsel_db::{
    AppointmentRepository, CounselorRepository, DbClient, SqlAppointmentRepository,
    SqlCounselorRepository, SqlUserRepository, UserRepository,
};
use counsel_directory::routes as directory_routes;
use counsel_gcal::routes as gcal_routes;
use counsel_notify::EmailDispatcher;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[axum::debug_handler]
async fn health_handler(
    State(db_client): State<DbClient>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if db_client.is_healthy().await {
        Ok(Json(json!({ "status": "ok" })))
    } else {
        Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "degraded" })),
        ))
    }
}

async fn init_schemas(db_client: &DbClient) {
    SqlCounselorRepository::new(db_client.clone())
        .init_schema()
        .await
        .expect("Failed to initialize counselors schema");
    SqlUserRepository::new(db_client.clone())
        .init_schema()
        .await
        .expect("Failed to initialize users schema");
    SqlAppointmentRepository::new(db_client.clone())
        .init_schema()
        .await
        .expect("Failed to initialize appointments schema");
}

#[tokio::main]
async fn main() {
    counsel_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    let db_client = DbClient::new(&config)
        .await
        .expect("Failed to connect to database");
    init_schemas(&db_client).await;

    let notifier: Option<Arc<dyn NotificationService>> = if config.use_notify {
        match EmailDispatcher::from_config(&config) {
            Ok(dispatcher) => Some(Arc::new(dispatcher)),
            Err(e) => {
                warn!("Notifications enabled but no dispatcher available: {}", e);
                None
            }
        }
    } else {
        info!("Notifications disabled via config");
        None
    };

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Counsel API!" }))
        .route("/health", get(health_handler).with_state(db_client.clone()))
        .merge(directory_routes(db_client.clone()))
        .merge(appointment_routes(db_client.clone(), notifier));

    let api_router = if config.use_gcal {
        let gcal_config = config
            .gcal
            .as_ref()
            .expect("use_gcal is set but GCal config is missing");
        let calendar_hub = counsel_gcal::create_calendar_hub(gcal_config)
            .await
            .expect("Failed to create Google Calendar client");
        api_router.merge(gcal_routes(
            config.clone(),
            Arc::new(calendar_hub),
            db_client.clone(),
        ))
    } else {
        info!("Google Meet scheduling disabled via config");
        api_router
    };

    let app = Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
