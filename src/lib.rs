use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    serve::Serve,
    Json, Router,
};

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::error::Error;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Level;

use domain::ScheduleAPIError;
pub mod routes;
use crate::utils::{
    constants::{ANY_ORIGIN, CORS_ORIGINS},
    tracing::*,
};
use routes::{
    config::{get_config, update_config},
    employees::{
        create_employee, delete_employee, list_employees, update_employee,
    },
    guides::{
        create_guide, delete_guide, list_categories, list_guides,
        list_guides_by_category,
    },
    login,
    requests::{create_request, delete_request, list_requests},
    weeks::{
        create_week, delete_week, get_daily_totals, get_week,
        get_weekly_summary, list_weeks, update_assignments,
    },
};
pub mod app_state;
pub mod domain;
pub mod services;
use app_state::AppState;
pub mod utils;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ScheduleAPIError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ScheduleAPIError::EmployeeNotFound(_) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::NOT_FOUND, "Dipendente non trovato".to_string())
            }
            ScheduleAPIError::WeekNotFound(_) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::NOT_FOUND, "Settimana non trovata".to_string())
            }
            ScheduleAPIError::RequestNotFound(_) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::NOT_FOUND, "Richiesta non trovata".to_string())
            }
            ScheduleAPIError::GuideNotFound(_) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::NOT_FOUND, "Guida non trovata".to_string())
            }
            ScheduleAPIError::ValidationError(message) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::BAD_REQUEST, message.as_ref().to_owned())
            }
            ScheduleAPIError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
            }
        };
        let body = Json(ErrorResponse {
            error: error_message,
        });
        (status, body).into_response()
    }
}

fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        let cors = cors_layer(&CORS_ORIGINS)?;

        let api = Router::new()
            .route("/login", post(login))
            .route("/config", get(get_config).put(update_config))
            .route("/dipendenti", get(list_employees).post(create_employee))
            .route(
                "/dipendenti/:id",
                put(update_employee).delete(delete_employee),
            )
            .route("/settimane", get(list_weeks).post(create_week))
            .route("/settimane/:id", get(get_week).delete(delete_week))
            .route("/settimane/:id/orari", put(update_assignments))
            .route(
                "/settimane/:id/calcoli-giornalieri/:employee_id",
                get(get_daily_totals),
            )
            .route(
                "/settimane/:id/calcoli/:employee_id",
                get(get_weekly_summary),
            )
            .route("/richieste", get(list_requests).post(create_request))
            .route("/richieste/:id", delete(delete_request))
            .route("/guide", get(list_guides).post(create_guide))
            .route("/guide/categorie", get(list_categories))
            .route(
                "/guide/per-categoria/:categoria",
                get(list_guides_by_category),
            )
            .route("/guide/:id", delete(delete_guide));

        let router = Router::new()
            .nest("/api", api)
            .with_state(app_state)
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

/// A `*` entry opens the API to every origin without credentials, since
/// browsers reject credentialed wildcard responses.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, Box<dyn Error>> {
    if origins.iter().any(|origin| origin == ANY_ORIGIN) {
        return Ok(CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any));
    }

    let allowed_origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .allow_origin(allowed_origins))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

pub async fn get_postgres_pool(
    url: &Secret<String>,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(url.expose_secret())
        .await
}
