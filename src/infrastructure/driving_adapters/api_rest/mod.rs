//! REST API Module
//!
//! Contains HTTP handlers, DTOs, extractors and middleware for the REST API,
//! plus the wiring from a connection pool to the shared application state.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::dashboard::DashboardDeps;
use crate::application::use_cases::enrollments::EnrollmentDeps;
use crate::application::use_cases::payment_schedules::PaymentScheduleDeps;
use crate::application::use_cases::registrations::RegistrationDeps;
use crate::application::use_cases::{
    AuthUseCases, CourseUseCases, DashboardUseCases, EnrollmentUseCases, FinanceUseCases, PaymentPlanUseCases,
    PaymentScheduleUseCases, RegistrationUseCases, SessionUseCases, StudentUseCases, TrainerUseCases,
    TransactionUseCases, UserUseCases,
};
use crate::domain::gateways::{
    Clock, CourseRepository, EnrollmentRepository, InstallmentRepository, PasswordHasher, PaymentPlanRepository,
    PaymentRepository, RegistrationRepository, SessionRepository, StudentRepository, TrainerRepository,
    TransactionRepository, UserRepository,
};
use crate::infrastructure::driven_adapters::config::{AppConfig, ServerConfig};
use crate::infrastructure::driven_adapters::{
    Argon2PasswordHasher, PostgresCourseRepository, PostgresEnrollmentRepository, PostgresInstallmentRepository,
    PostgresPaymentPlanRepository, PostgresPaymentRepository, PostgresRegistrationRepository,
    PostgresSessionRepository, PostgresStudentRepository, PostgresTrainerRepository, PostgresTransactionRepository,
    PostgresUserRepository, SystemClock,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub clock: Arc<dyn Clock>,
    pub auth: Arc<AuthUseCases>,
    pub users: Arc<UserUseCases>,
    pub students: Arc<StudentUseCases>,
    pub trainers: Arc<TrainerUseCases>,
    pub courses: Arc<CourseUseCases>,
    pub sessions: Arc<SessionUseCases>,
    pub registrations: Arc<RegistrationUseCases>,
    pub enrollments: Arc<EnrollmentUseCases>,
    pub payment_plans: Arc<PaymentPlanUseCases>,
    pub schedules: Arc<PaymentScheduleUseCases>,
    pub transactions: Arc<TransactionUseCases>,
    pub finance: Arc<FinanceUseCases>,
    pub dashboard: Arc<DashboardUseCases>,
}

impl AppState {
    /// Build every repository on `pool` and the use cases on top of them
    #[must_use]
    pub fn new(pool: &PgPool, config: AppConfig) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
        let students: Arc<dyn StudentRepository> = Arc::new(PostgresStudentRepository::new(pool.clone()));
        let trainers: Arc<dyn TrainerRepository> = Arc::new(PostgresTrainerRepository::new(pool.clone()));
        let courses: Arc<dyn CourseRepository> = Arc::new(PostgresCourseRepository::new(pool.clone()));
        let sessions: Arc<dyn SessionRepository> = Arc::new(PostgresSessionRepository::new(pool.clone()));
        let registrations: Arc<dyn RegistrationRepository> =
            Arc::new(PostgresRegistrationRepository::new(pool.clone()));
        let enrollments: Arc<dyn EnrollmentRepository> = Arc::new(PostgresEnrollmentRepository::new(pool.clone()));
        let payment_plans: Arc<dyn PaymentPlanRepository> =
            Arc::new(PostgresPaymentPlanRepository::new(pool.clone()));
        let installments: Arc<dyn InstallmentRepository> =
            Arc::new(PostgresInstallmentRepository::new(pool.clone()));
        let payments: Arc<dyn PaymentRepository> = Arc::new(PostgresPaymentRepository::new(pool.clone()));
        let transactions: Arc<dyn TransactionRepository> =
            Arc::new(PostgresTransactionRepository::new(pool.clone()));
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let registration_deps = RegistrationDeps {
            registrations: registrations.clone(),
            courses: courses.clone(),
            sessions: sessions.clone(),
            payment_plans: payment_plans.clone(),
            clock: clock.clone(),
        };
        let enrollment_deps = EnrollmentDeps {
            enrollments: enrollments.clone(),
            students: students.clone(),
            courses: courses.clone(),
            sessions: sessions.clone(),
            payment_plans: payment_plans.clone(),
            clock: clock.clone(),
        };
        let schedule_deps = PaymentScheduleDeps {
            installments: installments.clone(),
            payments: payments.clone(),
            enrollments: enrollments.clone(),
            courses: courses.clone(),
            clock: clock.clone(),
        };
        let dashboard_deps = DashboardDeps {
            students: students.clone(),
            courses: courses.clone(),
            enrollments: enrollments.clone(),
            registrations,
            sessions: sessions.clone(),
            installments: installments.clone(),
            transactions: transactions.clone(),
            clock: clock.clone(),
        };

        Self {
            config: Arc::new(config),
            auth: Arc::new(AuthUseCases::new(&users, &hasher)),
            users: Arc::new(UserUseCases::new(&users, &hasher)),
            students: Arc::new(StudentUseCases::new(&students, &enrollments, &payments)),
            trainers: Arc::new(TrainerUseCases::new(&trainers)),
            courses: Arc::new(CourseUseCases::new(&courses, &trainers)),
            sessions: Arc::new(SessionUseCases::new(&sessions, &courses, &trainers)),
            registrations: Arc::new(RegistrationUseCases::new(&registration_deps)),
            enrollments: Arc::new(EnrollmentUseCases::new(&enrollment_deps)),
            payment_plans: Arc::new(PaymentPlanUseCases::new(&payment_plans)),
            schedules: Arc::new(PaymentScheduleUseCases::new(&schedule_deps)),
            transactions: Arc::new(TransactionUseCases::new(&transactions)),
            finance: Arc::new(FinanceUseCases::new(&installments, &transactions, &clock)),
            dashboard: Arc::new(DashboardUseCases::new(&dashboard_deps)),
            clock,
        }
    }
}

/// Build the full application router
///
/// `/health` is public; everything else lives under `/api`.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server);

    let api = Router::new()
        .nest("/auth", handlers::auth::router())
        .nest("/users", handlers::users::router())
        .nest("/students", handlers::students::router())
        .nest("/trainers", handlers::trainers::router())
        .nest("/courses", handlers::courses::router())
        .nest("/sessions", handlers::sessions::router())
        .nest("/registrations", handlers::registrations::router())
        .nest("/enrollments", handlers::enrollments::router())
        .nest("/payment-plans", handlers::payment_plans::router())
        .nest("/payment-schedules", handlers::payment_schedules::router())
        .nest("/transactions", handlers::transactions::router())
        .nest("/finance", handlers::finance::router())
        .nest("/dashboard", handlers::dashboard::router());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id::request_id_middleware))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if server.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

/// GET /health - Liveness check
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
