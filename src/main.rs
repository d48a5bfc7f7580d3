pub mod modules;
pub use modules::applicant;
pub mod health;
pub mod seed;
pub mod shared;

use crate::applicant::adapter::outgoing::applicant_repository_postgres::ApplicantRepositoryPostgres;
use crate::applicant::application::applicant_use_cases::ApplicantUseCases;
use crate::applicant::application::service::{
    CreateApplicantService, GetApplicantsService, GetSingleApplicantService,
    RemoveApplicantService, UpdateApplicantService,
};
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub applicant: ApplicantUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Seed the assessment data on an empty database
    seed::seed_database(&db_arc)
        .await
        .expect("Failed to seed database");

    // Create repository and use cases
    let applicant_repo = ApplicantRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        applicant: ApplicantUseCases {
            get_list: Arc::new(GetApplicantsService::new(applicant_repo.clone())),
            get_single: Arc::new(GetSingleApplicantService::new(applicant_repo.clone())),
            create: Arc::new(CreateApplicantService::new(applicant_repo.clone())),
            update: Arc::new(UpdateApplicantService::new(applicant_repo.clone())),
            remove: Arc::new(RemoveApplicantService::new(applicant_repo)),
        },
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Applicants
    cfg.service(crate::applicant::adapter::incoming::web::routes::get_applicants_handler);
    cfg.service(crate::applicant::adapter::incoming::web::routes::get_single_applicant_handler);
    cfg.service(crate::applicant::adapter::incoming::web::routes::create_applicant_handler);
    cfg.service(crate::applicant::adapter::incoming::web::routes::update_applicant_handler);
    cfg.service(crate::applicant::adapter::incoming::web::routes::remove_applicant_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
