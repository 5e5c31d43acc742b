use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::trainers::handlers::list_trainers,
        features::trainers::handlers::get_trainer,
        features::trainers::handlers::create_trainer,
        features::availability::handlers::create_slot,
        features::availability::handlers::list_slots,
        features::availability::handlers::deactivate_slot,
        features::schedule::handlers::get_trainer_schedule,
        features::members::handlers::search_members,
        features::members::handlers::get_member_profile,
        features::members::handlers::update_phone,
        features::members::handlers::add_metric,
    ),
    components(
        schemas(
            storage::dto::trainer::CreateTrainerRequest,
            storage::dto::trainer::TrainerResponse,
            storage::dto::availability::CreateSlotRequest,
            storage::dto::availability::SlotResponse,
            storage::dto::schedule::SessionEntry,
            storage::dto::schedule::ClassEntry,
            storage::dto::schedule::TrainerScheduleResponse,
            storage::dto::member::MemberProfileResponse,
            storage::dto::member::GoalSummary,
            storage::dto::member::MetricSummary,
            storage::dto::member::UpdatePhoneRequest,
            storage::dto::member::AddMetricRequest,
            storage::models::Member,
            storage::models::Trainer,
            storage::models::Availability,
        )
    ),
    tags(
        (name = "trainers", description = "Trainer directory endpoints"),
        (name = "availability", description = "Trainer availability slots"),
        (name = "schedule", description = "Trainer schedule endpoints"),
        (name = "members", description = "Member lookup and self-service endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Health Club API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let api = Router::new()
        .merge(features::trainers::routes(api_keys.clone()))
        .merge(features::availability::routes(api_keys.clone()))
        .merge(features::schedule::routes())
        .merge(features::members::routes(api_keys));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app).await?;

    Ok(())
}
