use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use time_tracker::shared::core::clock::SystemClock;
use time_tracker::shell::config::read_config;
use time_tracker::shell::graphql::{AppSchema, schema};
use time_tracker::shell::http::router;
use time_tracker::shell::state::{AppState, Documents};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let settings = read_config()?;

    // In-memory database for now
    let documents = Arc::new(Documents::new());
    let state = AppState::new(documents, Arc::new(SystemClock), &settings);
    let subscription = state.entries.connect().await;

    let app = router(state.clone())
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)))
        .layer(TraceLayer::new_for_http());

    let address = settings.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(user_id = %settings.tracking.user_id, "listening on http://{}", address);
    tracing::info!("GraphQL endpoint: http://{}/gql", address);
    axum::serve(listener, app).await?;

    subscription.close();
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
