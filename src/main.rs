use std::sync::Arc;

use dashboard_filters::filters::DispatchConfig;
use dashboard_filters::graphql::GraphqlClient;
use dashboard_filters::{routes, state};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let client = GraphqlClient::from_env().expect("dashboard API client init failed");
    tracing::info!(api_url = %client.api_url(), "dashboard API configured");
    let state = state::AppState::new(Arc::new(client), DispatchConfig::from_env());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dashboard-filters listening");
    axum::serve(listener, app).await.expect("server failed");
}
