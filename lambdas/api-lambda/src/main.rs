mod http_handler;

use lambda_http::{run, service_fn, Error, Request};
use nivaran_shared::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch stamps every line already
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .without_time()
        .init();

    let state = Arc::new(AppState::from_env().await?);

    run(service_fn(move |event: Request| {
        let state = state.clone();
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
