use anyhow::Result;
use match_engine::{start_web_server, EngineConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("match_engine=info,rocket::server=off")),
        )
        .init();

    // Service credentials are read here, once, and injected into the
    // engine; nothing below main touches the environment.
    let config = EngineConfig::from_env();

    start_web_server(config).await
}
