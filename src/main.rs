use anyhow::{Context, Result};
use clap::Parser;
use practice_coach::{create_router, model_from_config, AppState, Config, QuestionGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "practice-coach", about = "Mock interview practice server")]
struct Args {
    /// Config file path (extension optional)
    #[arg(long, default_value = "config/practice-coach")]
    config: String,

    /// Override the configured HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;
    let port = args.port.unwrap_or(cfg.service.http.port);

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let generator = QuestionGenerator::new(model_from_config(&cfg.llm));
    if !generator.is_available() {
        info!("No AI model configured; questions come from the fallback lists");
    }

    let app = create_router(AppState::in_memory(generator));

    let addr = format!("{}:{}", cfg.service.http.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
