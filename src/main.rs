use anyhow::{Context, Result};
use clap::Parser;
use shotmark::{create_router, AppState, ChatModel, Config, KeyPointExtractor};
use tracing::info;

#[derive(Parser)]
#[command(name = "shotmark")]
#[command(about = "Extract screenshot key points from screen recording transcripts")]
struct Args {
    /// Path to the config file (without extension)
    #[arg(short, long, default_value = "config/shotmark")]
    config: String,

    /// Extract key points from a transcript file, print them as JSON and
    /// exit instead of starting the HTTP server
    #[arg(short, long)]
    transcript: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("Shotmark v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!("LLM endpoint: {} (model: {})", cfg.llm.endpoint, cfg.llm.model);

    let model = ChatModel::new(cfg.llm.clone())?;
    let extractor = KeyPointExtractor::new(Box::new(model));

    // One-shot mode: read a transcript file, print key points, exit
    if let Some(path) = args.transcript {
        let transcript = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read transcript file {}", path))?;

        let key_points = extractor.extract(&transcript).await?;

        println!("{}", serde_json::to_string_pretty(&key_points)?);
        return Ok(());
    }

    let state = AppState::new(extractor);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, router)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
