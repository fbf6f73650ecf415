use anyhow::{Context, Result};
use boothgrid::{
    display_booths,
    fetch::{self, Loader},
    Config, DisplayState, Document,
};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,boothgrid=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configuration ────────────────────────────────────────────
    let config = Config::load().context("loading configuration")?;
    let source = config.resolve_source().context("resolving CSV source")?;
    info!(
        source = %source,
        output = %config.output.display(),
        mode = %config.parse_mode,
        "configured"
    );

    let client = fetch::build_client(config.timeout()).context("building HTTP client")?;
    let loader = Loader::new(client, source);

    // ─── 3) fetch → parse → render ───────────────────────────────────
    let mut doc = Document::new(config.title.as_str());
    let state = {
        let (grid, notice) = doc.regions_mut();
        display_booths(&loader, config.parse_mode, grid, notice).await
    };
    match state {
        DisplayState::Rendered { count } => info!(count, "booths rendered"),
        DisplayState::Empty => warn!("no booth data; placeholder shown"),
        DisplayState::Errored => warn!("load failed; error placeholder shown"),
    }

    // ─── 4) write page ───────────────────────────────────────────────
    if let Some(parent) = config.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&config.output, doc.to_html())
        .await
        .with_context(|| format!("writing {}", config.output.display()))?;
    info!(output = %config.output.display(), "all done");
    Ok(())
}
