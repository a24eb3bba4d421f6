use anyhow::{anyhow, Result};
use google_searcher::{search::ReqwestFetcher, Searcher};
use std::time::{Duration, Instant};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let term = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if term.trim().is_empty() {
        return Err(anyhow!("usage: google-search <search terms>"));
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(20))
        .build()?;
    let searcher = Searcher::with_fetcher(ReqwestFetcher::new(client));

    let started = Instant::now();
    let set = searcher.search(&term).await?;
    info!(
        "{} results in {:.2}s from {}",
        set.len(),
        started.elapsed().as_secs_f64(),
        set.search_url()
    );

    println!("{}", serde_json::to_string_pretty(&set)?);
    Ok(())
}
