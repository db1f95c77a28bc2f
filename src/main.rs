use anyhow::Context;
use clap::Parser;
use photo_search::api::{PhotoSearch, SearchQuery, UnsplashClient};
use photo_search::cli::{format_result_line, Cli};
use photo_search::config::{resolve_access_key, Config, CredentialSource};
use photo_search::logging::init_tracing;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let (access_key, source) = resolve_access_key(cli.access_key.as_deref(), &config.api, |name| {
        std::env::var(name).ok()
    });
    if source == CredentialSource::Missing {
        tracing::warn!(
            env = %config.api.access_key_env,
            "No API access key configured; requests will be rejected upstream"
        );
    } else {
        tracing::info!(source = ?source, "Resolved API access key");
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    if cli.print {
        let query = SearchQuery::new(cli.query.unwrap_or_default(), cli.page);
        let client = UnsplashClient::new(&config.api, access_key)?;
        let page = runtime
            .block_on(client.search(&query))
            .with_context(|| format!("Search for '{}' failed", query.query))?;

        let mut stdout = std::io::stdout().lock();
        for record in &page.results {
            writeln!(stdout, "{}", format_result_line(record))?;
        }
        return Ok(());
    }

    photo_search::ui::run(&config, access_key, cli.query, runtime.handle().clone())
}
