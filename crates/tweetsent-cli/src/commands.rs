//! Command handlers for the CLI.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use tweetsent_core::{
    load_credentials, load_search_query, write_credentials_file, AppConfig, SearchCredentials,
    SearchQuery, CREDENTIALS_YAML_KEY,
};
use tweetsent_search::SearchClient;
use tweetsent_sentiment::{run_pipeline, LexiconScorer, SentimentClassifier};
use tweetsent_store::MongoSink;

/// Run the full pipeline and print the report to stdout.
///
/// # Errors
///
/// Returns an error if configuration files cannot be read or written, the
/// search or store fails, or the search returned no posts.
pub(crate) async fn run_collect(
    config: &AppConfig,
    query_override: Option<PathBuf>,
) -> anyhow::Result<()> {
    let query = load_query(config, query_override)?;
    write_credentials_for(config, &query)?;
    let creds = load_credentials(&config.credentials_path, CREDENTIALS_YAML_KEY)
        .context("failed to reload search credentials")?;

    let client = SearchClient::new(&creds, config.request_timeout_secs)?
        .with_retry(config.max_retries, config.retry_backoff_base_ms);
    let sink = MongoSink::connect(
        &config.mongo_uri,
        &config.mongo_database,
        &config.mongo_collection,
    )
    .await
    .context("failed to open document store")?;

    tracing::info!(
        query = %query.query,
        scope = %query.scope,
        from = %query.api_from_date(),
        to = %query.api_to_date(),
        max_results = query.max_results,
        "starting collection"
    );

    let mut stream = client.stream(&query);
    let classifier = default_classifier();
    let mut out = std::io::stdout().lock();
    let outcome = run_pipeline(&mut stream, &sink, &classifier, &mut out).await?;

    tracing::info!(
        pages = stream.pages_fetched(),
        fetched = outcome.summary.fetched,
        kept = outcome.summary.kept,
        "run complete"
    );
    Ok(())
}

/// Write the credentials file for the configured query and exit.
///
/// # Errors
///
/// Returns an error if the query file cannot be loaded or the credentials
/// file cannot be written.
pub(crate) fn write_credentials(
    config: &AppConfig,
    query_override: Option<PathBuf>,
) -> anyhow::Result<()> {
    let query = load_query(config, query_override)?;
    let creds = write_credentials_for(config, &query)?;
    println!(
        "wrote {} ({})",
        config.credentials_path.display(),
        creds.endpoint
    );
    Ok(())
}

/// Print the cleaned text, polarity and label for `text`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) fn classify_text<W: Write>(text: &str, out: &mut W) -> anyhow::Result<()> {
    let analysis = default_classifier().analyze(text);
    writeln!(out, "cleaned: {}", analysis.cleaned)?;
    writeln!(out, "polarity: {}", analysis.polarity)?;
    writeln!(out, "sentiment: {}", analysis.sentiment)?;
    Ok(())
}

/// The general English lexicon classifier used by `run` and `classify`.
pub(crate) fn default_classifier() -> SentimentClassifier<LexiconScorer> {
    SentimentClassifier::new(LexiconScorer::default())
}

fn load_query(config: &AppConfig, query_override: Option<PathBuf>) -> anyhow::Result<SearchQuery> {
    let path = query_override.unwrap_or_else(|| config.query_path.clone());
    load_search_query(&path)
        .with_context(|| format!("failed to load query parameters from {}", path.display()))
}

fn write_credentials_for(
    config: &AppConfig,
    query: &SearchQuery,
) -> anyhow::Result<SearchCredentials> {
    let creds = SearchCredentials::premium(
        query.scope,
        &config.dev_env_label,
        &config.api_key,
        &config.api_secret,
    );
    write_credentials_file(&config.credentials_path, CREDENTIALS_YAML_KEY, &creds)
        .context("failed to write search credentials file")?;
    tracing::debug!(
        path = %config.credentials_path.display(),
        endpoint = %creds.endpoint,
        "credentials file written"
    );
    Ok(creds)
}
