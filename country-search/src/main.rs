#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Search countries by name from the terminal.
//!
//! Every line read from stdin is one input event, holding the full contents of
//! the search box. Events are debounced, then looked up, and the rendered page
//! is written to stdout. Notices and logs go to stderr.
//!
//! The work is split into several subcrates.
//!
//! - [country-search-settings](../country_search_settings/index.html)
//! - [country-search-api](../country_search_api/index.html)
//! - [country-search-page](../country_search_page/index.html)
//! - [country-search-integration-tests](../country_search_integration_tests/index.html)

use anyhow::{Context, Result};
use country_search_api::CountriesClient;
use country_search_page::{CountrySearch, Debounced, Notice, Notifier, TracingNotifier};
use country_search_settings::{LogFormat, Settings};
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
    sync::mpsc,
};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// How many unread input events may queue up before reading stdin pauses.
const INPUT_BUFFER: usize = 64;

/// Primary entry point
#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load().context("Loading settings")?;
    init_logging(&settings)?;

    let source = CountriesClient::new(&settings.countries)
        .context("Setting up countries client")?;
    let mut search = CountrySearch::new(
        Box::new(source),
        Box::new(ConsoleNotifier),
        &settings.search,
    );

    let (input_tx, input_rx) = mpsc::channel(INPUT_BUFFER);
    let reader = tokio::spawn(read_input(tokio::io::stdin(), input_tx));
    let mut events = Debounced::new(input_rx, settings.search.debounce_delay);
    tracing::info!(delay = ?events.delay(), "waiting for input");

    render_searches(&mut search, &mut events, &mut tokio::io::stdout()).await?;

    reader
        .await
        .context("Joining input reader")?
        .context("Reading input")?;
    Ok(())
}

/// Forward every line of `input` as an input event.
async fn read_input<R>(input: R, events: mpsc::Sender<String>) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    while let Some(line) = lines.next_line().await? {
        if events.send(line).await.is_err() {
            // The page has stopped listening.
            break;
        }
    }
    Ok(())
}

/// Search for every debounced event and write the page after each one.
///
/// Returns once the input has closed and the last event was handled.
async fn render_searches<W>(
    search: &mut CountrySearch,
    events: &mut Debounced<String>,
    out: &mut W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(text) = events.next().await {
        search.handle_input(&text).await;
        let document = search.page().render().into_string();
        out.write_all(document.as_bytes())
            .await
            .context("Writing page")?;
        out.write_all(b"\n").await.context("Writing page")?;
        out.flush().await.context("Flushing page")?;
    }
    Ok(())
}

/// Prints notices to stderr, next to the page on stdout.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        TracingNotifier.notify(notice);
        eprintln!("{}", notice);
    }
}

/// Set up logging, based on settings and the `RUST_LOG` environment variable.
///
/// Logs are written to stderr so they never mix with the page.
fn init_logging(settings: &Settings) -> Result<()> {
    LogTracer::init()?;
    let env_filter: EnvFilter = (&settings.logging.levels).into();
    let registry = tracing_subscriber::registry().with(env_filter);

    match settings.logging.format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().pretty().with_writer(std::io::stderr)),
        )?,
        LogFormat::Compact => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().compact().with_writer(std::io::stderr)),
        )?,
        LogFormat::Json => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().json().with_writer(std::io::stderr)),
        )?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_input, render_searches, INPUT_BUFFER};
    use async_trait::async_trait;
    use country_search_api::{Country, CountrySource, FetchError};
    use country_search_page::{CountrySearch, Debounced, TracingNotifier};
    use country_search_settings::SearchSettings;
    use fake::{Fake, Faker};
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };
    use tokio::sync::mpsc;

    /// Answers every query with one country called "Germany".
    #[derive(Default)]
    struct GermanySource {
        queries: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl CountrySource for GermanySource {
        fn name(&self) -> String {
            "GermanySource".to_string()
        }

        async fn fetch_countries(&self, name: &str) -> Result<Vec<Country>, FetchError> {
            self.queries.lock().unwrap().push(name.to_string());
            let mut country: Country = Faker.fake();
            country.name = "Germany".to_string();
            Ok(vec![country])
        }
    }

    #[tokio::test]
    async fn test_typed_lines_are_debounced_into_one_page() -> anyhow::Result<()> {
        let settings = SearchSettings {
            debounce_delay: Duration::from_millis(50),
            max_list_matches: 10,
        };
        let source = GermanySource::default();
        let queries = source.queries.clone();
        let mut search =
            CountrySearch::new(Box::new(source), Box::new(TracingNotifier), &settings);

        let (input_tx, input_rx) = mpsc::channel(INPUT_BUFFER);
        let typed: &[u8] = b"g\nge\nger\n germany\n";
        let reader = tokio::spawn(read_input(typed, input_tx));
        let mut events = Debounced::new(input_rx, settings.debounce_delay);

        let mut out = Vec::new();
        render_searches(&mut search, &mut events, &mut out).await?;
        reader.await??;

        assert_eq!(*queries.lock().unwrap(), vec!["germany"]);
        let written = String::from_utf8(out)?;
        assert_eq!(written.lines().count(), 1, "{}", written);
        assert!(written.contains("<h1>Germany</h1>"), "{}", written);
        assert!(written.contains(r#"value=" germany""#), "{}", written);
        Ok(())
    }
}
