use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald")]
mod journald;

/// Level used when neither `--log-level` nor `RUST_LOG` say otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the subscriber for a `RUST_LOG` style directive. Invalid directives fall back to
/// [`DEFAULT_LOG_LEVEL`] and hand back the parse error for reporting.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        });
    (get_subscribers(filter), parse_err)
}

/// `--log-level` wins over `RUST_LOG`.
#[must_use]
pub fn log_level(cli: Option<&str>) -> String {
    choose_log_level(cli, std::env::var(EnvFilter::DEFAULT_ENV).ok())
}

fn choose_log_level(cli: Option<&str>, env: Option<String>) -> String {
    cli.map(ToOwned::to_owned)
        .or(env)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned())
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald")]
    let subscriber = journald::add_layer(subscriber);

    subscriber
}
