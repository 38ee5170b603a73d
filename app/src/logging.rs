use crate::config::Config;
use crate::error::StartupError;
use opentelemetry::trace::TracerProvider as _;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const SQL_ECHO_DIRECTIVE: &str = "sqlx::query=debug";

/// Installs the global tracing subscriber
///
/// Honors `RUST_LOG`, optionally echoes every executed statement
/// and optionally exports spans to stdout.
pub fn init(config: &Config) -> Result<(), StartupError> {
    let filter = build_filter(config)?;

    let telemetry = if config.trace_stdout() {
        let provider = opentelemetry_sdk::trace::TracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer(env!("CARGO_PKG_NAME"));
        opentelemetry::global::set_tracer_provider(provider);
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .try_init()
        .map_err(|e| StartupError::Logging(e.to_string()))
}

fn build_filter(config: &Config) -> Result<EnvFilter, StartupError> {
    let mut directives = config.log_filter().to_owned();
    if config.sql_echo() {
        if !directives.is_empty() {
            directives.push(',');
        }
        directives.push_str(SQL_ECHO_DIRECTIVE);
    }
    EnvFilter::try_new(directives).map_err(|e| StartupError::Logging(e.to_string()))
}
