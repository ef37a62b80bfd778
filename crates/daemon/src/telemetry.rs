//! Optional OpenTelemetry export for the daemon's tracing subscriber
//!
//! The OTLP exporter is compiled in behind the `telemetry` feature and
//! activated by setting `OTEL_EXPORTER_OTLP_ENDPOINT`. The layer is handed
//! back to `main`, which composes it into the one global subscriber.

/// Build an OTLP tracing layer if an endpoint is configured.
///
/// Returns `Ok(None)` when `OTEL_EXPORTER_OTLP_ENDPOINT` is unset, so the
/// daemon runs without telemetry by default.
///
/// # Environment Variables
///
/// - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (e.g., http://localhost:4317)
/// - `OTEL_SERVICE_NAME`: Service name (default: pybridge)
#[cfg(feature = "telemetry")]
pub fn otlp_layer<S>() -> anyhow::Result<Option<impl tracing_subscriber::Layer<S>>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    use opentelemetry::trace::TracerProvider;
    use opentelemetry_otlp::WithExportConfig;

    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        return Ok(None);
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "pybridge".to_string());

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(&endpoint),
        )
        .install_batch(opentelemetry_sdk::runtime::Tokio)?
        .tracer(service_name);

    Ok(Some(tracing_opentelemetry::layer().with_tracer(tracer)))
}

/// Surface a misconfiguration: an OTLP endpoint is set but the exporter
/// was not compiled in.
#[cfg(not(feature = "telemetry"))]
pub fn warn_if_configured() {
    if std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").is_ok() {
        tracing::warn!("OTEL_EXPORTER_OTLP_ENDPOINT set but feature 'telemetry' not enabled");
        tracing::warn!("Rebuild with: cargo build --features telemetry");
    }
}
