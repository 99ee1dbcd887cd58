use anyhow::Context;
use prometheus::{opts, Encoder, IntCounter, Registry, TextEncoder};
use tracing::debug;

/// Shared application state: the metrics registry and the counter
/// registered against it. Built once at startup and handed to handlers
/// behind an `Arc`.
pub struct AppState {
    pub registry: Registry,
    // Counts requests served by the root route only. Scrapes of /metrics
    // and unmatched paths are not included.
    pub http_requests: IntCounter,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let http_requests =
            IntCounter::with_opts(opts!("http_requests_total", "Total HTTP Requests"))
                .context("create http_requests_total counter")?;
        registry
            .register(Box::new(http_requests.clone()))
            .context("register http_requests_total counter")?;
        debug!("Metrics registry initialized");

        Ok(AppState {
            registry,
            http_requests,
        })
    }

    /// Render every registered metric in the Prometheus text exposition format.
    pub fn encode_metrics(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        let mut buf = Vec::new();
        encoder.encode(&families, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero() {
        let state = AppState::new().expect("build state");
        assert_eq!(state.http_requests.get(), 0);

        let text = state.encode_metrics().expect("encode");
        assert!(text.contains("# HELP http_requests_total Total HTTP Requests"));
        assert!(text.contains("# TYPE http_requests_total counter"));
        assert!(text.lines().any(|l| l == "http_requests_total 0"));
    }

    #[test]
    fn encode_reports_incremented_count() {
        let state = AppState::new().expect("build state");
        state.http_requests.inc();
        state.http_requests.inc();
        state.http_requests.inc();

        let text = state.encode_metrics().expect("encode");
        assert!(text.lines().any(|l| l == "http_requests_total 3"));
    }

    #[test]
    fn counter_exposes_a_single_sample_line() {
        let state = AppState::new().expect("build state");
        let text = state.encode_metrics().expect("encode");
        // HELP and TYPE lines start with '#', samples with the metric name
        let samples = text
            .lines()
            .filter(|l| l.starts_with("http_requests_total"))
            .count();
        assert_eq!(samples, 1);
    }
}
