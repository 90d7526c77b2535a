// Prometheus metrics for the lighthouse bot.

use lazy_static::lazy_static;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    /// Turns processed, by the action kind the engine chose.
    pub static ref TURNS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("lighthouse_bot_turns_total", "Turns processed"),
        &["action"],
    )
    .unwrap();

    /// Join attempts against the game server (including failures).
    pub static ref JOIN_ATTEMPTS_TOTAL: IntCounter = IntCounter::new(
        "lighthouse_bot_join_attempts_total",
        "Join attempts against the game server",
    )
    .unwrap();

    /// Time spent deciding one turn, in seconds. The engine is a
    /// bounded grid search, so this should sit far below the server's
    /// turn deadline.
    pub static ref DECISION_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "lighthouse_bot_decision_duration_seconds",
            "Per-turn decision time in seconds",
        )
        .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
    )
    .unwrap();
}

/// Register all metrics with the custom registry. Call once at startup.
pub fn register_metrics() {
    let collectors: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(TURNS_TOTAL.clone()),
        Box::new(JOIN_ATTEMPTS_TOTAL.clone()),
        Box::new(DECISION_DURATION_SECONDS.clone()),
    ];

    for c in collectors {
        REGISTRY.register(c).expect("failed to register metric");
    }
}

/// Serialize all registered metrics to the Prometheus text exposition format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_metrics_returns_string() {
        register_metrics();
        let output = gather_metrics();
        assert!(output.is_empty() || output.contains("lighthouse_bot_"));
    }

    #[test]
    fn test_metric_increments() {
        TURNS_TOTAL.with_label_values(&["move"]).inc();
        JOIN_ATTEMPTS_TOTAL.inc();
        DECISION_DURATION_SECONDS.observe(0.0002);
    }
}
