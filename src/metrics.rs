use crate::error::Result;
use prometheus::{Counter, CounterVec, Opts, Registry};

const NAMESPACE: &str = "paprika";
const SUBSYSTEM: &str = "telegram_bot";

/// Receives per-command events from the dispatcher.
pub trait CommandReporter: Send + Sync {
    fn command_processed(&self, keyword: &str);
    fn command_failed(&self, keyword: &str, kind: &'static str);
}

/// Reporter for callers that do not export metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl CommandReporter for NoopReporter {
    fn command_processed(&self, _keyword: &str) {}
    fn command_failed(&self, _keyword: &str, _kind: &'static str) {}
}

#[derive(Clone)]
pub struct PrometheusReporter {
    commands_processed: Counter,
    commands_failed: CounterVec,
}

impl PrometheusReporter {
    pub fn new(registry: &Registry) -> Result<Self> {
        let reporter = Self {
            commands_processed: Counter::with_opts(
                Opts::new("commands_processed", "The total number of processed commands")
                    .namespace(NAMESPACE)
                    .subsystem(SUBSYSTEM),
            )?,
            commands_failed: CounterVec::new(
                Opts::new("commands_failed", "Commands answered with the invalid query message")
                    .namespace(NAMESPACE)
                    .subsystem(SUBSYSTEM),
                &["kind"],
            )?,
        };

        registry.register(Box::new(reporter.commands_processed.clone()))?;
        registry.register(Box::new(reporter.commands_failed.clone()))?;

        Ok(reporter)
    }
}

impl CommandReporter for PrometheusReporter {
    fn command_processed(&self, _keyword: &str) {
        self.commands_processed.inc();
    }

    fn command_failed(&self, _keyword: &str, kind: &'static str) {
        self.commands_failed.with_label_values(&[kind]).inc();
    }
}
