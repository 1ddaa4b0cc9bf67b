pub mod error;
mod server;
mod traits;

use prometheus::{IntCounter, IntCounterVec, Opts, Registry};
use snafu::ResultExt;

pub use self::{error::Error, server::start_metrics_server, traits::Metrics};

const DISPATCH_TOTAL: &str = "notification_gateway_dispatch_total";
const UNAUTHORIZED_TOTAL: &str = "notification_gateway_unauthorized_total";

/// Result of one email dispatch, used as the `outcome` label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchOutcome {
    Success,
    Failure,
}

impl DispatchOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

#[derive(Clone, Debug)]
pub struct DefaultMetrics {
    registry: Registry,

    dispatch_total: IntCounterVec,

    unauthorized_total: IntCounter,
}

impl DefaultMetrics {
    /// # Errors
    ///
    /// Returns an error if a collector cannot be created or registered.
    pub fn new() -> Result<Self, Error> {
        let registry = Registry::new();

        let dispatch_total = IntCounterVec::new(
            Opts::new(DISPATCH_TOTAL, "Number of email dispatch attempts"),
            &["kind", "outcome"],
        )
        .context(error::CreateMetricSnafu { name: DISPATCH_TOTAL })?;
        registry
            .register(Box::new(dispatch_total.clone()))
            .context(error::RegisterMetricSnafu { name: DISPATCH_TOTAL })?;

        let unauthorized_total = IntCounter::new(
            UNAUTHORIZED_TOTAL,
            "Number of requests rejected because of an invalid API key",
        )
        .context(error::CreateMetricSnafu { name: UNAUTHORIZED_TOTAL })?;
        registry
            .register(Box::new(unauthorized_total.clone()))
            .context(error::RegisterMetricSnafu { name: UNAUTHORIZED_TOTAL })?;

        Ok(Self { registry, dispatch_total, unauthorized_total })
    }

    pub fn record_dispatch(&self, kind: &str, outcome: DispatchOutcome) {
        self.dispatch_total.with_label_values(&[kind, outcome.as_str()]).inc();
    }

    pub fn record_unauthorized(&self) { self.unauthorized_total.inc(); }

    #[must_use]
    pub fn dispatch_count(&self, kind: &str, outcome: DispatchOutcome) -> u64 {
        self.dispatch_total.with_label_values(&[kind, outcome.as_str()]).get()
    }

    #[must_use]
    pub fn unauthorized_count(&self) -> u64 { self.unauthorized_total.get() }
}

impl Metrics for DefaultMetrics {
    fn gather(&self) -> Vec<prometheus::proto::MetricFamily> { self.registry.gather() }
}

#[cfg(test)]
mod tests {
    use crate::{DefaultMetrics, DispatchOutcome, Metrics};

    #[test]
    fn test_new() { drop(DefaultMetrics::new().unwrap()); }

    #[test]
    fn test_dispatch_counters_are_labelled() {
        let metrics = DefaultMetrics::new().unwrap();

        metrics.record_dispatch("login_otp", DispatchOutcome::Success);
        metrics.record_dispatch("login_otp", DispatchOutcome::Success);
        metrics.record_dispatch("welcome", DispatchOutcome::Failure);

        assert_eq!(metrics.dispatch_count("login_otp", DispatchOutcome::Success), 2);
        assert_eq!(metrics.dispatch_count("welcome", DispatchOutcome::Failure), 1);
        assert_eq!(metrics.dispatch_count("welcome", DispatchOutcome::Success), 0);
    }

    #[test]
    fn test_gather_exposes_registered_families() {
        let metrics = DefaultMetrics::new().unwrap();
        metrics.record_unauthorized();
        metrics.record_dispatch("welcome", DispatchOutcome::Success);

        let names: Vec<String> =
            metrics.gather().iter().map(|family| family.get_name().to_string()).collect();

        assert!(names.iter().any(|name| name == "notification_gateway_dispatch_total"));
        assert!(names.iter().any(|name| name == "notification_gateway_unauthorized_total"));
        assert_eq!(metrics.unauthorized_count(), 1);
    }
}
