use prometheus::proto::MetricFamily;

/// Source of metric families exposed by the metrics server.
pub trait Metrics: Clone + Send + Sync {
    fn gather(&self) -> Vec<MetricFamily>;
}
