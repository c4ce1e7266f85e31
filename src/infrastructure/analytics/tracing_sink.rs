use crate::domain::ports::analytics::{AnalyticsEvent, AnalyticsSink};

/// Writes events to the `analytics` tracing target, one structured line each.
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn emit(&self, event: &AnalyticsEvent) {
        tracing::info!(
            target: "analytics",
            event = event.name(),
            params = %event.params(),
            "analytics event"
        );
    }
}
