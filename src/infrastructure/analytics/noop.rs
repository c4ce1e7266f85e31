use crate::domain::ports::analytics::{AnalyticsEvent, AnalyticsSink};

pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn emit(&self, _event: &AnalyticsEvent) {}
}
