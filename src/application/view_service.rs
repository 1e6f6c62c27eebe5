// View service - Use case for rendering one chart over a date window
use crate::domain::registry::ChartRegistry;
use crate::domain::series::{default_range, filter, DateRange};
use crate::domain::view::ChartView;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct ChartViewService {
    registry: Arc<RwLock<ChartRegistry>>,
}

impl ChartViewService {
    pub fn new(registry: Arc<RwLock<ChartRegistry>>) -> Self {
        Self { registry }
    }

    /// Resolve a chart by name and window its series.
    ///
    /// An unknown or missing name falls back to the first chart; `None` means
    /// the registry is empty. Explicit bounds override the matching bound of
    /// the series' full span.
    pub async fn view(
        &self,
        name: Option<&str>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<ChartView> {
        let registry = self.registry.read().await;
        if registry.is_empty() {
            tracing::debug!("No charts to view");
            return None;
        }
        let chart = name
            .and_then(|n| registry.find_by_name(n))
            .or_else(|| registry.list().first())?;

        let full = default_range(&chart.series);
        let range = match (start.or(full.map(|r| r.start)), end.or(full.map(|r| r.end))) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        };
        let points = range
            .map(|r| filter(&chart.series, r.start, r.end))
            .unwrap_or_default();

        tracing::debug!(
            "View {:?}: {} of {} points in {:?}",
            chart.name,
            points.len(),
            chart.series.len(),
            range
        );

        Some(ChartView::new(chart, full, range, points))
    }
}
