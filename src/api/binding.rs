use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::AnnotatorResult;

use super::annotator::recompute_totals;
use super::registry::ChartRegistry;
use super::scheduler::SettleQueue;
use super::TotalsAnnotatorConfig;

/// Plotting-library events the annotator subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// Fired after every redraw of the chart.
    AfterPlot,
    /// Single click on a legend entry.
    LegendClick,
    /// Double click on a legend entry.
    LegendDoubleClick,
}

/// Keeps per-category total labels in sync with legend visibility.
///
/// The annotator binds once to the configured chart ids on page-ready and is
/// never unbound. Redraws recompute immediately; legend clicks defer the
/// recompute by the configured settle delay because the plotting library
/// applies the visibility toggle asynchronously relative to the click. The
/// host's event loop drives everything: it forwards events through
/// [`TotalsAnnotator::handle_event`] and pumps the settle queue with
/// [`TotalsAnnotator::run_due`].
#[derive(Debug, Clone)]
pub struct TotalsAnnotator {
    config: TotalsAnnotatorConfig,
    queue: SettleQueue,
    bound: Vec<String>,
}

impl TotalsAnnotator {
    pub fn new(config: TotalsAnnotatorConfig) -> AnnotatorResult<Self> {
        Ok(Self {
            config: config.validate()?,
            queue: SettleQueue::new(),
            bound: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &TotalsAnnotatorConfig {
        &self.config
    }

    /// Binds to every configured chart present in the registry.
    ///
    /// Configured ids without a chart element are skipped silently, matching
    /// pages that render only a subset of the known containers.
    pub fn bind(&mut self, registry: &ChartRegistry) {
        for id in &self.config.chart_ids {
            if !registry.contains(id) {
                debug!(chart_id = %id, "chart container absent, skipping bind");
                continue;
            }
            if !self.bound.contains(id) {
                self.bound.push(id.clone());
            }
        }
    }

    #[must_use]
    pub fn is_bound(&self, chart_id: &str) -> bool {
        self.bound.iter().any(|id| id == chart_id)
    }

    #[must_use]
    pub fn bound_ids(&self) -> &[String] {
        &self.bound
    }

    /// Number of recomputations waiting for their settle delay to elapse.
    #[must_use]
    pub fn pending_recomputes(&self) -> usize {
        self.queue.len()
    }

    /// Forwards one chart event, recomputing now or scheduling a deferred
    /// recompute. Events for unbound ids are ignored.
    pub fn handle_event(
        &mut self,
        registry: &mut ChartRegistry,
        chart_id: &str,
        event: ChartEvent,
        now_ms: u64,
    ) {
        if !self.is_bound(chart_id) {
            trace!(chart_id, ?event, "event for unbound chart ignored");
            return;
        }

        match event {
            ChartEvent::AfterPlot => self.recompute_chart(registry, chart_id),
            ChartEvent::LegendClick | ChartEvent::LegendDoubleClick => {
                let due_at_ms = now_ms.saturating_add(self.config.legend_settle_delay_ms);
                self.queue.schedule(chart_id, due_at_ms);
            }
        }
    }

    /// Runs every deferred recompute whose settle delay has elapsed.
    ///
    /// Entries whose chart was removed in the meantime are dropped silently;
    /// the guard inside the recompute covers charts that emptied out.
    pub fn run_due(&mut self, registry: &mut ChartRegistry, now_ms: u64) {
        for entry in self.queue.drain_due(now_ms) {
            self.recompute_chart(registry, &entry.chart_id);
        }
    }

    fn recompute_chart(&self, registry: &mut ChartRegistry, chart_id: &str) {
        let Some(chart) = registry.get_mut(chart_id) else {
            trace!(chart_id, "chart handle stale, skipping recompute");
            return;
        };
        recompute_totals(chart, &self.config);
    }
}
