//! Build-time totals for freshly constructed figures.
//!
//! The host dashboard stamps totals onto a figure when it is built, before
//! any legend interaction happens. Those labels carry the computed-total
//! origin, so the first event-driven recomputation replaces them exactly.

use tracing::debug;

use crate::core::{Annotation, Chart, TraceKind};

use super::TotalsAnnotatorConfig;

/// Appends one totals annotation per category to a freshly built bar chart.
///
/// Unlike [`super::recompute_totals`] this runs before any legend toggle, so
/// it aggregates over every trace and does not prune. Charts without bar
/// data are left untouched.
pub fn seed_totals(chart: &mut Chart, config: &TotalsAnnotatorConfig) {
    if chart.data.first().map(|trace| trace.kind) != Some(TraceKind::Bar) {
        return;
    }

    let totals = super::annotator::totals_for_traces(chart.data.iter());
    if totals.is_empty() {
        return;
    }
    debug!(categories = totals.len(), "seeded build-time totals");

    chart
        .layout
        .annotations
        .extend(super::annotator::synthesize_totals(&totals, config));
}

/// Centered placeholder the host shows when a figure has no rows.
///
/// The annotation is user-origin, so it survives totals recomputation.
#[must_use]
pub fn no_data_placeholder(text: impl Into<String>) -> Annotation {
    Annotation::user("0.5", 0.5, text)
}
