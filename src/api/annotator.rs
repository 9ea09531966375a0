use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{
    Annotation, Chart, RelayoutPatch, Trace, TraceKind, Visibility, format_grouped_integer,
};

use super::TotalsAnnotatorConfig;

/// Recomputes per-category totals for `chart` and replaces the annotations
/// this crate owns with fresh ones, in a single relayout commit.
///
/// The routine is fail-silent: a chart with no traces, a first trace that is
/// neither a bar nor a scatter series, or an empty visible set leaves the
/// chart untouched. Scatter charts pass the type guard but receive no
/// computed totals; their stale totals are still pruned.
pub fn recompute_totals(chart: &mut Chart, config: &TotalsAnnotatorConfig) {
    let Some(first) = chart.data.first() else {
        trace!("skipping totals recompute: chart has no traces");
        return;
    };
    if first.kind != TraceKind::Bar && first.kind != TraceKind::Scatter {
        trace!(kind = ?first.kind, "skipping totals recompute: unsupported chart type");
        return;
    }

    let visible: Vec<_> = chart
        .data
        .iter()
        .filter(|trace| trace.visibility != Visibility::LegendOnly)
        .collect();
    if visible.is_empty() {
        trace!("skipping totals recompute: every trace is legend-only");
        return;
    }

    let mut annotations: Vec<Annotation> = chart
        .layout
        .annotations
        .iter()
        .filter(|annotation| !annotation.is_computed_total())
        .cloned()
        .collect();

    // Aggregation is bar-only; scatter charts end up with totals cleared.
    if first.kind == TraceKind::Bar {
        let totals = totals_for_traces(visible.into_iter());
        debug!(categories = totals.len(), "recomputed bar totals");
        annotations.extend(synthesize_totals(&totals, config));
    }

    chart.relayout(RelayoutPatch::annotations(annotations));
}

/// Sums values per category key across `traces`, in first-appearance order.
///
/// Traces without keys are skipped; missing values count as zero, so a keyed
/// trace with no values still creates a zero entry per key.
#[must_use]
pub fn totals_for_traces<'a>(traces: impl Iterator<Item = &'a Trace>) -> IndexMap<String, f64> {
    let mut totals = IndexMap::new();
    for trace in traces {
        if !trace.has_keys() {
            continue;
        }
        for (index, key) in trace.x.iter().enumerate() {
            let entry = totals.entry(key.clone()).or_insert(0.0);
            *entry += trace.value_at(index);
        }
    }
    totals
}

pub(super) fn synthesize_totals<'a>(
    totals: &'a IndexMap<String, f64>,
    config: &'a TotalsAnnotatorConfig,
) -> impl Iterator<Item = Annotation> + 'a {
    totals.iter().map(|(key, &total)| {
        Annotation::computed_total(
            key.clone(),
            total,
            format_grouped_integer(total, config.locale),
            config.label_font.clone(),
            config.label_y_shift,
        )
    })
}
