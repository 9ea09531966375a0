use approx::assert_relative_eq;
use chart_totals::core::{Chart, Trace, Visibility};
use chart_totals::{ChartEvent, ChartRegistry, TotalsAnnotator, TotalsAnnotatorConfig};

fn dashboard_chart() -> Chart {
    Chart::new(vec![
        Trace::bar(["Jan", "Feb"], &[10.0, 20.0]),
        Trace::bar(["Jan", "Feb"], &[5.0, 0.0]),
    ])
}

fn annotator(ids: &[&str]) -> TotalsAnnotator {
    TotalsAnnotator::new(TotalsAnnotatorConfig::new(ids.iter().copied())).expect("annotator")
}

fn computed_y(chart: &Chart, key: &str) -> f64 {
    chart
        .layout
        .annotations
        .iter()
        .find(|annotation| annotation.is_computed_total() && annotation.x == key)
        .map(|annotation| annotation.y)
        .expect("computed total")
}

#[test]
fn bind_skips_absent_chart_containers() {
    let mut registry = ChartRegistry::new();
    registry.insert("units-all-chart", dashboard_chart());

    let mut annotator =
        TotalsAnnotator::new(TotalsAnnotatorConfig::dashboard_default()).expect("annotator");
    annotator.bind(&registry);

    assert!(annotator.is_bound("units-all-chart"));
    assert!(!annotator.is_bound("sales-all-chart"));
    assert_eq!(annotator.bound_ids().len(), 1);
}

#[test]
fn afterplot_recomputes_immediately() {
    let mut registry = ChartRegistry::new();
    registry.insert("chart", dashboard_chart());

    let mut annotator = annotator(&["chart"]);
    annotator.bind(&registry);
    annotator.handle_event(&mut registry, "chart", ChartEvent::AfterPlot, 0);

    assert_relative_eq!(computed_y(registry.get("chart").expect("chart"), "Jan"), 15.0);
    assert_eq!(annotator.pending_recomputes(), 0);
}

#[test]
fn legend_click_waits_for_the_settle_delay() {
    let mut registry = ChartRegistry::new();
    registry.insert("chart", dashboard_chart());

    let mut annotator = annotator(&["chart"]);
    annotator.bind(&registry);
    annotator.handle_event(&mut registry, "chart", ChartEvent::AfterPlot, 0);

    // The click arrives first; the library toggles visibility shortly after.
    annotator.handle_event(&mut registry, "chart", ChartEvent::LegendClick, 1_000);
    assert_eq!(annotator.pending_recomputes(), 1);

    registry.get_mut("chart").expect("chart").data[1].visibility = Visibility::LegendOnly;

    annotator.run_due(&mut registry, 1_099);
    assert_relative_eq!(computed_y(registry.get("chart").expect("chart"), "Jan"), 15.0);
    assert_eq!(annotator.pending_recomputes(), 1);

    annotator.run_due(&mut registry, 1_100);
    assert_relative_eq!(computed_y(registry.get("chart").expect("chart"), "Jan"), 10.0);
    assert_eq!(annotator.pending_recomputes(), 0);
}

#[test]
fn legend_double_click_also_defers_recompute() {
    let mut registry = ChartRegistry::new();
    registry.insert("chart", dashboard_chart());

    let mut annotator = annotator(&["chart"]);
    annotator.bind(&registry);
    annotator.handle_event(&mut registry, "chart", ChartEvent::LegendDoubleClick, 50);
    assert_eq!(annotator.pending_recomputes(), 1);

    annotator.run_due(&mut registry, 150);
    assert_eq!(annotator.pending_recomputes(), 0);
    assert_relative_eq!(computed_y(registry.get("chart").expect("chart"), "Feb"), 20.0);
}

#[test]
fn events_for_unbound_charts_are_ignored() {
    let mut registry = ChartRegistry::new();
    registry.insert("other-chart", dashboard_chart());

    let mut annotator = annotator(&["chart"]);
    annotator.bind(&registry);
    annotator.handle_event(&mut registry, "other-chart", ChartEvent::LegendClick, 0);
    annotator.handle_event(&mut registry, "missing", ChartEvent::AfterPlot, 0);

    assert_eq!(annotator.pending_recomputes(), 0);
    assert!(
        registry
            .get("other-chart")
            .expect("chart")
            .layout
            .annotations
            .is_empty()
    );
}

#[test]
fn stale_timer_targets_are_skipped_silently() {
    let mut registry = ChartRegistry::new();
    registry.insert("chart", dashboard_chart());

    let mut annotator = annotator(&["chart"]);
    annotator.bind(&registry);
    annotator.handle_event(&mut registry, "chart", ChartEvent::LegendClick, 0);

    // The chart element disappears before the settle delay elapses; the
    // pending entry cannot be cancelled and must be tolerated.
    registry.remove("chart");
    annotator.run_due(&mut registry, 100);

    assert_eq!(annotator.pending_recomputes(), 0);
    assert!(registry.is_empty());
}

#[test]
fn custom_settle_delay_is_honored() {
    let config = TotalsAnnotatorConfig::new(["chart"]).with_legend_settle_delay_ms(250);
    let mut annotator = TotalsAnnotator::new(config).expect("annotator");

    let mut registry = ChartRegistry::new();
    registry.insert("chart", dashboard_chart());
    annotator.bind(&registry);

    annotator.handle_event(&mut registry, "chart", ChartEvent::LegendClick, 0);
    annotator.run_due(&mut registry, 249);
    assert_eq!(annotator.pending_recomputes(), 1);
    annotator.run_due(&mut registry, 250);
    assert_eq!(annotator.pending_recomputes(), 0);
}

#[test]
fn binding_is_permanent_and_rebind_does_not_duplicate() {
    let mut registry = ChartRegistry::new();
    registry.insert("chart", dashboard_chart());

    let mut annotator = annotator(&["chart"]);
    annotator.bind(&registry);
    annotator.bind(&registry);
    assert_eq!(annotator.bound_ids().len(), 1);
}
