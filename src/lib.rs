//! chart-totals: legend-aware totals annotations for stacked bar charts.
//!
//! This crate keeps per-category total labels on a chart in sync with the
//! set of currently visible series. It models the host page's chart handles
//! (traces, layout annotations, relayout patches) and reacts to redraw and
//! legend-toggle events by recomputing and replacing the annotations it owns.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartEvent, ChartRegistry, TotalsAnnotator, TotalsAnnotatorConfig};
pub use error::{AnnotatorError, AnnotatorResult};
