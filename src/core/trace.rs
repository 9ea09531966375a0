use serde::{Deserialize, Serialize};

/// Series type tag as reported by the plotting library.
///
/// Anything that is not a bar or scatter series maps to `Other`; such charts
/// are never annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    #[default]
    Bar,
    Scatter,
    #[serde(other)]
    Other,
}

/// Per-trace display state toggled through the chart legend.
///
/// Totals aggregation excludes only `LegendOnly`. A trace hidden outright
/// (`visible: false` in the plotting library) still contributes, matching the
/// legend-filter the host page relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    LegendOnly,
    Hidden,
}

/// One data series: a type tag, a visibility state, ordered category keys and
/// a parallel sequence of values.
///
/// Keys are not required to be unique across traces; they align positionally
/// with values within one trace. A `None` value models a missing point and
/// contributes zero to totals, as does any key position past the end of `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub kind: TraceKind,
    #[serde(default)]
    pub visibility: Visibility,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Trace {
    #[must_use]
    pub fn new(kind: TraceKind) -> Self {
        Self {
            kind,
            visibility: Visibility::Visible,
            x: Vec::new(),
            y: Vec::new(),
            name: None,
        }
    }

    /// Bar trace over category keys with every value present.
    #[must_use]
    pub fn bar<K: Into<String>>(keys: impl IntoIterator<Item = K>, values: &[f64]) -> Self {
        let mut trace = Self::new(TraceKind::Bar);
        trace.x = keys.into_iter().map(Into::into).collect();
        trace.y = values.iter().copied().map(Some).collect();
        trace
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Value at key position `index`, with missing points read as zero.
    #[must_use]
    pub fn value_at(&self, index: usize) -> f64 {
        self.y.get(index).copied().flatten().unwrap_or(0.0)
    }

    /// Whether the trace carries any category keys.
    ///
    /// Aggregation walks the keys; a trace without keys contributes nothing.
    /// Values are read per key position, so an empty `y` still yields a
    /// zero-valued entry for every key.
    #[must_use]
    pub fn has_keys(&self) -> bool {
        !self.x.is_empty()
    }
}
