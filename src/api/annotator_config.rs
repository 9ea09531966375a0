use serde::{Deserialize, Serialize};

use crate::core::{AnnotationFont, LabelLocale};
use crate::error::{AnnotatorError, AnnotatorResult};

/// Totals annotator bootstrap configuration.
///
/// This type is serializable so host pages can persist/load annotator setup
/// without inventing their own ad-hoc format. The chart id list is explicit
/// configuration rather than a hard-coded global set; absent ids are skipped
/// silently at bind time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsAnnotatorConfig {
    pub chart_ids: Vec<String>,
    #[serde(default = "default_legend_settle_delay_ms")]
    pub legend_settle_delay_ms: u64,
    #[serde(default)]
    pub label_font: AnnotationFont,
    #[serde(default = "default_label_y_shift")]
    pub label_y_shift: f64,
    #[serde(default)]
    pub locale: LabelLocale,
}

impl TotalsAnnotatorConfig {
    #[must_use]
    pub fn new<I: Into<String>>(chart_ids: impl IntoIterator<Item = I>) -> Self {
        Self {
            chart_ids: chart_ids.into_iter().map(Into::into).collect(),
            legend_settle_delay_ms: default_legend_settle_delay_ms(),
            label_font: AnnotationFont::default(),
            label_y_shift: default_label_y_shift(),
            locale: LabelLocale::default(),
        }
    }

    /// The four chart containers of the provider dashboard this crate was
    /// extracted from.
    #[must_use]
    pub fn dashboard_default() -> Self {
        Self::new([
            "units-all-chart",
            "units-no-cenabast-chart",
            "sales-all-chart",
            "sales-no-cenabast-chart",
        ])
    }

    /// Sets the wait applied after legend clicks before recomputing.
    ///
    /// The plotting library applies legend visibility toggles asynchronously
    /// relative to the click event; the recompute must observe the
    /// post-toggle state, so it is deferred by this settle delay.
    #[must_use]
    pub fn with_legend_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.legend_settle_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_label_font(mut self, font: AnnotationFont) -> Self {
        self.label_font = font;
        self
    }

    #[must_use]
    pub fn with_label_y_shift(mut self, y_shift: f64) -> Self {
        self.label_y_shift = y_shift;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn validate(self) -> AnnotatorResult<Self> {
        if self.chart_ids.is_empty() {
            return Err(AnnotatorError::InvalidConfig(
                "chart id list must not be empty".to_owned(),
            ));
        }
        for (index, id) in self.chart_ids.iter().enumerate() {
            if id.is_empty() {
                return Err(AnnotatorError::InvalidConfig(format!(
                    "chart id at position {index} is empty"
                )));
            }
            if self.chart_ids[..index].contains(id) {
                return Err(AnnotatorError::InvalidConfig(format!(
                    "duplicate chart id `{id}`"
                )));
            }
        }
        if !self.label_y_shift.is_finite() {
            return Err(AnnotatorError::InvalidConfig(
                "label y-shift must be finite".to_owned(),
            ));
        }
        if !self.label_font.size.is_finite() || self.label_font.size <= 0.0 {
            return Err(AnnotatorError::InvalidConfig(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl Default for TotalsAnnotatorConfig {
    fn default() -> Self {
        Self::dashboard_default()
    }
}

fn default_legend_settle_delay_ms() -> u64 {
    100
}

fn default_label_y_shift() -> f64 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::TotalsAnnotatorConfig;

    #[test]
    fn dashboard_default_carries_four_chart_ids() {
        let config = TotalsAnnotatorConfig::dashboard_default();
        assert_eq!(config.chart_ids.len(), 4);
        assert_eq!(config.legend_settle_delay_ms, 100);
        assert!((config.label_y_shift - 10.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_and_duplicate_ids() {
        assert!(
            TotalsAnnotatorConfig::new(Vec::<String>::new())
                .validate()
                .is_err()
        );
        assert!(TotalsAnnotatorConfig::new(["a", ""]).validate().is_err());
        assert!(
            TotalsAnnotatorConfig::new(["a", "b", "a"])
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_rejects_bad_label_geometry() {
        let config = TotalsAnnotatorConfig::new(["chart"]).with_label_y_shift(f64::NAN);
        assert!(config.validate().is_err());

        let mut config = TotalsAnnotatorConfig::new(["chart"]);
        config.label_font.size = 0.0;
        assert!(config.validate().is_err());
    }
}
