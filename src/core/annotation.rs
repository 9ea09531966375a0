use serde::{Deserialize, Serialize};

/// Who placed an annotation on the chart.
///
/// Pruning before each recomputation removes exactly the `ComputedTotal`
/// annotations. Host-page annotations default to `User` on deserialization,
/// so they survive recomputation regardless of their text or pixel shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationOrigin {
    #[default]
    User,
    ComputedTotal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationFont {
    pub size: f64,
    pub color: String,
}

impl Default for AnnotationFont {
    fn default() -> Self {
        Self {
            size: 10.0,
            color: "black".to_owned(),
        }
    }
}

/// A text label overlaid on the chart at a category/value coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: String,
    pub y: f64,
    pub text: String,
    #[serde(default)]
    pub font: AnnotationFont,
    #[serde(default)]
    pub show_arrow: bool,
    #[serde(default)]
    pub y_shift: f64,
    #[serde(default)]
    pub origin: AnnotationOrigin,
}

impl Annotation {
    /// Host-owned annotation; never touched by totals recomputation.
    #[must_use]
    pub fn user(x: impl Into<String>, y: f64, text: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y,
            text: text.into(),
            font: AnnotationFont::default(),
            show_arrow: false,
            y_shift: 0.0,
            origin: AnnotationOrigin::User,
        }
    }

    /// Totals label owned by this crate; replaced on every recomputation.
    #[must_use]
    pub fn computed_total(
        x: impl Into<String>,
        y: f64,
        text: impl Into<String>,
        font: AnnotationFont,
        y_shift: f64,
    ) -> Self {
        Self {
            x: x.into(),
            y,
            text: text.into(),
            font,
            show_arrow: false,
            y_shift,
            origin: AnnotationOrigin::ComputedTotal,
        }
    }

    #[must_use]
    pub fn with_y_shift(mut self, y_shift: f64) -> Self {
        self.y_shift = y_shift;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: AnnotationFont) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn is_computed_total(&self) -> bool {
        self.origin == AnnotationOrigin::ComputedTotal
    }
}
