use serde::{Deserialize, Serialize};

/// Label locale for totals text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LabelLocale {
    EnUs,
    #[default]
    EsEs,
}

impl LabelLocale {
    const fn grouping_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }

    /// CLDR leaves a bare 4-digit integer ungrouped for es-ES, so `1234`
    /// renders without a separator while `12345` becomes `12.345`.
    const fn min_grouped_digits(self) -> usize {
        match self {
            Self::EnUs => 4,
            Self::EsEs => 5,
        }
    }
}

/// Formats a total as an integer with locale grouping separators.
///
/// The value is truncated toward zero before grouping. Non-finite input
/// formats as `"nan"`.
#[must_use]
pub fn format_grouped_integer(value: f64, locale: LabelLocale) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let truncated = value.trunc() as i64;
    let digits = truncated.unsigned_abs().to_string();

    let grouped = if digits.len() < locale.min_grouped_digits() {
        digits
    } else {
        group_thousands(&digits, locale.grouping_separator())
    };

    if truncated < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (index, ch) in digits.char_indices() {
        if index != 0 && index % 3 == lead {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
