/// Numeric reading of one food's score text.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Value(f64),
    /// The text was present but is not a finite number.
    Malformed(String),
}

impl Reading {
    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(*v),
            Reading::Malformed(_) => None,
        }
    }

    /// Malformed readings count as zero toward a total.
    pub fn value_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Reading::Malformed(_))
    }
}

/// Coerce score text to a number.
///
/// Surrounding whitespace is ignored and blank text reads as zero. Anything
/// that does not parse to a finite float is reported as malformed.
pub fn parse_score(text: &str) -> Reading {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Reading::Value(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Reading::Value(v),
        _ => Reading::Malformed(trimmed.to_string()),
    }
}

/// Text shown on the display element for a total.
///
/// A sum of finite scores can still overflow; it is shown as `Infinity` or
/// `-Infinity`. A sum of finite values never becomes NaN.
pub fn format_total(total: f64) -> String {
    if total == 0.0 {
        // Avoids printing "-0".
        "0".to_string()
    } else if total == f64::INFINITY {
        "Infinity".to_string()
    } else if total == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        total.to_string()
    }
}
