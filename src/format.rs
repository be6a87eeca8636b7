//! Render Formatting Helpers
//!
//! Pure helpers turning history data into display strings. Confidence stays
//! numeric until it reaches these functions.

use chrono::{DateTime, Utc};

/// Long localized date, e.g. "January 1, 2024".
pub fn long_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

/// Confidence percentage as text, without a trailing ".0" for whole values.
pub fn confidence_text(confidence: f64) -> String {
    if confidence.fract() == 0.0 {
        format!("{:.0}", confidence)
    } else {
        format!("{}", confidence)
    }
}

/// Inline style for the proportional confidence bar, width clamped to 0-100.
pub fn confidence_bar_style(confidence: f64) -> String {
    format!("width: {}%", confidence_text(confidence.clamp(0.0, 100.0)))
}

pub fn diagnosis_label(is_coloboma: bool) -> &'static str {
    if is_coloboma {
        "Coloboma Detected"
    } else {
        "No Coloboma Detected"
    }
}

pub fn diagnosis_badge_class(is_coloboma: bool) -> &'static str {
    if is_coloboma {
        "diagnosis-badge positive"
    } else {
        "diagnosis-badge negative"
    }
}

pub fn confidence_bar_class(is_coloboma: bool) -> &'static str {
    if is_coloboma {
        "confidence-fill positive"
    } else {
        "confidence-fill negative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_long_date() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(long_date(&ts), "January 1, 2024");

        let ts = Utc.with_ymd_and_hms(2023, 11, 23, 15, 30, 0).unwrap();
        assert_eq!(long_date(&ts), "November 23, 2023");
    }

    #[test]
    fn test_confidence_text() {
        assert_eq!(confidence_text(87.0), "87");
        assert_eq!(confidence_text(87.5), "87.5");
        assert_eq!(confidence_text(0.0), "0");
    }

    #[test]
    fn test_confidence_bar_style_clamps() {
        assert_eq!(confidence_bar_style(87.0), "width: 87%");
        assert_eq!(confidence_bar_style(130.0), "width: 100%");
        assert_eq!(confidence_bar_style(-5.0), "width: 0%");
    }

    #[test]
    fn test_diagnosis_label() {
        assert_eq!(diagnosis_label(true), "Coloboma Detected");
        assert_eq!(diagnosis_label(false), "No Coloboma Detected");
    }
}
