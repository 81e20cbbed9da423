// Numeric classification: threshold bands and score meters

use super::{ColorCategory, PresentationToken};
use serde::Serialize;

/// Lower bound of the green confidence bucket (inclusive)
pub const CONFIDENCE_HIGH: f64 = 90.0;
/// Lower bound of the yellow confidence bucket (inclusive)
pub const CONFIDENCE_MEDIUM: f64 = 75.0;

/// A band's inclusive lower boundary and the token for values at or above it
pub type Band = (f64, PresentationToken);

/// AI confidence policy: >=90 green, >=75 yellow, anything else red
pub static CONFIDENCE_BANDS: [Band; 3] = [
    (CONFIDENCE_HIGH, PresentationToken::new(ColorCategory::Green)),
    (CONFIDENCE_MEDIUM, PresentationToken::new(ColorCategory::Yellow)),
    (f64::NEG_INFINITY, PresentationToken::new(ColorCategory::Red)),
];

/// Bucket a score into the first band whose boundary it reaches
///
/// `bands` must be ordered by descending boundary. A value reaching no band,
/// NaN included, gets the neutral token.
pub fn classify_by_threshold(value: f64, bands: &[Band]) -> PresentationToken {
    match bands.iter().find(|(boundary, _)| value >= *boundary) {
        Some((_, token)) => token.clone(),
        None => {
            log::debug!("score {} below every band, using neutral token", value);
            PresentationToken::neutral()
        }
    }
}

pub fn classify_confidence(score: f64) -> PresentationToken {
    classify_by_threshold(score, &CONFIDENCE_BANDS)
}

/// A score drawn as a filled bar (sentiment 2.1/5.0, churn risk 78%)
///
/// The fill is the raw proportion of the scale; there is no bucketing. The
/// color belongs to the card the meter sits on, not to the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreMeter {
    pub value: f64,
    pub scale: f64,
    pub color: ColorCategory,
}

impl ScoreMeter {
    pub const fn new(value: f64, scale: f64, color: ColorCategory) -> Self {
        Self { value, scale, color }
    }

    /// A meter on a 0-100 percentage scale
    pub const fn percent(value: f64, color: ColorCategory) -> Self {
        Self::new(value, 100.0, color)
    }

    /// Filled proportion in percent, clamped to 0..=100
    pub fn fill_percent(&self) -> f64 {
        if !self.value.is_finite() || !self.scale.is_finite() || self.scale <= 0.0 {
            return 0.0;
        }
        (self.value / self.scale * 100.0).clamp(0.0, 100.0)
    }

    /// Number of filled cells when drawn `width` cells wide
    pub fn filled_cells(&self, width: usize) -> usize {
        ((self.fill_percent() / 100.0) * width as f64).round() as usize
    }

    pub fn display_value(&self) -> String {
        if self.scale == 100.0 {
            format!("{}%", self.value)
        } else {
            format!("{:.1}/{:.1}", self.value, self.scale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColorCategory::*;

    #[test]
    fn test_confidence_buckets() {
        assert_eq!(classify_confidence(100.0).color, Green);
        assert_eq!(classify_confidence(95.0).color, Green);
        assert_eq!(classify_confidence(89.0).color, Yellow);
        assert_eq!(classify_confidence(76.0).color, Yellow);
        assert_eq!(classify_confidence(74.0).color, Red);
        assert_eq!(classify_confidence(0.0).color, Red);
    }

    #[test]
    fn test_confidence_boundaries_take_higher_bucket() {
        assert_eq!(classify_confidence(90.0).color, Green);
        assert_eq!(classify_confidence(89.999).color, Yellow);
        assert_eq!(classify_confidence(75.0).color, Yellow);
        assert_eq!(classify_confidence(74.999).color, Red);
    }

    #[test]
    fn test_confidence_tokens_have_no_icon_or_text() {
        for score in [0.0, 75.0, 90.0] {
            let token = classify_confidence(score);
            assert_eq!(token.icon, None);
            assert_eq!(token.text, None);
        }
    }

    #[test]
    fn test_nan_is_neutral() {
        assert!(classify_confidence(f64::NAN).is_neutral());
    }

    #[test]
    fn test_custom_bands_without_floor() {
        let bands = [
            (50.0, PresentationToken::new(Blue)),
            (10.0, PresentationToken::new(Orange)),
        ];
        assert_eq!(classify_by_threshold(60.0, &bands).color, Blue);
        assert_eq!(classify_by_threshold(10.0, &bands).color, Orange);
        assert!(classify_by_threshold(9.0, &bands).is_neutral());
        assert!(classify_by_threshold(1.0, &[]).is_neutral());
    }

    #[test]
    fn test_meter_fill() {
        let sentiment = ScoreMeter::new(2.1, 5.0, Red);
        assert!((sentiment.fill_percent() - 42.0).abs() < 1e-9);
        let engagement = ScoreMeter::new(6.2, 10.0, Blue);
        assert!((engagement.fill_percent() - 62.0).abs() < 1e-9);
        let churn = ScoreMeter::percent(78.0, Yellow);
        assert!((churn.fill_percent() - 78.0).abs() < 1e-9);
    }

    #[test]
    fn test_meter_clamps_and_degenerate_scales() {
        assert_eq!(ScoreMeter::percent(140.0, Green).fill_percent(), 100.0);
        assert_eq!(ScoreMeter::percent(-5.0, Green).fill_percent(), 0.0);
        assert_eq!(ScoreMeter::new(3.0, 0.0, Green).fill_percent(), 0.0);
        assert_eq!(ScoreMeter::new(f64::NAN, 5.0, Green).fill_percent(), 0.0);
    }

    #[test]
    fn test_meter_cells_and_display() {
        let churn = ScoreMeter::percent(78.0, Yellow);
        assert_eq!(churn.filled_cells(20), 16);
        assert_eq!(churn.display_value(), "78%");
        let sentiment = ScoreMeter::new(2.1, 5.0, Red);
        assert_eq!(sentiment.filled_cells(10), 4);
        assert_eq!(sentiment.display_value(), "2.1/5.0");
    }
}
