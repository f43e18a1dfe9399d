use serde::Serialize;

use crate::models::Category;

/// Inclusive points band a reviewer is steered towards for a category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PointsRange {
    pub min: u32,
    pub max: u32,
}

impl PointsRange {
    /// Midpoint rounded half-up, used to prefill the review form.
    pub fn suggested(&self) -> u32 {
        (self.min + self.max + 1) / 2
    }
}

/// Applies to any category label the table does not know.
pub const DEFAULT_POINTS_RANGE: PointsRange = PointsRange { min: 10, max: 50 };

pub fn points_range(category: Category) -> PointsRange {
    let (min, max) = match category {
        Category::Academic => (50, 100),
        Category::Technical => (30, 80),
        Category::Extracurricular => (20, 60),
        Category::Sports => (25, 70),
        Category::Cultural => (15, 50),
        Category::Social => (10, 40),
    };
    PointsRange { min, max }
}

/// Looks up a free-form category label, falling back to `DEFAULT_POINTS_RANGE`.
pub fn points_range_for_label(label: &str) -> PointsRange {
    label
        .parse::<Category>()
        .map(points_range)
        .unwrap_or(DEFAULT_POINTS_RANGE)
}

/// Lenient points parse: leading digits are taken, anything else is 0.
/// Negative input is clamped to 0.
pub fn parse_points(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return 0;
    }
    let digits: String = trimmed
        .trim_start_matches('+')
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_points_are_rounded_midpoints() {
        assert_eq!(points_range(Category::Academic).suggested(), 75);
        assert_eq!(points_range(Category::Technical).suggested(), 55);
        assert_eq!(points_range(Category::Sports).suggested(), 48);
        assert_eq!(points_range(Category::Cultural).suggested(), 33);
        assert_eq!(DEFAULT_POINTS_RANGE.suggested(), 30);
    }

    #[test]
    fn test_unknown_label_uses_default_range() {
        assert_eq!(points_range_for_label("robotics"), DEFAULT_POINTS_RANGE);
        assert_eq!(
            points_range_for_label("Social"),
            PointsRange { min: 10, max: 40 }
        );
    }

    #[test]
    fn test_parse_points_coerces_garbage_to_zero() {
        assert_eq!(parse_points("50"), 50);
        assert_eq!(parse_points(" 42 "), 42);
        assert_eq!(parse_points("12abc"), 12);
        assert_eq!(parse_points("abc"), 0);
        assert_eq!(parse_points(""), 0);
        assert_eq!(parse_points("-5"), 0);
        assert_eq!(parse_points("99999999999999"), 0);
    }
}
