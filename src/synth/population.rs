//! Exponential world-population model with local density multipliers.

use crate::rules::place::{Place, Terrain};

/// Base world population for a year: constant floors deep in prehistory,
/// exponential segments through history, a post-scarcity ceiling beyond.
///
/// The curve steps down at the BC/AD seam (the pre-AD segment overshoots
/// approaching year 0); within each segment it is non-decreasing.
pub(crate) fn base_population(year: i64) -> i64 {
    let y = year as f64;

    if year < -50_000 {
        100
    } else if year < -10_000 {
        1_000
    } else if year < -3_000 {
        50_000
    } else if year < 0 {
        (170_000_000.0 * ((y + 3_000.0) / 2_000.0).exp()).floor() as i64
    } else if year < 1_900 {
        (400_000_000.0 * ((y - 1_500.0) / 400.0).exp()).floor() as i64
    } else if year < 2_024 {
        (1_600_000_000.0 * ((y - 1_900.0) / 100.0).exp()).floor() as i64
    } else if year < 3_000 {
        (8_000_000_000.0 * ((y - 2_024.0) / 500.0).exp()).floor() as i64
    } else if year < 5_000 {
        20_000_000_000
    } else {
        // Post-scarcity, distributed populations.
        50_000_000_000
    }
}

pub(crate) fn generate(year: i64, place: &Place) -> String {
    // Urban density is an assignment, not a product; the terrain
    // multipliers then compound on top of it.
    let mut multiplier = 1.0;
    if place.is_urban {
        multiplier = 0.1;
    }
    if place.terrain == Terrain::Desert {
        multiplier *= 0.3;
    }
    if place.terrain == Terrain::Arctic {
        multiplier *= 0.1;
    }
    if place.terrain == Terrain::Mountain {
        multiplier *= 0.5;
    }

    let local = (base_population(year) as f64 * multiplier).floor() as i64;

    if year < -10_000 {
        "Small tribal groups (50-200)".to_string()
    } else if year < 0 {
        format!("~{} inhabitants", group_thousands(local))
    } else if year > 10_000 {
        format!("{:.1}M (post-scarcity society)", local as f64 / 1_000_000.0)
    } else {
        format!("~{} people", group_thousands(local))
    }
}

/// Comma-group a non-negative integer: `1234567` renders as `"1,234,567"`.
pub(crate) fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_segments() {
        assert_eq!(base_population(-60_000), 100);
        assert_eq!(base_population(-50_001), 100);
        assert_eq!(base_population(-50_000), 1_000);
        assert_eq!(base_population(-10_001), 1_000);
        assert_eq!(base_population(-10_000), 50_000);
        assert_eq!(base_population(-3_001), 50_000);
        assert_eq!(base_population(3_000), 20_000_000_000);
        assert_eq!(base_population(4_999), 20_000_000_000);
        assert_eq!(base_population(5_000), 50_000_000_000);
        assert_eq!(base_population(1_000_000_000), 50_000_000_000);
    }

    #[test]
    fn exponential_segment_anchors() {
        // Each exponential segment hits its coefficient where the exponent
        // is zero.
        assert_eq!(base_population(-3_000), 170_000_000);
        assert_eq!(base_population(1_500), 400_000_000);
        assert_eq!(base_population(1_900), 1_600_000_000);
        assert_eq!(base_population(2_024), 8_000_000_000);
    }

    #[test]
    fn non_decreasing_within_each_segment_below_2024() {
        let segments: Vec<(i64, i64)> = vec![
            (-80_000, -50_001),
            (-50_000, -10_001),
            (-10_000, -3_001),
            (-3_000, -1),
            (0, 1_899),
            (1_900, 2_023),
        ];

        for (start, end) in segments {
            let mut previous = base_population(start);
            let step = ((end - start) / 40).max(1);
            let mut year = start;
            while year <= end {
                let current = base_population(year);
                assert!(current >= previous, "year: {year}");
                previous = current;
                year += step;
            }
        }
    }

    #[test]
    fn growth_resumes_upward_at_the_later_seams() {
        assert!(base_population(1_900) > base_population(1_899));
        assert!(base_population(2_024) > base_population(2_023));
    }

    #[test]
    fn formatting_branches() {
        let nowhere = Place::parse("xyzzy");

        assert_eq!(generate(-20_000, &nowhere), "Small tribal groups (50-200)");
        assert_eq!(generate(-3_000, &nowhere), "~170,000,000 inhabitants");
        assert_eq!(generate(1_500, &nowhere), "~400,000,000 people");
        assert_eq!(generate(4_000, &nowhere), "~20,000,000,000 people");
        assert_eq!(generate(6_000, &nowhere), "~50,000,000,000 people");
        assert_eq!(generate(20_000, &nowhere), "50000.0M (post-scarcity society)");
    }

    #[test]
    fn density_multipliers_compound() {
        // Urban alone: x0.1.
        let city = Place::parse("xyzzy city");
        assert_eq!(generate(4_000, &city), "~2,000,000,000 people");

        // Urban in the desert: 0.1 x 0.3.
        let desert_city = Place::parse("desert city");
        assert_eq!(generate(4_000, &desert_city), "~600,000,000 people");

        // Arctic terrain alone: x0.1.
        let arctic = Place::parse("Siberia");
        assert_eq!(generate(4_000, &arctic), "~2,000,000,000 people");

        // Mountain terrain alone: x0.5.
        let mountain = Place::parse("mountain pass");
        assert_eq!(generate(4_000, &mountain), "~10,000,000,000 people");
    }

    #[test]
    fn groups_thousands_with_commas() {
        let cases: Vec<(&str, i64)> = vec![
            ("0", 0),
            ("7", 7),
            ("999", 999),
            ("1,000", 1_000),
            ("50,000", 50_000),
            ("170,000,000", 170_000_000),
            ("8,000,000,000", 8_000_000_000),
        ];

        for (expected, value) in cases {
            assert_eq!(group_thousands(value), expected, "value: {value}");
        }
    }
}
