//! Year extraction rules: BC/AD markers, "year N", relative offsets and
//! bare numbers.

use crate::api::Context;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A year-extraction rule: a name, a pattern and a production that turns
/// the captures into a signed year.
///
/// Rules are tried in declaration order against the trimmed input and the
/// first rule whose pattern matches wins, so absolute calendar markers must
/// be declared before relative offsets ("3000 BC" is never read as a bare
/// number or a shift from the reference year).
struct YearRule {
    name: &'static str,
    pattern: &'static Regex,
    produce: fn(&Captures, &Context) -> Option<i64>,
}

static YEAR_RULES: Lazy<Vec<YearRule>> = Lazy::new(rules);

fn rules() -> Vec<YearRule> {
    vec![
        // "400 BC", "2500BCE"
        YearRule {
            name: "<digits> BC|BCE",
            pattern: regex!(r"(?i)(\d+)\s*(bc|bce)"),
            produce: |caps: &Captures, _: &Context| Some(-digits(caps, 1)?),
        },
        // "1850 AD", "79 CE"
        YearRule {
            name: "<digits> AD|CE",
            pattern: regex!(r"(?i)(\d+)\s*(ad|ce)"),
            produce: |caps: &Captures, _: &Context| digits(caps, 1),
        },
        // "year 1500"
        YearRule {
            name: "year <digits>",
            pattern: regex!(r"(?i)year\s*(\d+)"),
            produce: |caps: &Captures, _: &Context| digits(caps, 1),
        },
        // "500 years ago"
        YearRule {
            name: "<digits> years ago",
            pattern: regex!(r"(?i)(\d+)\s*years?\s*ago"),
            produce: |caps: &Captures, ctx: &Context| Some(ctx.reference_year - digits(caps, 1)?),
        },
        // "100 years from now", "30 years in the future"
        YearRule {
            name: "<digits> years from now|in the future",
            pattern: regex!(r"(?i)(\d+)\s*years?\s*(from now|in the future)"),
            produce: |caps: &Captures, ctx: &Context| Some(ctx.reference_year + digits(caps, 1)?),
        },
        // Input that is nothing but digits. Values up to 2000 read as BC,
        // larger values as AD: a bare "50" means 50 BC, a bare "2050"
        // means 2050 AD.
        YearRule {
            name: "bare number",
            pattern: regex!(r"^(\d+)$"),
            produce: |caps: &Captures, _: &Context| {
                let n = digits(caps, 1)?;
                Some(if n > 2000 { n } else { -n })
            },
        },
    ]
}

fn digits(caps: &Captures, group: usize) -> Option<i64> {
    caps.get(group)?.as_str().parse().ok()
}

/// Extract a signed year from free text. Negative = BC/BCE, non-negative =
/// AD/CE.
///
/// Returns `None` when no rule matches; callers supply the context's
/// reference year as the default rather than treating absence as an error.
/// The scan is resilient to place prefixes ("Athens 400 BC" parses fine).
pub fn parse_year(text: &str, context: &Context) -> Option<i64> {
    let normalized = text.trim();

    for rule in YEAR_RULES.iter() {
        if let Some(caps) = rule.pattern.captures(normalized) {
            if let Some(year) = (rule.produce)(&caps, context) {
                if std::env::var_os("CHRONOPORT_DEBUG_RULES").is_some() {
                    eprintln!("[rule:matched] name=\"{}\" year={year}", rule.name);
                }
                return Some(year);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context { reference_year: 2024 }
    }

    #[test]
    fn year_examples_matching() {
        // Array of (expected_year, input_string)
        let cases: Vec<(i64, &str)> = vec![
            (-3000, "3000 BC"),
            (-3000, "3000BC"),
            (-400, "400 bce"),
            (-44, "Rome 44 BC"),
            (1850, "1850 AD"),
            (79, "Pompeii 79 ce"),
            (1500, "year 1500"),
            (1500, "Year 1500"),
            (1066, "the year 1066"),
            (1524, "500 years ago"),
            (1024, "1000 years ago"),
            (2124, "100 years from now"),
            (2054, "30 years in the future"),
            (2074, "50 year from now"),
            (-50, "50"),
            (-2000, "2000"),
            (2050, "2050"),
            (2001, "2001"),
            (-400, "Athens 400 BC"),
            (3000, "Tokyo 3000 AD"),
        ];

        for (expected, input) in cases {
            assert_eq!(parse_year(input, &ctx()), Some(expected), "input: {input:?}");
        }
    }

    #[test]
    fn absolute_markers_beat_relative_offsets() {
        // "3000 BC" and "3000 AD" must never fall through to the relative
        // or bare-number rules.
        assert_eq!(parse_year("3000 BC", &ctx()), Some(-3000));
        assert_eq!(parse_year("3000 AD", &ctx()), Some(3000));
        // The relative rule only fires when no calendar marker matched.
        assert_eq!(parse_year("3000 years ago", &ctx()), Some(2024 - 3000));
    }

    #[test]
    fn unparseable_input_is_absent_not_an_error() {
        let cases = ["", "   ", "Athens", "sometime nice", "minus 500", "100 Rome"];
        for input in cases {
            assert_eq!(parse_year(input, &ctx()), None, "input: {input:?}");
        }
    }

    #[test]
    fn bare_number_rule_requires_digits_only() {
        // Mixed tokens never reach the bare-number heuristic.
        assert_eq!(parse_year("50 doves", &ctx()), None);
        assert_eq!(parse_year("cell 50", &ctx()), None);
    }

    #[test]
    fn relative_offsets_use_the_reference_year() {
        let earlier = Context { reference_year: 1900 };
        assert_eq!(parse_year("500 years ago", &earlier), Some(1400));
        assert_eq!(parse_year("500 years from now", &earlier), Some(2400));
    }
}
