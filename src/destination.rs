//! Destination resolution: splitting raw input into a place part and a
//! time part, then assembling the resolved descriptor.

use crate::api::Context;
use crate::rules::era::{Era, format_year};
use crate::rules::place::Place;
use crate::rules::time::parse_year;

/// Tokens containing any of these substrings mark where the time portion
/// of the input begins.
const TIME_INDICATORS: &[&str] = &["bc", "bce", "ad", "ce", "year", "ago", "future", "now"];

/// The resolved (place, year, era) triple for one user query.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    /// Original input text, verbatim.
    pub raw_input: String,
    pub place: Place,
    /// Signed year; negative = BC/BCE, non-negative = AD/CE.
    pub year: i64,
    pub era: Era,
    pub formatted_year: String,
}

impl Destination {
    /// Resolve free text into a destination.
    ///
    /// Total over all inputs, including the empty string: unparseable text
    /// degrades to an unknown place in the context's reference year.
    ///
    /// The year is parsed from the full raw input, not just the post-split
    /// substring; the year rules are resilient to place prefixes.
    pub fn resolve(input: &str, context: &Context) -> Destination {
        let trimmed = input.trim();
        let year = parse_year(trimmed, context).unwrap_or(context.reference_year);

        let words: Vec<&str> = trimmed.split_whitespace().collect();

        // The last matching token wins: a place token that happens to
        // contain a time substring ("france" contains "ce") is overridden
        // by a later, real time token.
        let mut time_index = None;
        for (index, word) in words.iter().enumerate() {
            let lowered = word.to_lowercase();
            let is_digits = word.chars().all(|c| c.is_ascii_digit());
            if is_digits || TIME_INDICATORS.iter().any(|indicator| lowered.contains(indicator)) {
                time_index = Some(index);
            }
        }

        let place_part = match time_index {
            Some(index) => {
                let before = words[..index].join(" ");
                if before.trim().is_empty() { words[0].to_string() } else { before }
            }
            None => trimmed.to_string(),
        };

        Destination {
            raw_input: input.to_string(),
            place: Place::parse(&place_part),
            year,
            era: Era::of(year),
            formatted_year: format_year(year),
        }
    }
}
