//! Fallback data synthesis: procedural weather, language, population and
//! life-expectancy strings, used when the remote prediction service is
//! unreachable or returns malformed data.

pub(crate) mod language;
pub(crate) mod lifespan;
pub(crate) mod population;
pub(crate) mod weather;

use crate::rules::era::Era;
use crate::rules::place::Place;
use serde::{Deserialize, Serialize};

/// The four narrative fields describing life at a destination.
///
/// These are deliberately human-readable strings, not structured units:
/// the domain is narrative, not measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraData {
    pub weather: String,
    pub language: String,
    pub population: String,
    pub life_expectancy: String,
}

/// Generate era data for a year and place.
///
/// Total over all integer years: every branch has a terminal default, so
/// even extreme years produce a syntactically valid result. Weather and
/// language pick one of a fixed candidate list at random; population and
/// life expectancy are pure functions of the inputs.
pub fn synthesize(year: i64, place: &Place) -> EraData {
    let era = Era::of(year);

    EraData {
        weather: weather::generate(era, place),
        language: language::generate(era),
        population: population::generate(year, place),
        life_expectancy: lifespan::generate(year),
    }
}
