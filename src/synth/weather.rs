//! Terrain- and era-conditioned weather phrases.

use crate::rules::era::Era;
use crate::rules::place::{Place, Region, Terrain};
use rand::seq::IndexedRandom;

const ARCTIC: &[&str] = &["Freezing", "Icy winds", "Snowfall", "Blizzard", "Extreme cold"];
const DESERT: &[&str] = &["Scorching heat", "Dry", "Sandstorm", "Blistering sun", "Arid"];
const TROPICAL: &[&str] = &["Humid", "Monsoon", "Tropical storm", "Hot and wet", "Rainforest humidity"];
const TEMPERATE: &[&str] = &["Mild", "Partly cloudy", "Gentle breeze", "Clear skies", "Seasonal"];
const MOUNTAIN: &[&str] = &["Thin air", "Crisp and cold", "Mountain winds", "Variable", "Brisk"];
const COASTAL: &[&str] = &["Ocean breeze", "Misty", "Salt air", "Moderate", "Temperate maritime"];

/// Candidate list for a place, chosen by priority: arctic (terrain or
/// region), desert (terrain or region), tropical latitudes, mountain,
/// coastal, else temperate.
pub(crate) fn candidates(place: &Place) -> &'static [&'static str] {
    if place.terrain == Terrain::Arctic || place.region == Region::Arctic {
        ARCTIC
    } else if place.terrain == Terrain::Desert || place.region == Region::Desert {
        DESERT
    } else if place.latitude < 20.0 && place.latitude > -20.0 {
        TROPICAL
    } else if place.terrain == Terrain::Mountain {
        MOUNTAIN
    } else if place.terrain == Terrain::Coastal || place.is_coastal {
        COASTAL
    } else {
        TEMPERATE
    }
}

pub(crate) fn generate(era: Era, place: &Place) -> String {
    let patterns = candidates(place);

    // Era climate adjustments. The ice-age branch is deterministic: always
    // the first candidate.
    if matches!(era, Era::Prehistoric | Era::Ancient) {
        return format!("{} (Ice Age remnants)", patterns[0]);
    }

    let pick = patterns.choose(&mut rand::rng()).copied().unwrap_or(patterns[0]);

    if matches!(era, Era::FarFuture | Era::DeepFuture) {
        return format!("{pick} (Climate engineered)");
    }

    pick.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_list_priority() {
        // Array of (expected_list, input_string)
        let cases: Vec<(&[&str], &str)> = vec![
            (ARCTIC, "Siberia"),             // arctic region, no terrain keyword
            (ARCTIC, "arctic wasteland"),    // arctic beats desert terrain
            (DESERT, "Sahara"),
            (DESERT, "arid dunes"),          // desert terrain, unknown region
            (TROPICAL, "Lagos"),             // africa, latitude 10
            (MOUNTAIN, "mountain fortress"),
            (COASTAL, "some harbor town"),   // coastal terrain
            (COASTAL, "Athens"),             // europe counts as coastal
            (TEMPERATE, "xyzzy"),
            (TEMPERATE, "Sydney"),           // oceania, latitude -30, not coastal
        ];

        for (expected, input) in cases {
            let place = Place::parse(input);
            assert_eq!(candidates(&place), expected, "input: {input:?}");
        }
    }

    #[test]
    fn ice_age_eras_are_deterministic() {
        let athens = Place::parse("Athens");
        assert_eq!(generate(Era::Prehistoric, &athens), "Ocean breeze (Ice Age remnants)");
        assert_eq!(generate(Era::Ancient, &athens), "Ocean breeze (Ice Age remnants)");

        let sahara = Place::parse("Sahara");
        assert_eq!(generate(Era::Ancient, &sahara), "Scorching heat (Ice Age remnants)");
    }

    #[test]
    fn engineered_climate_suffix_in_the_far_future() {
        let place = Place::parse("Athens");

        for era in [Era::FarFuture, Era::DeepFuture] {
            let weather = generate(era, &place);
            let prefix = weather.strip_suffix(" (Climate engineered)").unwrap();
            assert!(COASTAL.contains(&prefix), "weather: {weather:?}");
        }
    }

    #[test]
    fn ordinary_eras_pick_from_the_plain_list() {
        let place = Place::parse("Athens");

        for _ in 0..32 {
            let weather = generate(Era::Medieval, &place);
            assert!(COASTAL.contains(&weather.as_str()), "weather: {weather:?}");
        }
    }
}
