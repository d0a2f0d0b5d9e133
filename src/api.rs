use crate::destination::Destination;
use crate::rules::place::Place;
use crate::synth::{self, EraData};
use crate::wire::{JourneyData, PredictionResponse};
use chrono::{Datelike, Local};

/// Parsing context.
///
/// This holds the environment needed to resolve relative expressions (like
/// "500 years ago") and to default the year when the input carries none.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Reference calendar year used to resolve relative expressions.
    pub reference_year: i64,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self { reference_year: 2024 }
        } else {
            Self { reference_year: i64::from(Local::now().year()) }
        }
    }
}

/// Resolve a free-text destination using a default [`Context`].
///
/// # Example
/// ```
/// use chronoport::{Era, resolve};
///
/// let dest = resolve("Athens 400 BC");
/// assert_eq!(dest.year, -400);
/// assert_eq!(dest.era, Era::Classical);
/// ```
pub fn resolve(input: &str) -> Destination {
    resolve_with(input, &Context::default())
}

/// Resolve a free-text destination with the provided `context`.
///
/// Use this when you want deterministic resolution by supplying a reference
/// year. Never fails: empty or unparseable input degrades to an unknown
/// place in the reference year.
pub fn resolve_with(input: &str, context: &Context) -> Destination {
    Destination::resolve(input, context)
}

/// Generate fallback era data for a year and place.
///
/// Weather and language pick one of a fixed candidate list at random;
/// population and life expectancy are pure functions of the inputs.
pub fn synthesize(year: i64, place: &Place) -> EraData {
    synth::synthesize(year, place)
}

/// Resolve `input` and assemble the journey record handed to the
/// presentation layer.
///
/// `prediction_body` is the raw response text from the remote prediction
/// service, if any. Anything that does not decode into a complete
/// [`PredictionResponse`] substitutes the local synthesizer instead of
/// surfacing an error.
pub fn plan_journey(input: &str, prediction_body: Option<&str>, context: &Context) -> JourneyData {
    let destination = Destination::resolve(input, context);
    let prediction = prediction_body.and_then(PredictionResponse::decode);
    JourneyData::from_prediction(destination, prediction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::era::Era;
    use crate::rules::place::Region;

    fn reference_context() -> Context {
        Context { reference_year: 2024 }
    }

    #[test]
    fn resolve_with_returns_full_destination() {
        let ctx = reference_context();
        let dest = resolve_with("Athens 400 BC", &ctx);

        assert_eq!(dest.place.name, "Athens 400");
        assert_eq!(dest.place.region, Region::Europe);
        assert_eq!(dest.year, -400);
        assert_eq!(dest.era, Era::Classical);
        assert_eq!(dest.formatted_year, "400 BC");
    }

    #[test]
    fn plan_journey_uses_prediction_when_it_decodes() {
        let ctx = reference_context();
        let body = r#"{
            "weather": "Crisp",
            "language": "Attic Greek",
            "population": "~140,000 inhabitants",
            "lifeExpectancy": "35-40 years",
            "context": "The agora is crowded today.",
            "imageUrl": "https://img.example/athens.png"
        }"#;

        let journey = plan_journey("Athens 400 BC", Some(body), &ctx);
        assert_eq!(journey.data.weather, "Crisp");
        assert_eq!(journey.data.life_expectancy, "35-40 years");
        assert_eq!(journey.context.as_deref(), Some("The agora is crowded today."));
        assert_eq!(journey.image_url.as_deref(), Some("https://img.example/athens.png"));
    }

    #[test]
    fn plan_journey_falls_back_on_malformed_body() {
        let ctx = reference_context();

        for body in [None, Some("not json"), Some("{}"), Some(r#"{"weather":"x"}"#)] {
            let journey = plan_journey("Athens 400 BC", body, &ctx);

            // Population and life expectancy are the deterministic fields of
            // the synthesizer, so the fallback is directly observable.
            let expected = synthesize(journey.year, &journey.place);
            assert_eq!(journey.data.population, expected.population);
            assert_eq!(journey.data.life_expectancy, expected.life_expectancy);
            assert_eq!(journey.context, None);
            assert_eq!(journey.image_url, None);
            assert_eq!(journey.image_urls, None);
        }
    }

    #[test]
    fn default_context_is_pinned_under_test() {
        assert_eq!(Context::default().reference_year, 2024);
    }
}
