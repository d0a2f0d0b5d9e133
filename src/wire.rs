//! JSON wire shapes exchanged with the remote prediction service and the
//! presentation layer, plus the fallback seam used when that service
//! fails.
//!
//! Field names are pinned to the JSON the existing request/response layer
//! speaks (`lifeExpectancy`, `formattedYear`, `isCoastal`, ...); changing
//! them breaks compatibility.

use crate::destination::Destination;
use crate::rules::era::Era;
use crate::rules::place::Place;
use crate::synth::{self, EraData};
use serde::{Deserialize, Serialize};

/// Successful response body from the remote prediction service.
///
/// The four era-data fields and `context` are required; a body missing any
/// of them does not decode and the caller falls back to the local
/// synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub weather: String,
    pub language: String,
    pub population: String,
    pub life_expectancy: String,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

impl PredictionResponse {
    /// Decode a raw response body.
    ///
    /// Returns `None` for anything that is not a JSON object carrying the
    /// required fields; callers treat that as "use the local synthesizer",
    /// never as an error to propagate.
    pub fn decode(body: &str) -> Option<PredictionResponse> {
        serde_json::from_str(body).ok()
    }
}

/// The fully-resolved record handed to the presentation layer.
///
/// Built once per query and replaced wholesale on the next one, never
/// mutated field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyData {
    pub year: i64,
    pub place: Place,
    pub data: EraData,
    pub era: Era,
    pub formatted_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

impl JourneyData {
    /// Assemble journey data from a resolved destination and an optional
    /// decoded prediction.
    ///
    /// A missing prediction substitutes the local synthesizer's output;
    /// the remote-only fields stay empty in that case.
    pub fn from_prediction(
        destination: Destination,
        prediction: Option<PredictionResponse>,
    ) -> JourneyData {
        let Destination { place, year, era, formatted_year, .. } = destination;

        match prediction {
            Some(response) => JourneyData {
                year,
                data: EraData {
                    weather: response.weather,
                    language: response.language,
                    population: response.population,
                    life_expectancy: response.life_expectancy,
                },
                era,
                formatted_year,
                context: Some(response.context),
                image_url: response.image_url,
                image_urls: filter_image_urls(response.image_urls),
                place,
            },
            None => JourneyData {
                year,
                data: synth::synthesize(year, &place),
                era,
                formatted_year,
                context: None,
                image_url: None,
                image_urls: None,
                place,
            },
        }
    }
}

/// Drop unusable gallery entries instead of surfacing them as broken
/// images; an empty gallery collapses to no gallery at all.
fn filter_image_urls(urls: Option<Vec<String>>) -> Option<Vec<String>> {
    let urls: Vec<String> = urls?.into_iter().filter(|url| !url.trim().is_empty()).collect();
    if urls.is_empty() { None } else { Some(urls) }
}
