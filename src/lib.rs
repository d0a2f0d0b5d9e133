#[macro_use]
mod macros;

mod api;
mod destination;
mod rules;
mod synth;
mod wire;

pub use api::{Context, plan_journey, resolve, resolve_with, synthesize};
pub use destination::Destination;
pub use rules::era::{Era, format_year};
pub use rules::place::{Place, Region, Terrain};
pub use rules::time::parse_year;
pub use synth::EraData;
pub use wire::{JourneyData, PredictionResponse};
