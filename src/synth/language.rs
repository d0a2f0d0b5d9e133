//! Era-conditioned language candidates.

use crate::rules::era::Era;
use rand::seq::IndexedRandom;

/// Fixed per-era candidate list. Exhaustive over [`Era`], so there is no
/// fallback path.
pub(crate) fn candidates(era: Era) -> &'static [&'static str] {
    match era {
        Era::Prehistoric => {
            &["Primitive gestures", "Proto-speech", "Basic vocalizations", "Tribal dialects"]
        }
        Era::Ancient => &[
            "Proto-Indo-European",
            "Ancient Sumerian",
            "Early Semitic",
            "Archaic Chinese",
            "Dravidian roots",
        ],
        Era::Classical => {
            &["Latin", "Classical Greek", "Sanskrit", "Old Chinese", "Pali", "Hebrew", "Coptic"]
        }
        Era::Medieval => &[
            "Old English",
            "Vulgar Latin",
            "Medieval Arabic",
            "Byzantine Greek",
            "Old Norse",
            "Persian",
        ],
        Era::Renaissance => &[
            "Early Modern English",
            "Renaissance Italian",
            "Classical Arabic",
            "Mandarin Chinese",
            "Spanish",
        ],
        Era::Industrial => {
            &["Victorian English", "French", "German", "Russian", "Japanese", "Hindi/Urdu"]
        }
        Era::EarlyModern => {
            &["English", "French", "Spanish", "German", "Russian", "Mandarin", "Japanese"]
        }
        Era::Modern => &[
            "English",
            "Mandarin",
            "Spanish",
            "Hindi",
            "Arabic",
            "French",
            "Bengali",
            "Portuguese",
            "Russian",
        ],
        Era::NearFuture => &[
            "Global English",
            "Mandarin-English hybrid",
            "Pan-Asian",
            "Neo-Spanish",
            "African Union lingua",
        ],
        Era::Future => {
            &["Terran Standard", "Regional dialects", "Trade languages", "Constructed universal"]
        }
        Era::FarFuture => {
            &["Unified Terran", "Evolved dialects", "Post-national languages", "Synthesized speech"]
        }
        Era::DeepFuture => &[
            "Galactic Basic",
            "Transhuman communication",
            "Neural-linked language",
            "Symbolic thought-sharing",
        ],
    }
}

pub(crate) fn generate(era: Era) -> String {
    let languages = candidates(era);
    let primary = languages.choose(&mut rand::rng()).copied().unwrap_or(languages[0]);

    if era == Era::DeepFuture {
        return format!("{primary} (telepathic elements)");
    }

    primary.to_string()
}
