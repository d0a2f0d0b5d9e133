//! Era classification: mapping a signed year onto twelve ordered buckets.

use serde::{Deserialize, Serialize};

/// One of twelve fixed historical/future periods derived purely from a
/// year.
///
/// Variant order matches chronological order, so `Era` comparisons follow
/// the timeline (`Era::Ancient < Era::Medieval`). The serialized names are
/// camelCase because they double as keys into the presentation layer's
/// theme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Era {
    Prehistoric,
    Ancient,
    Classical,
    Medieval,
    Renaissance,
    Industrial,
    EarlyModern,
    Modern,
    NearFuture,
    Future,
    FarFuture,
    DeepFuture,
}

impl Era {
    /// Classify a year.
    ///
    /// Buckets are contiguous and exhaustive over all integers; thresholds
    /// are evaluated top to bottom and every bound is a strict `<` except
    /// `Modern`, which closes at 2024 inclusive.
    pub fn of(year: i64) -> Era {
        if year < -10_000 {
            Era::Prehistoric
        } else if year < -3_000 {
            Era::Ancient
        } else if year < 500 {
            Era::Classical
        } else if year < 1_500 {
            Era::Medieval
        } else if year < 1_800 {
            Era::Renaissance
        } else if year < 1_900 {
            Era::Industrial
        } else if year < 1_950 {
            Era::EarlyModern
        } else if year <= 2_024 {
            Era::Modern
        } else if year < 2_100 {
            Era::NearFuture
        } else if year < 3_000 {
            Era::Future
        } else if year < 5_000 {
            Era::FarFuture
        } else {
            Era::DeepFuture
        }
    }

    /// Human-readable era heading.
    pub fn name(self) -> &'static str {
        match self {
            Era::Prehistoric => "Prehistoric Era",
            Era::Ancient => "Ancient Times",
            Era::Classical => "Classical Antiquity",
            Era::Medieval => "Medieval Period",
            Era::Renaissance => "Renaissance Era",
            Era::Industrial => "Industrial Age",
            Era::EarlyModern => "Early Modern Era",
            Era::Modern => "Modern Era",
            Era::NearFuture => "Near Future",
            Era::Future => "Future Era",
            Era::FarFuture => "Far Future",
            Era::DeepFuture => "Deep Future",
        }
    }

    /// Theme-table key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Era::Prehistoric => "prehistoric",
            Era::Ancient => "ancient",
            Era::Classical => "classical",
            Era::Medieval => "medieval",
            Era::Renaissance => "renaissance",
            Era::Industrial => "industrial",
            Era::EarlyModern => "earlyModern",
            Era::Modern => "modern",
            Era::NearFuture => "nearFuture",
            Era::Future => "future",
            Era::FarFuture => "farFuture",
            Era::DeepFuture => "deepFuture",
        }
    }
}

/// Format a signed year for display: `-400` renders as `"400 BC"`, `1850`
/// as `"1850 AD"`.
pub fn format_year(year: i64) -> String {
    if year < 0 { format!("{} BC", year.unsigned_abs()) } else { format!("{year} AD") }
}
