//! Place classification: ordered region/terrain keyword tables and the
//! flags derived from them.

use serde::{Deserialize, Serialize};

/// Coarse geographic/cultural bucket inferred from keywords in a place
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Europe,
    Asia,
    Africa,
    Americas,
    Oceania,
    MiddleEast,
    Arctic,
    Desert,
    Unknown,
}

/// Physical landscape category inferred from keywords, with region-based
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Terrain {
    Coastal,
    Mountain,
    Forest,
    Plains,
    Desert,
    Urban,
    Rural,
    Mixed,
    Arctic,
}

/// Region keyword table, scanned in declaration order; the first region
/// with any matching keyword wins.
const REGION_KEYWORDS: &[(Region, &[&str])] = &[
    (Region::Europe, &[
        "europe", "rome", "athens", "london", "paris", "berlin", "madrid", "vienna", "amsterdam",
        "moscow", "barcelona", "milan",
    ]),
    (Region::Asia, &[
        "asia", "china", "japan", "india", "tokyo", "beijing", "shanghai", "bangkok", "seoul",
        "singapore", "hong kong", "mumbai", "delhi",
    ]),
    (Region::Africa, &[
        "africa", "egypt", "cairo", "lagos", "nairobi", "casablanca", "addis ababa", "tunis",
        "algiers",
    ]),
    (Region::Americas, &[
        "america", "usa", "canada", "mexico", "brazil", "new york", "los angeles", "chicago",
        "toronto", "vancouver", "mexico city", "rio", "buenos aires",
    ]),
    (Region::Oceania, &["australia", "sydney", "melbourne", "auckland", "fiji", "new zealand"]),
    (Region::MiddleEast, &[
        "middle east", "dubai", "istanbul", "tehran", "baghdad", "jerusalem", "tel aviv", "riyadh",
    ]),
    (Region::Arctic, &["arctic", "antarctica", "greenland", "alaska", "siberia"]),
    (Region::Desert, &["sahara", "desert", "gobi", "kalahari", "arabian", "outback"]),
];

/// Terrain keyword table, scanned independently of the region table.
const TERRAIN_KEYWORDS: &[(Terrain, &[&str])] = &[
    (Terrain::Coastal, &["coast", "beach", "shore", "seaside", "port", "harbor", "bay"]),
    (Terrain::Mountain, &["mountain", "alps", "himalaya", "rocky", "andes", "peak", "summit"]),
    (Terrain::Forest, &["forest", "jungle", "rainforest", "woods", "amazon", "congo"]),
    (Terrain::Plains, &["plains", "prairie", "steppe", "savanna", "grassland", "valley"]),
    (Terrain::Desert, &["desert", "sahara", "arid", "dunes", "wasteland"]),
    (Terrain::Urban, &["city", "metro", "urban", "downtown", "metropolis"]),
    (Terrain::Rural, &["village", "rural", "countryside", "farm", "pastoral"]),
];

impl Region {
    /// Coarse representative latitude in degrees, signed by hemisphere.
    /// Not geocoded; a fixed lookup per region.
    pub fn latitude(self) -> f64 {
        match self {
            Region::Europe => 50.0,
            Region::Asia => 35.0,
            Region::Africa => 10.0,
            Region::Americas => 40.0,
            Region::Oceania => -30.0,
            Region::MiddleEast => 25.0,
            Region::Arctic => 70.0,
            Region::Desert => 25.0,
            Region::Unknown => 30.0,
        }
    }

    /// Wire/theme key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::Africa => "africa",
            Region::Americas => "americas",
            Region::Oceania => "oceania",
            Region::MiddleEast => "middleEast",
            Region::Arctic => "arctic",
            Region::Desert => "desert",
            Region::Unknown => "unknown",
        }
    }
}

impl Terrain {
    /// Wire key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Terrain::Coastal => "coastal",
            Terrain::Mountain => "mountain",
            Terrain::Forest => "forest",
            Terrain::Plains => "plains",
            Terrain::Desert => "desert",
            Terrain::Urban => "urban",
            Terrain::Rural => "rural",
            Terrain::Mixed => "mixed",
            Terrain::Arctic => "arctic",
        }
    }
}

/// Classification of a location string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Original substring, preserved as the display name.
    pub name: String,
    pub region: Region,
    pub terrain: Terrain,
    pub is_coastal: bool,
    pub is_urban: bool,
    pub latitude: f64,
}

impl Place {
    /// Classify a location string via a first-match keyword scan over the
    /// ordered region and terrain tables.
    ///
    /// Never fails: unrecognized input degrades to `Region::Unknown` /
    /// `Terrain::Mixed` rather than erroring.
    pub fn parse(input: &str) -> Place {
        let normalized = input.trim().to_lowercase();

        let region = scan(REGION_KEYWORDS, &normalized).unwrap_or(Region::Unknown);
        let mut terrain = scan(TERRAIN_KEYWORDS, &normalized).unwrap_or(Terrain::Mixed);

        // Default terrain from the region when no keyword matched.
        if terrain == Terrain::Mixed {
            match region {
                Region::Arctic => terrain = Terrain::Arctic,
                Region::Desert => terrain = Terrain::Desert,
                _ => {}
            }
        }

        Place {
            name: input.to_string(),
            region,
            terrain,
            // Deliberately coarse: the heavily-populated regions count as
            // coastal-eligible regardless of detected terrain.
            is_coastal: terrain == Terrain::Coastal
                || matches!(region, Region::Europe | Region::Asia | Region::Americas),
            is_urban: terrain == Terrain::Urban || normalized.contains("city"),
            latitude: region.latitude(),
        }
    }
}

fn scan<K: Copy>(table: &[(K, &[&str])], normalized: &str) -> Option<K> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|(key, _)| *key)
}
