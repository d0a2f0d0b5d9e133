//! Life-expectancy step function over the year axis.

/// Pure lookup, no randomness; thirteen steps from deep prehistory to the
/// consciousness-transfer far future.
pub(crate) fn generate(year: i64) -> String {
    let expectancy = if year < -50_000 {
        "20-25 years"
    } else if year < -10_000 {
        "25-30 years"
    } else if year < -3_000 {
        "30-35 years"
    } else if year < 0 {
        "35-40 years"
    } else if year < 500 {
        "40-45 years"
    } else if year < 1_500 {
        "45-50 years"
    } else if year < 1_800 {
        "50-55 years"
    } else if year < 1_900 {
        "55-60 years"
    } else if year <= 2_024 {
        "70-80 years"
    } else if year < 2_100 {
        "85-100 years"
    } else if year < 3_000 {
        "120-150 years"
    } else if year < 5_000 {
        "200-500 years (regeneration tech)"
    } else {
        "Indefinite (consciousness transfer available)"
    };

    expectancy.to_string()
}
