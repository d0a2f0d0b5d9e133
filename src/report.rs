use chronoport::JourneyData;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_journey(input: &str, journey: &JourneyData, color: bool) {
    let palette = ansi::Palette::new(color);

    println!("\n{}", palette.bold(palette.paint(format!("⌛ Destination: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ When ━━━", ansi::GRAY));
    println!(
        "  {}  │  {}",
        palette.paint(&journey.formatted_year, ansi::GREEN),
        journey.era.name()
    );

    println!("\n{}", palette.paint("━━━ Where ━━━", ansi::GRAY));
    let place = &journey.place;
    let name = if place.name.trim().is_empty() { "(unspecified)" } else { place.name.as_str() };
    println!("  {}", palette.bold(name));
    println!(
        "  {} region  │  {} terrain  │  latitude {}°",
        place.region.key(),
        place.terrain.key(),
        place.latitude
    );
    println!(
        "  {}",
        palette.dim(format!(
            "coastal: {}  │  urban: {}",
            if place.is_coastal { "yes" } else { "no" },
            if place.is_urban { "yes" } else { "no" }
        ))
    );

    println!("\n{}", palette.paint("━━━ Life there ━━━", ansi::GRAY));
    println!("  Weather:          {}", journey.data.weather);
    println!("  Language:         {}", journey.data.language);
    println!("  Population:       {}", journey.data.population);
    println!("  Life expectancy:  {}", journey.data.life_expectancy);

    if let Some(context) = &journey.context {
        println!("\n{}", palette.paint("━━━ Context ━━━", ansi::GRAY));
        println!("  {context}");
    }

    println!();
}
