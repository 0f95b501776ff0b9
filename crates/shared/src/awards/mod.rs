//! The Game Awards winners, 2018 onwards. Static reference data.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

type Winners = &'static [(&'static str, &'static str)];

pub const GOTY: &str = "Game of the Year";

const AWARDS_2018: Winners = &[
    (GOTY, "God of War"),
    ("Best Game Direction", "God of War"),
    ("Best Narrative", "Red Dead Redemption 2"),
    ("Best Art Direction", "Return of the Obra Dinn"),
    ("Best Score and Music", "Red Dead Redemption 2"),
    ("Best Audio Design", "Red Dead Redemption 2"),
    ("Best Performance", "Roger Clark (Red Dead Redemption 2)"),
    ("Best Independent Game", "Celeste"),
    ("Best Action", "Dead Cells"),
    ("Best Action/Adventure", "God of War"),
    ("Best RPG", "Monster Hunter: World"),
    ("Best Fighting", "Super Smash Bros. Ultimate"),
    ("Best Family", "Overcooked 2"),
    ("Best Sim/Strategy", "Into the Breach"),
    ("Best Sports/Racing", "Forza Horizon 4"),
    ("Best Multiplayer", "Fortnite"),
    ("Best Ongoing Game", "Fortnite"),
];

const AWARDS_2019: Winners = &[
    (GOTY, "Sekiro: Shadows Die Twice"),
    ("Best Game Direction", "Death Stranding"),
    ("Best Narrative", "Disco Elysium"),
    ("Best Art Direction", "Disco Elysium"),
    ("Best Score and Music", "Death Stranding"),
    ("Best Audio Design", "Call of Duty: Modern Warfare"),
    ("Best Performance", "Mads Mikkelsen (Death Stranding)"),
    ("Best Independent Game", "Disco Elysium"),
    ("Best Action", "Apex Legends"),
    ("Best Action/Adventure", "Sekiro: Shadows Die Twice"),
    ("Best RPG", "Disco Elysium"),
    ("Best Fighting", "Mortal Kombat 11"),
    ("Best Family", "Luigi's Mansion 3"),
    ("Best Sim/Strategy", "Fire Emblem: Three Houses"),
    ("Best Sports/Racing", "Crash Team Racing Nitro-Fueled"),
    ("Best Multiplayer", "Apex Legends"),
    ("Best Ongoing Game", "Fortnite"),
];

const AWARDS_2020: Winners = &[
    (GOTY, "The Last of Us Part II"),
    ("Best Game Direction", "The Last of Us Part II"),
    ("Best Narrative", "The Last of Us Part II"),
    ("Best Art Direction", "Ghost of Tsushima"),
    ("Best Score and Music", "Final Fantasy VII Remake"),
    ("Best Audio Design", "The Last of Us Part II"),
    ("Best Performance", "Laura Bailey (The Last of Us Part II)"),
    ("Best Independent Game", "Hades"),
    ("Best Action", "Hades"),
    ("Best Action/Adventure", "The Last of Us Part II"),
    ("Best RPG", "Final Fantasy VII Remake"),
    ("Best Fighting", "Mortal Kombat 11 Ultimate"),
    ("Best Family", "Animal Crossing: New Horizons"),
    ("Best Sim/Strategy", "Microsoft Flight Simulator"),
    ("Best Sports/Racing", "Tony Hawk's Pro Skater 1 + 2"),
    ("Best Multiplayer", "Among Us"),
    ("Best Ongoing Game", "Fortnite"),
];

const AWARDS_2021: Winners = &[
    (GOTY, "It Takes Two"),
    ("Best Game Direction", "Deathloop"),
    ("Best Narrative", "Marvel's Guardians of the Galaxy"),
    ("Best Art Direction", "Deathloop"),
    ("Best Score and Music", "NieR Replicant ver.1.22474487139..."),
    ("Best Audio Design", "Forza Horizon 5"),
    ("Best Performance", "Maggie Robertson (Resident Evil Village)"),
    ("Best Independent Game", "Kena: Bridge of Spirits"),
    ("Best Action", "Returnal"),
    ("Best Action/Adventure", "Metroid Dread"),
    ("Best RPG", "Tales of Arise"),
    ("Best Fighting", "Guilty Gear Strive"),
    ("Best Family", "It Takes Two"),
    ("Best Sim/Strategy", "Age of Empires IV"),
    ("Best Sports/Racing", "Forza Horizon 5"),
    ("Best Multiplayer", "It Takes Two"),
    ("Best Ongoing Game", "Final Fantasy XIV"),
];

const AWARDS_2022: Winners = &[
    (GOTY, "Elden Ring"),
    ("Best Game Direction", "Elden Ring"),
    ("Best Narrative", "God of War Ragnarök"),
    ("Best Art Direction", "Elden Ring"),
    ("Best Score and Music", "God of War Ragnarök"),
    ("Best Audio Design", "God of War Ragnarök"),
    ("Best Performance", "Christopher Judge (God of War Ragnarök)"),
    ("Best Independent Game", "Stray"),
    ("Best Action", "Bayonetta 3"),
    ("Best Action/Adventure", "God of War Ragnarök"),
    ("Best RPG", "Elden Ring"),
    ("Best Fighting", "MultiVersus"),
    ("Best Family", "Kirby and the Forgotten Land"),
    ("Best Sim/Strategy", "Mario + Rabbids Sparks of Hope"),
    ("Best Sports/Racing", "Gran Turismo 7"),
    ("Best Multiplayer", "Splatoon 3"),
    ("Best Ongoing Game", "Final Fantasy XIV"),
];

const AWARDS_2023: Winners = &[
    (GOTY, "Baldur's Gate 3"),
    ("Best Game Direction", "Alan Wake 2"),
    ("Best Narrative", "Alan Wake 2"),
    ("Best Art Direction", "Alan Wake 2"),
    ("Best Score and Music", "Final Fantasy XVI"),
    ("Best Audio Design", "Hi-Fi Rush"),
    ("Best Performance", "Neil Newbon (Baldur's Gate 3)"),
    ("Best Independent Game", "Sea of Stars"),
    ("Best Action", "Armored Core VI: Fires of Rubicon"),
    ("Best Action/Adventure", "The Legend of Zelda: Tears of the Kingdom"),
    ("Best RPG", "Baldur's Gate 3"),
    ("Best Fighting", "Street Fighter 6"),
    ("Best Family", "Super Mario Bros. Wonder"),
    ("Best Sim/Strategy", "Pikmin 4"),
    ("Best Sports/Racing", "Forza Motorsport"),
    ("Best Multiplayer", "Baldur's Gate 3"),
    ("Best Ongoing Game", "Cyberpunk 2077"),
];

const AWARDS_2024: Winners = &[
    (GOTY, "Astro Bot"),
    ("Best Game Direction", "Astro Bot"),
    ("Best Narrative", "Metaphor: ReFantazio"),
    ("Best Art Direction", "Metaphor: ReFantazio"),
    ("Best Score and Music", "Final Fantasy VII Rebirth"),
    ("Best Audio Design", "Astro Bot"),
    ("Best Performance", "Melina Juergens (Senua's Saga: Hellblade II)"),
    ("Best Independent Game", "Balatro"),
    ("Best Action", "Black Myth: Wukong"),
    ("Best Action/Adventure", "Astro Bot"),
    ("Best RPG", "Metaphor: ReFantazio"),
    ("Best Fighting", "Tekken 8"),
    ("Best Family", "Astro Bot"),
    ("Best Sim/Strategy", "Frostpunk 2"),
    ("Best Sports/Racing", "EA Sports FC 25"),
    ("Best Multiplayer", "Helldivers 2"),
    ("Best Ongoing Game", "Helldivers 2"),
];

const AWARDS_2025: Winners = &[
    (GOTY, "Clair Obscur: Expedition 33"),
    ("Best Game Direction", "Clair Obscur: Expedition 33"),
    ("Best Narrative", "Clair Obscur: Expedition 33"),
    ("Best Art Direction", "Clair Obscur: Expedition 33"),
    ("Best Score and Music", "Clair Obscur: Expedition 33"),
    ("Best Audio Design", "Battlefield 6"),
    ("Best Performance", "Jennifer English (Clair Obscur: Expedition 33)"),
    ("Best Independent Game", "Clair Obscur: Expedition 33"),
    ("Best Action", "Hades II"),
    ("Best Action/Adventure", "Hollow Knight: Silksong"),
    ("Best RPG", "Clair Obscur: Expedition 33"),
    ("Best Fighting", "Fatal Fury: City of the Wolves"),
    ("Best Family", "Donkey Kong Bananza"),
    ("Best Sim/Strategy", "Final Fantasy Tactics: The Ivalice Chronicles"),
    ("Best Sports/Racing", "Mario Kart World"),
    ("Best Multiplayer", "Arc Raiders"),
    ("Best Ongoing Game", "No Man's Sky"),
];

const EARLIER_GOTY: &[(u16, &str)] = &[
    (2017, "The Legend of Zelda: Breath of the Wild"),
    (2016, "Overwatch"),
    (2015, "The Witcher 3: Wild Hunt"),
    (2014, "Dragon Age: Inquisition"),
];

const HISTORY_NOTES: &[&str] = &[
    "FromSoftware has won twice: Sekiro: Shadows Die Twice (2019) and Elden Ring (2022).",
    "Sony first-party studios took the top prize in 2018, 2020 and 2024.",
    "Clair Obscur: Expedition 33 (2025) also won Best Independent Game and Best RPG.",
    "The Game Awards replaced the Spike Video Game Awards in 2014.",
];

static AWARDS: Lazy<BTreeMap<u16, Winners>> = Lazy::new(|| {
    BTreeMap::from([
        (2018, AWARDS_2018),
        (2019, AWARDS_2019),
        (2020, AWARDS_2020),
        (2021, AWARDS_2021),
        (2022, AWARDS_2022),
        (2023, AWARDS_2023),
        (2024, AWARDS_2024),
        (2025, AWARDS_2025),
    ])
});

/// Years with data, ascending.
pub fn available_years() -> Vec<u16> {
    AWARDS.keys().copied().collect()
}

pub fn winners(year: u16) -> Option<Winners> {
    AWARDS.get(&year).copied()
}

/// Case-insensitive substring match in either direction; "all" or blank matches everything.
fn category_matches(category: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() || query == "all" {
        return true;
    }
    let category = category.to_lowercase();
    category.contains(&query) || query.contains(&category)
}

fn join_years(years: &[u16]) -> String {
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn awards_report(year: i64, category: &str) -> String {
    let Some(winners) = u16::try_from(year).ok().and_then(winners) else {
        return format!(
            "No Game Awards data for {}. Available years: {}",
            year,
            join_years(&available_years())
        );
    };

    let matched: Vec<_> = winners
        .iter()
        .filter(|(name, _)| category_matches(name, category))
        .collect();

    if matched.is_empty() {
        let names: Vec<&str> = winners.iter().map(|(name, _)| *name).collect();
        return format!(
            "No category matching '{}' for {}. Available categories: {}",
            category,
            year,
            names.join(", ")
        );
    }

    let mut output = format!("🏆 The Game Awards {}:\n\n", year);
    for (name, winner) in matched {
        output.push_str(&format!("🏅 {}: {}\n", name, winner));
    }
    output
}

pub fn goty_history_report() -> String {
    let mut output = String::from("🏆 The Game Awards: Game of the Year History\n\n");

    for (year, winners) in AWARDS.iter().rev() {
        if let Some((_, winner)) = winners.iter().find(|(name, _)| *name == GOTY) {
            output.push_str(&format!("{}: {}\n", year, winner));
        }
    }

    output.push_str("\nEarlier winners:\n");
    for (year, winner) in EARLIER_GOTY {
        output.push_str(&format!("{}: {}\n", year, winner));
    }

    output.push_str("\nNotes:\n");
    for note in HISTORY_NOTES {
        output.push_str(&format!("• {}\n", note));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_cover_2018_to_2025() {
        assert_eq!(available_years(), (2018..=2025).collect::<Vec<u16>>());
    }

    #[test]
    fn test_every_year_has_goty() {
        for year in available_years() {
            let winners = winners(year).unwrap();
            assert!(winners.iter().any(|(name, _)| *name == GOTY), "{}", year);
        }
    }

    #[test]
    fn test_best_rpg_2025() {
        let text = awards_report(2025, "Best RPG");
        assert!(text.contains("Best RPG: Clair Obscur: Expedition 33"));
        assert!(!text.contains("Best Action"));
    }

    #[test]
    fn test_category_match_either_direction() {
        let text = awards_report(2023, "rpg");
        assert!(text.contains("Best RPG: Baldur's Gate 3"));

        let text = awards_report(2022, "who won best fighting game");
        assert!(text.contains("Best Fighting: MultiVersus"));
    }

    #[test]
    fn test_all_categories() {
        let text = awards_report(2020, "all");
        assert_eq!(text.matches("🏅").count(), AWARDS_2020.len());
        assert!(text.contains("Game of the Year: The Last of Us Part II"));
    }

    #[test]
    fn test_unknown_year_lists_years() {
        let text = awards_report(1999, "all");
        assert!(text.contains("No Game Awards data for 1999"));
        assert!(text.contains("2018, 2019, 2020, 2021, 2022, 2023, 2024, 2025"));

        let text = awards_report(-5, "all");
        assert!(text.contains("Available years"));
    }

    #[test]
    fn test_unknown_category_lists_categories() {
        let text = awards_report(2025, "nonexistent-category");
        assert!(text.starts_with("No category matching 'nonexistent-category' for 2025"));
        assert!(text.contains("Best RPG"));
        assert!(text.contains("Game of the Year"));
    }

    #[test]
    fn test_goty_history_descending() {
        let text = goty_history_report();

        let newest = text.find("2025: Clair Obscur: Expedition 33").unwrap();
        let oldest = text.find("2018: God of War").unwrap();
        assert!(newest < oldest);
        assert!(text.contains("2014: Dragon Age: Inquisition"));
        assert!(text.contains("FromSoftware"));
    }
}
