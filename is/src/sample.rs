//! Built-in sample itinerary
//!
//! Four pre-populated Rome days used on first run and whenever a persisted
//! snapshot turns out to be unusable. Day ids are generated fresh per
//! instantiation.

use crate::domain::{Activity, DayPlan};

fn act(time: &str, title: &str, category: &str, notes: &str) -> Activity {
    Activity {
        time: time.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        notes: notes.to_string(),
    }
}

/// The sample template: four days of Rome highlights
pub fn sample_days() -> Vec<DayPlan> {
    vec![
        DayPlan::with_activities(
            "Day 1 \u{2013} Vatican & Castel Sant\u{2019}Angelo",
            vec![
                act(
                    "09:00",
                    "Vatican Museums & Sistine Chapel",
                    "Sight",
                    "Pre-book tickets; Michelangelo ceiling",
                ),
                act("12:00", "St. Peter's Basilica \u{2013} Dome climb", "Sight", "Panorama views"),
                act("14:30", "Castel Sant'Angelo", "Sight", "Fortress with city views"),
                act("16:00", "Ponte Sant'Angelo", "Walk", "Angel statues"),
            ],
        ),
        DayPlan::with_activities(
            "Day 2 \u{2013} Classic Center & Fountains",
            vec![
                act("09:30", "Trevi Fountain", "Sight", "Coin toss"),
                act("10:30", "Spanish Steps", "Sight", "View from top"),
                act("12:00", "Via del Corso", "Shopping", "Main shopping street"),
                act("13:30", "Pantheon", "Sight", "Perfect dome"),
                act("15:00", "Piazza Navona", "Sight", "Art and caf\u{e9}s"),
                act(
                    "19:00",
                    "Campo de\u{2019} Fiori & Jewish Ghetto",
                    "Food",
                    "Dinner & stroll",
                ),
            ],
        ),
        DayPlan::with_activities(
            "Day 3 \u{2013} Ancient Rome",
            vec![
                act("08:30", "Colosseum", "Sight", "Go early"),
                act("10:30", "Roman Forum & Palatine Hill", "Sight", "Ruins & views"),
                act("13:30", "Piazza Venezia", "Sight", "Altare della Patria"),
                act("20:45", "Roma vs Inter \u{2013} Soccer game", "Other", "Kickoff 20:45"),
            ],
        ),
        DayPlan::with_activities(
            "Day 4 \u{2013} Off the Beaten Path (Local & Calm)",
            vec![
                act("10:00", "Via Appia Antica", "Walk", "Bike or walk"),
                act("12:00", "Catacombs of San Callisto", "Sight", "Underground tunnels"),
                act("14:30", "Baths of Caracalla", "Sight", "Ancient baths"),
                act("16:30", "Palazzo Massimo alle Terme", "Sight", "Frescoes"),
                act("19:30", "Dinner in Garbatella", "Food", "Local neighborhood"),
            ],
        ),
    ]
}
