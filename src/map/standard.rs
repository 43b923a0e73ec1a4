//! The standard board: 76 provinces, 34 supply centers.
//!
//! Transcribed from the classic map. Adjacency is listed from both sides of
//! every edge; `MapGraph::build` rejects the table otherwise. Supply-center
//! flags and home powers follow the standard 1901 setup. The four variant
//! provinces (North Africa, Tunis, Egypt, Silesia) are part of the table;
//! Egypt borders only the Eastern Mediterranean.

use super::{ProvinceDef, Terrain};
use crate::board::power::Power;
use crate::board::unit::UnitKind;

const fn province(
    name: &'static str,
    terrain: Terrain,
    supply_center: bool,
    home: Option<Power>,
    adjacent: &'static [&'static str],
) -> ProvinceDef {
    ProvinceDef {
        name,
        terrain,
        supply_center,
        home,
        adjacent,
    }
}

/// The full province table, grouped by region.
pub static PROVINCES: &[ProvinceDef] = &[
    // England
    province("Clyde", Terrain::Coast, false, None, &["Edinburgh", "Liverpool", "North Atlantic Ocean", "Norwegian Sea"]),
    province("Edinburgh", Terrain::Coast, true, Some(Power::England), &["Clyde", "North Sea", "Norwegian Sea", "Yorkshire"]),
    province("Liverpool", Terrain::Coast, true, Some(Power::England), &["Clyde", "Irish Sea", "North Atlantic Ocean", "Wales", "Yorkshire"]),
    province("Yorkshire", Terrain::Coast, false, None, &["Edinburgh", "Liverpool", "London", "North Sea", "Wales"]),
    province("Wales", Terrain::Coast, false, None, &["English Channel", "Irish Sea", "Liverpool", "London", "Yorkshire"]),
    province("London", Terrain::Coast, true, Some(Power::England), &["English Channel", "North Sea", "Wales", "Yorkshire"]),
    // France
    province("Brest", Terrain::Coast, true, Some(Power::France), &["English Channel", "Gascony", "Mid-Atlantic Ocean", "Paris", "Picardy"]),
    province("Paris", Terrain::Land, true, Some(Power::France), &["Brest", "Burgundy", "Gascony", "Picardy"]),
    province("Picardy", Terrain::Coast, false, None, &["Belgium", "Brest", "Burgundy", "English Channel", "Paris"]),
    province("Burgundy", Terrain::Land, false, None, &["Belgium", "Gascony", "Marseilles", "Munich", "Paris", "Picardy", "Ruhr"]),
    province("Marseilles", Terrain::Coast, true, Some(Power::France), &["Burgundy", "Gascony", "Gulf of Lyon", "Piedmont", "Spain"]),
    province("Gascony", Terrain::Coast, false, None, &["Brest", "Burgundy", "Marseilles", "Mid-Atlantic Ocean", "Paris", "Spain"]),
    // Germany
    province("Kiel", Terrain::Coast, true, Some(Power::Germany), &["Baltic Sea", "Berlin", "Denmark", "Helgoland Bight", "Holland", "Munich", "Ruhr"]),
    province("Berlin", Terrain::Coast, true, Some(Power::Germany), &["Baltic Sea", "Kiel", "Munich", "Prussia", "Silesia"]),
    province("Prussia", Terrain::Coast, false, None, &["Baltic Sea", "Berlin", "Livonia", "Silesia", "Warsaw"]),
    province("Ruhr", Terrain::Land, false, None, &["Belgium", "Burgundy", "Holland", "Kiel", "Munich"]),
    province("Munich", Terrain::Land, true, Some(Power::Germany), &["Berlin", "Bohemia", "Burgundy", "Kiel", "Ruhr", "Silesia", "Tyrolia"]),
    province("Silesia", Terrain::Land, false, None, &["Berlin", "Bohemia", "Galicia", "Munich", "Prussia", "Warsaw"]),
    // Italy
    province("Piedmont", Terrain::Coast, false, None, &["Gulf of Lyon", "Marseilles", "Tuscany", "Tyrolia", "Venice"]),
    province("Venice", Terrain::Coast, true, Some(Power::Italy), &["Adriatic Sea", "Apulia", "Piedmont", "Rome", "Trieste", "Tuscany", "Tyrolia"]),
    province("Tuscany", Terrain::Coast, false, None, &["Gulf of Lyon", "Piedmont", "Rome", "Tyrrhenian Sea", "Venice"]),
    province("Rome", Terrain::Coast, true, Some(Power::Italy), &["Apulia", "Naples", "Tuscany", "Tyrrhenian Sea", "Venice"]),
    province("Apulia", Terrain::Coast, false, None, &["Adriatic Sea", "Ionian Sea", "Naples", "Rome", "Venice"]),
    province("Naples", Terrain::Coast, true, Some(Power::Italy), &["Apulia", "Ionian Sea", "Rome", "Tyrrhenian Sea"]),
    // Austria
    province("Bohemia", Terrain::Land, false, None, &["Galicia", "Munich", "Silesia", "Tyrolia", "Vienna"]),
    province("Galicia", Terrain::Land, false, None, &["Bohemia", "Budapest", "Rumania", "Silesia", "Ukraine", "Vienna", "Warsaw"]),
    province("Tyrolia", Terrain::Land, false, None, &["Bohemia", "Munich", "Piedmont", "Trieste", "Venice", "Vienna"]),
    province("Vienna", Terrain::Land, true, Some(Power::Austria), &["Bohemia", "Budapest", "Galicia", "Trieste", "Tyrolia"]),
    province("Budapest", Terrain::Land, true, Some(Power::Austria), &["Galicia", "Rumania", "Serbia", "Trieste", "Vienna"]),
    province("Trieste", Terrain::Coast, true, Some(Power::Austria), &["Adriatic Sea", "Albania", "Budapest", "Serbia", "Tyrolia", "Venice", "Vienna"]),
    // Russia
    province("St Petersburg", Terrain::Coast, true, Some(Power::Russia), &["Barents Sea", "Finland", "Gulf of Bothnia", "Livonia", "Moscow", "Norway"]),
    province("Moscow", Terrain::Land, true, Some(Power::Russia), &["Livonia", "Sevastopol", "St Petersburg", "Ukraine", "Warsaw"]),
    province("Warsaw", Terrain::Land, true, Some(Power::Russia), &["Galicia", "Livonia", "Moscow", "Prussia", "Silesia", "Ukraine"]),
    province("Livonia", Terrain::Coast, false, None, &["Baltic Sea", "Gulf of Bothnia", "Moscow", "Prussia", "St Petersburg", "Warsaw"]),
    province("Ukraine", Terrain::Land, false, None, &["Galicia", "Moscow", "Rumania", "Sevastopol", "Warsaw"]),
    province("Sevastopol", Terrain::Coast, true, Some(Power::Russia), &["Armenia", "Black Sea", "Moscow", "Rumania", "Ukraine"]),
    // Turkey
    province("Constantinople", Terrain::Coast, true, Some(Power::Turkey), &["Aegean Sea", "Ankara", "Black Sea", "Bulgaria", "Smyrna"]),
    province("Ankara", Terrain::Coast, true, Some(Power::Turkey), &["Armenia", "Black Sea", "Constantinople", "Smyrna"]),
    province("Smyrna", Terrain::Coast, true, Some(Power::Turkey), &["Aegean Sea", "Ankara", "Armenia", "Constantinople", "Eastern Mediterranean", "Syria"]),
    province("Syria", Terrain::Coast, false, None, &["Armenia", "Eastern Mediterranean", "Smyrna"]),
    province("Armenia", Terrain::Coast, false, None, &["Ankara", "Black Sea", "Sevastopol", "Smyrna", "Syria"]),
    // Neutral
    province("Norway", Terrain::Coast, true, None, &["Barents Sea", "Finland", "North Sea", "Norwegian Sea", "Skagerrak", "St Petersburg", "Sweden"]),
    province("Sweden", Terrain::Coast, true, None, &["Baltic Sea", "Denmark", "Finland", "Gulf of Bothnia", "Norway", "Skagerrak"]),
    province("Finland", Terrain::Coast, false, None, &["Gulf of Bothnia", "Norway", "St Petersburg", "Sweden"]),
    province("Denmark", Terrain::Coast, true, None, &["Baltic Sea", "Helgoland Bight", "Kiel", "North Sea", "Skagerrak", "Sweden"]),
    province("Holland", Terrain::Coast, true, None, &["Belgium", "Helgoland Bight", "Kiel", "North Sea", "Ruhr"]),
    province("Belgium", Terrain::Coast, true, None, &["Burgundy", "English Channel", "Holland", "North Sea", "Picardy", "Ruhr"]),
    province("Spain", Terrain::Coast, true, None, &["Gascony", "Gulf of Lyon", "Marseilles", "Mid-Atlantic Ocean", "Portugal", "Western Mediterranean"]),
    province("Portugal", Terrain::Coast, true, None, &["Mid-Atlantic Ocean", "Spain"]),
    province("Rumania", Terrain::Coast, true, None, &["Black Sea", "Budapest", "Bulgaria", "Galicia", "Serbia", "Sevastopol", "Ukraine"]),
    province("Serbia", Terrain::Land, true, None, &["Albania", "Budapest", "Bulgaria", "Greece", "Rumania", "Trieste"]),
    province("Albania", Terrain::Coast, false, None, &["Adriatic Sea", "Greece", "Ionian Sea", "Serbia", "Trieste"]),
    province("Greece", Terrain::Coast, true, None, &["Aegean Sea", "Albania", "Bulgaria", "Ionian Sea", "Serbia"]),
    province("Bulgaria", Terrain::Coast, true, None, &["Aegean Sea", "Black Sea", "Constantinople", "Greece", "Rumania", "Serbia"]),
    province("North Africa", Terrain::Coast, false, None, &["Mid-Atlantic Ocean", "Tunis", "Western Mediterranean"]),
    province("Tunis", Terrain::Coast, true, None, &["Ionian Sea", "North Africa", "Tyrrhenian Sea", "Western Mediterranean"]),
    province("Egypt", Terrain::Coast, false, None, &["Eastern Mediterranean"]),
    // Sea zones
    province("North Sea", Terrain::Sea, false, None, &["Belgium", "Denmark", "Edinburgh", "English Channel", "Helgoland Bight", "Holland", "London", "Norway", "Norwegian Sea", "Skagerrak", "Yorkshire"]),
    province("Norwegian Sea", Terrain::Sea, false, None, &["Barents Sea", "Clyde", "Edinburgh", "North Atlantic Ocean", "North Sea", "Norway"]),
    province("Barents Sea", Terrain::Sea, false, None, &["Norway", "Norwegian Sea", "St Petersburg"]),
    province("Baltic Sea", Terrain::Sea, false, None, &["Berlin", "Denmark", "Gulf of Bothnia", "Kiel", "Livonia", "Prussia", "Sweden"]),
    province("Gulf of Bothnia", Terrain::Sea, false, None, &["Baltic Sea", "Finland", "Livonia", "St Petersburg", "Sweden"]),
    province("Skagerrak", Terrain::Sea, false, None, &["Denmark", "North Sea", "Norway", "Sweden"]),
    province("Helgoland Bight", Terrain::Sea, false, None, &["Denmark", "Holland", "Kiel", "North Sea"]),
    province("English Channel", Terrain::Sea, false, None, &["Belgium", "Brest", "Irish Sea", "London", "Mid-Atlantic Ocean", "North Sea", "Picardy", "Wales"]),
    province("Irish Sea", Terrain::Sea, false, None, &["English Channel", "Liverpool", "Mid-Atlantic Ocean", "North Atlantic Ocean", "Wales"]),
    province("Mid-Atlantic Ocean", Terrain::Sea, false, None, &["Brest", "English Channel", "Gascony", "Irish Sea", "North Africa", "North Atlantic Ocean", "Portugal", "Spain", "Western Mediterranean"]),
    province("Gulf of Lyon", Terrain::Sea, false, None, &["Marseilles", "Piedmont", "Spain", "Tuscany", "Tyrrhenian Sea", "Western Mediterranean"]),
    province("Western Mediterranean", Terrain::Sea, false, None, &["Gulf of Lyon", "Mid-Atlantic Ocean", "North Africa", "Spain", "Tunis", "Tyrrhenian Sea"]),
    province("Tyrrhenian Sea", Terrain::Sea, false, None, &["Gulf of Lyon", "Ionian Sea", "Naples", "Rome", "Tunis", "Tuscany", "Western Mediterranean"]),
    province("Ionian Sea", Terrain::Sea, false, None, &["Adriatic Sea", "Aegean Sea", "Albania", "Apulia", "Eastern Mediterranean", "Greece", "Naples", "Tunis", "Tyrrhenian Sea"]),
    province("Adriatic Sea", Terrain::Sea, false, None, &["Albania", "Apulia", "Ionian Sea", "Trieste", "Venice"]),
    province("Aegean Sea", Terrain::Sea, false, None, &["Bulgaria", "Constantinople", "Eastern Mediterranean", "Greece", "Ionian Sea", "Smyrna"]),
    province("Eastern Mediterranean", Terrain::Sea, false, None, &["Aegean Sea", "Egypt", "Ionian Sea", "Smyrna", "Syria"]),
    province("Black Sea", Terrain::Sea, false, None, &["Ankara", "Armenia", "Bulgaria", "Constantinople", "Rumania", "Sevastopol"]),
    province("North Atlantic Ocean", Terrain::Sea, false, None, &["Clyde", "Irish Sea", "Liverpool", "Mid-Atlantic Ocean", "Norwegian Sea"]),
];

/// The 22-unit opening deployment of 1901.
pub static INITIAL_UNITS: &[(&str, UnitKind, Power)] = &[
    ("Vienna", UnitKind::Army, Power::Austria),
    ("Budapest", UnitKind::Army, Power::Austria),
    ("Trieste", UnitKind::Fleet, Power::Austria),
    ("London", UnitKind::Fleet, Power::England),
    ("Edinburgh", UnitKind::Fleet, Power::England),
    ("Liverpool", UnitKind::Army, Power::England),
    ("Paris", UnitKind::Army, Power::France),
    ("Marseilles", UnitKind::Army, Power::France),
    ("Brest", UnitKind::Fleet, Power::France),
    ("Berlin", UnitKind::Army, Power::Germany),
    ("Kiel", UnitKind::Fleet, Power::Germany),
    ("Munich", UnitKind::Army, Power::Germany),
    ("Rome", UnitKind::Army, Power::Italy),
    ("Venice", UnitKind::Army, Power::Italy),
    ("Naples", UnitKind::Fleet, Power::Italy),
    ("Moscow", UnitKind::Army, Power::Russia),
    ("Sevastopol", UnitKind::Fleet, Power::Russia),
    ("St Petersburg", UnitKind::Fleet, Power::Russia),
    ("Warsaw", UnitKind::Army, Power::Russia),
    ("Constantinople", UnitKind::Army, Power::Turkey),
    ("Ankara", UnitKind::Army, Power::Turkey),
    ("Smyrna", UnitKind::Fleet, Power::Turkey),
];
