//! The standard 42-territory world map.
//!
//! Territories are numbered continent by continent so that every continent
//! occupies a contiguous identifier range. The adjacency table lists each
//! undirected border once; `Board::new` mirrors it into symmetric neighbor
//! lists. All data is compile-time `static`.

use super::territory::TerritoryId;

/// The number of territories on the standard map.
pub const TERRITORY_COUNT: usize = 42;

/// The number of continents on the standard map.
pub const CONTINENT_COUNT: usize = 6;

/// The number of undirected borders on the standard map.
pub const BORDER_COUNT: usize = 83;

// North America
pub const ALASKA: TerritoryId = 0;
pub const NORTHWEST_TERRITORY: TerritoryId = 1;
pub const GREENLAND: TerritoryId = 2;
pub const ALBERTA: TerritoryId = 3;
pub const ONTARIO: TerritoryId = 4;
pub const QUEBEC: TerritoryId = 5;
pub const WESTERN_US: TerritoryId = 6;
pub const EASTERN_US: TerritoryId = 7;
pub const CENTRAL_AMERICA: TerritoryId = 8;
// South America
pub const VENEZUELA: TerritoryId = 9;
pub const BRAZIL: TerritoryId = 10;
pub const PERU: TerritoryId = 11;
pub const ARGENTINA: TerritoryId = 12;
// Africa
pub const CONGO: TerritoryId = 13;
pub const SOUTH_AFRICA: TerritoryId = 14;
pub const MADAGASCAR: TerritoryId = 15;
pub const EGYPT: TerritoryId = 16;
pub const NORTH_AFRICA: TerritoryId = 17;
pub const EAST_AFRICA: TerritoryId = 18;
// Europe
pub const ICELAND: TerritoryId = 19;
pub const GREAT_BRITAIN: TerritoryId = 20;
pub const WESTERN_EUROPE: TerritoryId = 21;
pub const NORTHERN_EUROPE: TerritoryId = 22;
pub const SCANDINAVIA: TerritoryId = 23;
pub const UKRAINE: TerritoryId = 24;
pub const SOUTHERN_EUROPE: TerritoryId = 25;
// Asia
pub const AFGHANISTAN: TerritoryId = 26;
pub const URAL: TerritoryId = 27;
pub const MIDDLE_EAST: TerritoryId = 28;
pub const CHINA: TerritoryId = 29;
pub const KAMCHATKA: TerritoryId = 30;
pub const INDIA: TerritoryId = 31;
pub const IRKUTSK: TerritoryId = 32;
pub const JAPAN: TerritoryId = 33;
pub const MONGOLIA: TerritoryId = 34;
pub const SIBERIA: TerritoryId = 35;
pub const YAKUTSK: TerritoryId = 36;
pub const SIAM: TerritoryId = 37;
// Australia
pub const INDONESIA: TerritoryId = 38;
pub const NEW_GUINEA: TerritoryId = 39;
pub const WESTERN_AUSTRALIA: TerritoryId = 40;
pub const EASTERN_AUSTRALIA: TerritoryId = 41;

/// Display names, indexed by territory identifier.
pub static TERRITORY_NAMES: [&str; TERRITORY_COUNT] = [
    "Alaska",
    "Northwest Territory",
    "Greenland",
    "Alberta",
    "Ontario",
    "Quebec",
    "Western United States",
    "Eastern United States",
    "Central America",
    "Venezuela",
    "Brazil",
    "Peru",
    "Argentina",
    "Congo",
    "South Africa",
    "Madagascar",
    "Egypt",
    "North Africa",
    "East Africa",
    "Iceland",
    "Great Britain",
    "Western Europe",
    "Northern Europe",
    "Scandinavia",
    "Ukraine",
    "Southern Europe",
    "Afghanistan",
    "Ural",
    "Middle East",
    "China",
    "Kamchatka",
    "India",
    "Irkutsk",
    "Japan",
    "Mongolia",
    "Siberia",
    "Yakutsk",
    "Siam",
    "Indonesia",
    "New Guinea",
    "Western Australia",
    "Eastern Australia",
];

/// Continent table: (name, first id, last id, reward).
pub static CONTINENTS: [(&str, TerritoryId, TerritoryId, u32); CONTINENT_COUNT] = [
    ("N. America", ALASKA, CENTRAL_AMERICA, 5),
    ("S. America", VENEZUELA, ARGENTINA, 2),
    ("Africa", CONGO, EAST_AFRICA, 3),
    ("Europe", ICELAND, SOUTHERN_EUROPE, 5),
    ("Asia", AFGHANISTAN, SIAM, 7),
    ("Australia", INDONESIA, EASTERN_AUSTRALIA, 2),
];

/// Undirected borders, each listed once.
pub static BORDERS: [(TerritoryId, TerritoryId); BORDER_COUNT] = [
    // ====================================================================
    // North America - 16
    // ====================================================================
    (ALASKA, NORTHWEST_TERRITORY),
    (ALASKA, ALBERTA),
    (NORTHWEST_TERRITORY, ALBERTA),
    (NORTHWEST_TERRITORY, ONTARIO),
    (NORTHWEST_TERRITORY, GREENLAND),
    (GREENLAND, ONTARIO),
    (GREENLAND, QUEBEC),
    (ALBERTA, ONTARIO),
    (ALBERTA, WESTERN_US),
    (ONTARIO, QUEBEC),
    (ONTARIO, WESTERN_US),
    (ONTARIO, EASTERN_US),
    (QUEBEC, EASTERN_US),
    (WESTERN_US, EASTERN_US),
    (WESTERN_US, CENTRAL_AMERICA),
    (EASTERN_US, CENTRAL_AMERICA),
    // ====================================================================
    // South America - 5
    // ====================================================================
    (VENEZUELA, BRAZIL),
    (VENEZUELA, PERU),
    (BRAZIL, PERU),
    (BRAZIL, ARGENTINA),
    (PERU, ARGENTINA),
    // ====================================================================
    // Africa - 9
    // ====================================================================
    (CONGO, NORTH_AFRICA),
    (CONGO, EAST_AFRICA),
    (CONGO, SOUTH_AFRICA),
    (SOUTH_AFRICA, EAST_AFRICA),
    (SOUTH_AFRICA, MADAGASCAR),
    (MADAGASCAR, EAST_AFRICA),
    (EGYPT, NORTH_AFRICA),
    (EGYPT, EAST_AFRICA),
    (NORTH_AFRICA, EAST_AFRICA),
    // ====================================================================
    // Europe - 12
    // ====================================================================
    (ICELAND, GREAT_BRITAIN),
    (ICELAND, SCANDINAVIA),
    (GREAT_BRITAIN, SCANDINAVIA),
    (GREAT_BRITAIN, NORTHERN_EUROPE),
    (GREAT_BRITAIN, WESTERN_EUROPE),
    (WESTERN_EUROPE, NORTHERN_EUROPE),
    (WESTERN_EUROPE, SOUTHERN_EUROPE),
    (NORTHERN_EUROPE, SCANDINAVIA),
    (NORTHERN_EUROPE, UKRAINE),
    (NORTHERN_EUROPE, SOUTHERN_EUROPE),
    (SCANDINAVIA, UKRAINE),
    (UKRAINE, SOUTHERN_EUROPE),
    // ====================================================================
    // Asia - 22
    // ====================================================================
    (AFGHANISTAN, URAL),
    (AFGHANISTAN, CHINA),
    (AFGHANISTAN, INDIA),
    (AFGHANISTAN, MIDDLE_EAST),
    (URAL, SIBERIA),
    (URAL, CHINA),
    (MIDDLE_EAST, INDIA),
    (CHINA, SIBERIA),
    (CHINA, MONGOLIA),
    (CHINA, SIAM),
    (CHINA, INDIA),
    (KAMCHATKA, YAKUTSK),
    (KAMCHATKA, IRKUTSK),
    (KAMCHATKA, MONGOLIA),
    (KAMCHATKA, JAPAN),
    (INDIA, SIAM),
    (IRKUTSK, SIBERIA),
    (IRKUTSK, YAKUTSK),
    (IRKUTSK, MONGOLIA),
    (JAPAN, MONGOLIA),
    (MONGOLIA, SIBERIA),
    (SIBERIA, YAKUTSK),
    // ====================================================================
    // Australia - 5
    // ====================================================================
    (INDONESIA, NEW_GUINEA),
    (INDONESIA, WESTERN_AUSTRALIA),
    (NEW_GUINEA, EASTERN_AUSTRALIA),
    (NEW_GUINEA, WESTERN_AUSTRALIA),
    (WESTERN_AUSTRALIA, EASTERN_AUSTRALIA),
    // ====================================================================
    // Intercontinental - 14
    // ====================================================================
    (ALASKA, KAMCHATKA),
    (GREENLAND, ICELAND),
    (CENTRAL_AMERICA, VENEZUELA),
    (BRAZIL, NORTH_AFRICA),
    (NORTH_AFRICA, WESTERN_EUROPE),
    (NORTH_AFRICA, SOUTHERN_EUROPE),
    (EGYPT, SOUTHERN_EUROPE),
    (EGYPT, MIDDLE_EAST),
    (EAST_AFRICA, MIDDLE_EAST),
    (UKRAINE, MIDDLE_EAST),
    (UKRAINE, AFGHANISTAN),
    (UKRAINE, URAL),
    (SOUTHERN_EUROPE, MIDDLE_EAST),
    (SIAM, INDONESIA),
];

/// Territories flagged as frontier positions by the default evaluator tuning.
///
/// East Africa touches the Middle East but is not on this list; the derived
/// border set from `Board::derived_borders` includes it.
pub static DEFAULT_BORDER_TERRITORIES: [TerritoryId; 17] = [
    ALASKA,
    GREENLAND,
    CENTRAL_AMERICA,
    VENEZUELA,
    BRAZIL,
    EGYPT,
    NORTH_AFRICA,
    ICELAND,
    WESTERN_EUROPE,
    UKRAINE,
    SOUTHERN_EUROPE,
    AFGHANISTAN,
    URAL,
    MIDDLE_EAST,
    KAMCHATKA,
    SIAM,
    INDONESIA,
];
