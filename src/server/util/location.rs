//! Codec for vehicle location strings.
//!
//! A vehicle's `locations` array stores branch cities as `"CityName (lat,lng)"`
//! or bare `"CityName"`. City identity is the name segment before the first
//! `(`, trimmed and compared case-insensitively; everything else about the
//! entry (including punctuation in the name) passes through untouched.

/// A branch city with resolved coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CityPoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Fallback coordinates for cities missing from the table (Mannheim).
const DEFAULT_COORDINATES: (f64, f64) = (49.489, 8.467);

/// Known branch cities and their coordinates.
const CITY_COORDINATES: &[(&str, (f64, f64))] = &[
    ("mannheim", (49.489, 8.467)),
    ("frankfurt", (50.11, 8.682)),
    ("berlin", (52.52, 13.405)),
    ("hamburg", (53.551, 9.993)),
    ("münchen", (48.137, 11.576)),
    ("köln", (50.937, 6.96)),
    ("bremen", (53.0793, 8.8017)),
    ("düsseldorf", (51.2277, 6.7735)),
    ("stuttgart", (48.7758, 9.1829)),
    ("dortmund", (51.5136, 7.4653)),
    ("essen", (51.4556, 7.0116)),
    ("leipzig", (51.3397, 12.3731)),
    ("dresden", (51.0504, 13.7373)),
    ("hannover", (52.3759, 9.732)),
    ("nürnberg", (49.4521, 11.0767)),
    ("wuppertal", (51.2562, 7.1482)),
];

/// Extracts the city name from a location entry, dropping any coordinate suffix.
pub fn city_name(entry: &str) -> &str {
    match entry.split_once('(') {
        Some((name, _)) => name.trim(),
        None => entry.trim(),
    }
}

/// Normalized key for case-insensitive city comparison.
pub fn city_key(entry: &str) -> String {
    city_name(entry).to_lowercase()
}

/// Parses a full `"CityName (lat,lng)"` entry; `None` for bare names or
/// malformed coordinate suffixes.
pub fn parse_point(entry: &str) -> Option<CityPoint> {
    let (name, rest) = entry.split_once('(')?;
    let coords = rest.trim().strip_suffix(')')?;
    let (lat, lng) = coords.split_once(',')?;

    Some(CityPoint {
        name: name.trim().to_string(),
        lat: lat.trim().parse().ok()?,
        lng: lng.trim().parse().ok()?,
    })
}

/// Looks up coordinates for a known city; matching tolerates prefixes and
/// suffixes in either direction ("Berlin Mitte" still resolves to Berlin).
pub fn known_city_coordinates(city: &str) -> Option<(f64, f64)> {
    let lower = city.trim().to_lowercase();

    CITY_COORDINATES
        .iter()
        .find(|(name, _)| lower.contains(name) || name.contains(lower.as_str()))
        .map(|(_, coords)| *coords)
}

/// Encodes a city into a full location entry, falling back to the Mannheim
/// coordinates for unknown cities.
pub fn with_coordinates(city: &str) -> String {
    let (lat, lng) = known_city_coordinates(city).unwrap_or(DEFAULT_COORDINATES);

    format!("{} ({},{})", city, lat, lng)
}

/// Resolves every entry to a coordinate point for the detail view. Entries
/// without a parseable suffix fall back to the known-city table and keep the
/// raw entry as their display name.
pub fn extract_points(locations: &[String]) -> Vec<CityPoint> {
    locations
        .iter()
        .map(|entry| {
            parse_point(entry).unwrap_or_else(|| {
                let (lat, lng) =
                    known_city_coordinates(entry).unwrap_or(DEFAULT_COORDINATES);
                CityPoint {
                    name: entry.clone(),
                    lat,
                    lng,
                }
            })
        })
        .collect()
}

/// Moves a vehicle between branch cities on drop-off: the pickup city's entry
/// is removed and the drop-off city is added (with coordinates) unless an
/// entry for it already exists. Applying the same move twice is a no-op.
pub fn relocate(locations: &[String], pickup: &str, dropoff: &str) -> Vec<String> {
    let pickup_key = city_key(pickup);
    let dropoff_key = city_key(dropoff);

    let mut result: Vec<String> = locations
        .iter()
        .filter(|entry| city_key(entry) != pickup_key)
        .cloned()
        .collect();

    let dropoff_exists = result.iter().any(|entry| city_key(entry) == dropoff_key);
    if !dropoff_exists {
        result.push(with_coordinates(dropoff));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_name_strips_coordinate_suffix() {
        assert_eq!(city_name("Berlin (52.52,13.405)"), "Berlin");
        assert_eq!(city_name("Berlin"), "Berlin");
        assert_eq!(city_name("  Berlin  "), "Berlin");
    }

    #[test]
    fn city_name_round_trips_punctuated_names() {
        // Any punctuation other than '(' must survive encode/decode.
        for name in [
            "Frankfurt am Main",
            "Köln-Süd",
            "St. Pauli",
            "Castrop-Rauxel",
            "Weiden i.d. Oberpfalz",
        ] {
            assert_eq!(city_name(&with_coordinates(name)), name);
        }
    }

    #[test]
    fn parse_point_reads_encoded_coordinates() {
        let point = parse_point("Hamburg (53.551,9.993)").unwrap();
        assert_eq!(point.name, "Hamburg");
        assert_eq!(point.lat, 53.551);
        assert_eq!(point.lng, 9.993);
    }

    #[test]
    fn parse_point_rejects_bare_and_malformed_entries() {
        assert!(parse_point("Hamburg").is_none());
        assert!(parse_point("Hamburg (53.551)").is_none());
        assert!(parse_point("Hamburg (a,b)").is_none());
    }

    #[test]
    fn with_coordinates_uses_known_city_table() {
        assert_eq!(with_coordinates("Berlin"), "Berlin (52.52,13.405)");
    }

    #[test]
    fn with_coordinates_defaults_unknown_cities_to_mannheim() {
        assert_eq!(with_coordinates("Atlantis"), "Atlantis (49.489,8.467)");
    }

    #[test]
    fn extract_points_falls_back_for_bare_entries() {
        let points = extract_points(&[
            "Berlin (52.52,13.405)".to_string(),
            "Hamburg".to_string(),
            "Atlantis".to_string(),
        ]);

        assert_eq!(points[0].name, "Berlin");
        assert_eq!(points[1].name, "Hamburg");
        assert_eq!(points[1].lat, 53.551);
        // Unknown bare entries keep the raw name and the default coordinates.
        assert_eq!(points[2].name, "Atlantis");
        assert_eq!(points[2].lat, 49.489);
    }

    #[test]
    fn relocate_moves_vehicle_between_cities() {
        let locations = vec!["Mannheim (49.489,8.467)".to_string()];

        let moved = relocate(&locations, "Mannheim", "Berlin");

        assert_eq!(moved, vec!["Berlin (52.52,13.405)".to_string()]);
    }

    #[test]
    fn relocate_keeps_existing_dropoff_entry() {
        let locations = vec![
            "Mannheim (49.489,8.467)".to_string(),
            "Berlin (52.52,13.405)".to_string(),
        ];

        let moved = relocate(&locations, "Mannheim", "berlin");

        assert_eq!(moved, vec!["Berlin (52.52,13.405)".to_string()]);
    }

    #[test]
    fn relocate_is_idempotent() {
        let locations = vec![
            "Mannheim (49.489,8.467)".to_string(),
            "Hamburg".to_string(),
        ];

        let once = relocate(&locations, "Mannheim", "Berlin");
        let twice = relocate(&once, "Mannheim", "Berlin");

        assert_eq!(once, twice);
    }

    #[test]
    fn relocate_matches_pickup_case_insensitively() {
        let locations = vec!["MANNHEIM (49.489,8.467)".to_string()];

        let moved = relocate(&locations, "mannheim", "Berlin");

        assert_eq!(moved, vec!["Berlin (52.52,13.405)".to_string()]);
    }
}
