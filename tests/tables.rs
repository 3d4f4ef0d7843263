use views_predictor::tables::{ReferenceTables, UNKNOWN};

#[test]
fn default_tables_resolve_known_keys() {
    let tables = ReferenceTables::default();

    assert_eq!(tables.category_name(Some(10)), "Music");
    assert_eq!(tables.category_name(Some(25)), "News & Politics");
    assert_eq!(tables.category_boost("Music"), 1.25);
    assert_eq!(tables.category_boost("News & Politics"), 0.82);
    assert_eq!(tables.weekday_name(0), "Monday");
    assert_eq!(tables.weekday_name(6), "Sunday");
    assert_eq!(tables.weekday_short_name(6), "Sun");
    assert_eq!(tables.weekday_short_name(2), "Wed");
}

#[test]
fn missing_keys_fall_back() {
    let tables = ReferenceTables::default();

    assert_eq!(tables.category_name(None), UNKNOWN);
    assert_eq!(tables.category_name(Some(99)), UNKNOWN);
    assert_eq!(tables.category_boost(UNKNOWN), 1.0);
    assert_eq!(tables.category_boost("Autos & Vehicles"), 1.0);
    assert_eq!(tables.weekday_name(7), UNKNOWN);
    assert_eq!(tables.weekday_short_name(200), UNKNOWN);
}

#[test]
fn every_category_has_a_boost() {
    let tables = ReferenceTables::default();
    let categories: Vec<(u32, &str)> = tables.categories().collect();

    assert_eq!(categories.len(), 10);
    assert_eq!(categories.first(), Some(&(1, "Film & Animation")));
    assert!(categories.windows(2).all(|pair| pair[0].0 < pair[1].0));
    for (_, name) in categories {
        assert!(tables.boosts.contains_key(name), "{} has no boost", name);
    }
    assert_eq!(tables.weekdays().count(), 7);
}

#[test]
fn invalid_boost_entries_are_neutral() {
    let mut tables = ReferenceTables::default();
    tables.boosts.insert("Music".to_string(), f64::NAN);
    tables.boosts.insert("Gaming".to_string(), -2.0);

    assert_eq!(tables.category_boost("Music"), 1.0);
    assert_eq!(tables.category_boost("Gaming"), 1.0);
}

#[test]
fn weekday_listing_stops_at_addressable_indices() {
    let tables = ReferenceTables {
        weekdays: (0..300).map(|index| format!("Day {}", index)).collect(),
        ..ReferenceTables::default()
    };

    let listed: Vec<(u8, &str)> = tables.weekdays().collect();
    assert_eq!(listed.len(), 256);
    assert_eq!(listed[255], (255, "Day 255"));
    assert_eq!(tables.weekday_name(0), "Day 0");
}
