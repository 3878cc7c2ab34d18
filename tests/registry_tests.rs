use rshipaudit::core::registry::{all_pairs, checklist, item_key, zone_keys};
use rshipaudit::models::{Ship, Zone};
use std::collections::HashSet;

#[test]
fn test_zone_sizes() {
    for (zone, sections, items) in [
        (Zone::Acomodacion, 7, 16),
        (Zone::Autoservicio, 3, 6),
        (Zone::Bar, 7, 23),
        (Zone::Cocina, 20, 75),
    ] {
        assert_eq!(checklist(zone).len(), sections, "{zone}");
        let keys = zone_keys(zone);
        assert_eq!(keys.len(), items, "{zone}");
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), items, "{zone} keys unique");
    }
}

#[test]
fn test_item_key_format() {
    assert_eq!(item_key("SUELOS", "Pasillos"), "SUELOS - Pasillos");
    assert!(zone_keys(Zone::Acomodacion).contains(&"ASEOS MUJERES - Lavabos".to_string()));
}

#[test]
fn test_section_names_are_single_line() {
    for zone in Zone::ALL {
        for section in checklist(zone) {
            assert!(!section.name.contains('\n'), "{}", section.name);
        }
    }
}

#[test]
fn test_all_pairs_ship_major() {
    let pairs = all_pairs();
    assert_eq!(pairs.len(), 16);
    assert_eq!(pairs[0], (Ship::CiudadBarcelona, Zone::Acomodacion));
    assert_eq!(pairs[3], (Ship::CiudadBarcelona, Zone::Cocina));
    assert_eq!(pairs[15], (Ship::CiudadSoller, Zone::Cocina));
}

#[test]
fn test_parse_names_and_codes() {
    assert_eq!(Ship::parse("soller"), Some(Ship::CiudadSoller));
    assert_eq!(Ship::parse("Ciudad de Sóller"), Some(Ship::CiudadSoller));
    assert_eq!(Ship::parse("Titanic"), None);
    assert_eq!(Zone::parse("ACOMODACIÓN"), Some(Zone::Acomodacion));
    assert_eq!(Zone::parse("cocina"), Some(Zone::Cocina));
    assert_eq!(Ship::CiudadPalma.to_string(), "Ciudad de Palma");
}
