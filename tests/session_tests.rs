use rshipaudit::core::session::InspectionSession;
use rshipaudit::errors::AppError;
use rshipaudit::models::{Answer, Polarity, Ship, Zone};

fn suelos_session() -> InspectionSession {
    let mut s = InspectionSession::new(Ship::CiudadPalma, Zone::Acomodacion);
    s.initialize_items(&["Pasillos", "Salones"], "SUELOS");
    s
}

#[test]
fn test_empty_session_is_complete() {
    let s = InspectionSession::new(Ship::CiudadPalma, Zone::Bar);
    assert!(s.is_complete());
    assert_eq!(s.expected_count(), 0);
}

#[test]
fn test_suelos_completion_follows_answers() {
    let mut s = suelos_session();
    assert_eq!(s.expected_count(), 2);
    assert!(!s.is_complete());

    s.set_answer("SUELOS - Pasillos", Polarity::Conforms, true);
    assert!(!s.is_complete());
    s.set_answer("SUELOS - Salones", Polarity::Conforms, true);
    assert!(s.is_complete());

    s.set_answer("SUELOS - Salones", Polarity::Conforms, false);
    assert!(!s.is_complete());
    assert_eq!(s.answer("SUELOS - Salones"), Answer::Unset);
}

#[test]
fn test_answers_are_mutually_exclusive() {
    let mut s = suelos_session();
    let key = "SUELOS - Pasillos";

    s.set_answer(key, Polarity::Conforms, true);
    s.set_answer(key, Polarity::DoesNotConform, true);
    assert_eq!(s.answer(key), Answer::DoesNotConform);

    // unticking the other box leaves the answer alone
    s.set_answer(key, Polarity::Conforms, false);
    assert_eq!(s.answer(key), Answer::DoesNotConform);

    let rec = s.to_record("u", "01/01/2026", "08:00:00");
    assert!(!rec.conforms[key]);
    assert!(rec.does_not_conform[key]);
}

#[test]
fn test_reinitializing_a_section_keeps_count_and_data() {
    let mut s = suelos_session();
    s.set_observation("SUELOS - Pasillos", "polvo");
    s.set_answer("SUELOS - Pasillos", Polarity::Conforms, true);

    s.initialize_items(&["Pasillos", "Salones"], "SUELOS");

    assert_eq!(s.expected_count(), 2);
    assert_eq!(s.observation("SUELOS - Pasillos"), "polvo");
    assert_eq!(s.answer("SUELOS - Pasillos"), Answer::Conforms);
}

#[test]
fn test_flags_do_not_affect_completeness() {
    let mut s = suelos_session();
    s.set_pest_flag("SUELOS - Pasillos", true);
    s.set_repair_flag("SUELOS - Salones", true);
    assert!(!s.is_complete());

    let state = s.item_state("SUELOS - Pasillos");
    assert!(state.pest);
    assert!(!state.repair);
    assert_eq!(state.answer, Answer::Unset);
}

#[test]
fn test_unregistered_key_does_not_change_completeness() {
    let mut s = suelos_session();
    s.set_answer("SUELOS - Pasillos", Polarity::Conforms, true);
    s.set_answer("SUELOS - Salones", Polarity::DoesNotConform, true);
    assert!(s.is_complete());

    s.set_answer("OTROS - Cubierta", Polarity::DoesNotConform, true);
    assert!(s.is_complete());
    assert_eq!(s.expected_count(), 2);
}

#[test]
fn test_reset_and_teardown() {
    let mut s = suelos_session();
    s.set_answer("SUELOS - Pasillos", Polarity::Conforms, true);
    s.set_answer("SUELOS - Salones", Polarity::Conforms, true);
    s.set_observation("SUELOS - Salones", "ok");
    s.set_photo("SUELOS - Salones", Some("abc".to_string()));
    assert!(s.is_complete());

    s.reset();
    assert!(!s.is_complete());
    assert_eq!(s.answer("SUELOS - Pasillos"), Answer::Unset);
    assert_eq!(s.observation("SUELOS - Salones"), "");
    assert_eq!(s.photo("SUELOS - Salones"), None);
    assert_eq!(s.expected_count(), 2);

    s.teardown();
    assert_eq!(s.expected_count(), 0);
    assert!(!s.is_complete());
}

#[test]
fn test_for_zone_registers_checklist_in_order() {
    let s = InspectionSession::for_zone(Ship::CiudadGranada, Zone::Autoservicio);
    assert_eq!(s.expected_count(), 6);

    let items = s.items();
    assert_eq!(items[0].index, 1);
    assert_eq!(items[0].key, "SUELOS - Zona Expositores Comida");
    assert_eq!(items[5].key, "CONTENEDORES - Tapa Cerrada");
}

#[test]
fn test_resolve_key_by_index_or_name() {
    let s = InspectionSession::for_zone(Ship::CiudadGranada, Zone::Autoservicio);

    assert_eq!(
        s.resolve_key("2").unwrap(),
        "EXPOSITORES COMIDA - Limpieza tras retirar bandejas comida"
    );
    assert_eq!(
        s.resolve_key("CONTENEDORES - Retirada Basura").unwrap(),
        "CONTENEDORES - Retirada Basura"
    );
    assert!(matches!(s.resolve_key("7"), Err(AppError::UnknownItem(_))));
    assert!(matches!(s.resolve_key("0"), Err(AppError::UnknownItem(_))));
}

#[test]
fn test_to_record_flattens_session() {
    let mut s = suelos_session();
    s.set_answer("SUELOS - Pasillos", Polarity::Conforms, true);
    s.set_answer("SUELOS - Salones", Polarity::DoesNotConform, true);
    s.set_repair_flag("SUELOS - Salones", true);
    s.set_photo("SUELOS - Salones", Some("cGhvdG8=".to_string()));

    let rec = s.to_record("ana@example.com", "15/03/2026", "09:10:00");

    assert_eq!(rec.ship, "Ciudad de Palma");
    assert_eq!(rec.zone, "Acomodación");
    assert_eq!(rec.conforming_count(), 1);
    assert_eq!(rec.non_conforming_count(), 1);
    assert_eq!(rec.repair_count(), 1);

    let keys: Vec<&str> = rec.photos.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, ["SUELOS - Pasillos", "SUELOS - Salones"]);
    assert_eq!(rec.photos[0].data, "");
    assert_eq!(rec.photos[1].data, "cGhvdG8=");
}

#[test]
fn test_draft_survives_save_and_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("audit.sqlite");
    let path = InspectionSession::draft_path(&db.to_string_lossy());
    assert!(path.to_string_lossy().ends_with("audit.sqlite.session.json"));

    let mut s = InspectionSession::for_zone(Ship::CiudadSoller, Zone::Bar);
    let first = s.items()[0].key.to_string();
    s.set_answer(&first, Polarity::DoesNotConform, true);
    s.save_draft(&path).expect("save draft");

    let loaded = InspectionSession::load_draft(&path)
        .expect("load draft")
        .expect("draft present");
    assert_eq!(loaded.ship(), Ship::CiudadSoller);
    assert_eq!(loaded.answer(&first), Answer::DoesNotConform);
    assert_eq!(loaded.expected_count(), s.expected_count());

    assert!(InspectionSession::discard_draft(&path).expect("discard"));
    assert!(!InspectionSession::discard_draft(&path).expect("discard again"));
    assert!(InspectionSession::load_draft(&path).expect("load").is_none());
}
