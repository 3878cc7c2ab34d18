mod common;

use common::{sample_record, tiny_png_base64};
use rshipaudit::ai::{NarrativeClient, NarrativeState, TextGenerator};
use rshipaudit::core::log::LogLogic;
use rshipaudit::core::report::{
    Block, REPORT_FOOTER, REPORT_TITLE, ReportLogic, build_prompt, decode_photo,
    default_report_path, find_inspection, narrate, report_blocks,
};
use rshipaudit::core::submit::submit;
use rshipaudit::db::pool::DbPool;
use rshipaudit::errors::{AppError, AppResult};
use rshipaudit::export::pdf::win_ansi;
use rshipaudit::export::report_pdf::render_blocks;
use rshipaudit::export::{Align, OutputGuard, PdfManager};
use rshipaudit::models::{PhotoEntry, Ship, Zone};
use std::fs;
use std::path::Path;

/// Generator with a canned answer.
struct CannedGenerator(Option<String>);

impl TextGenerator for CannedGenerator {
    fn generate(&self, _prompt: &str) -> AppResult<Option<String>> {
        Ok(self.0.clone())
    }
}

struct DownGenerator;

impl TextGenerator for DownGenerator {
    fn generate(&self, _prompt: &str) -> AppResult<Option<String>> {
        Err(AppError::Ai("API error 503 Service Unavailable".to_string()))
    }
}

#[test]
fn test_narrative_success_is_trimmed() {
    let mut client = NarrativeClient::new(CannedGenerator(Some("  Zona limpia.\n".to_string())));
    assert_eq!(client.state(), &NarrativeState::Idle);

    let text = client.send_prompt("prompt").expect("narrative");
    assert_eq!(text, "Zona limpia.");
    assert_eq!(
        client.state(),
        &NarrativeState::Success("Zona limpia.".to_string())
    );
    assert_eq!(client.state().text(), Some("Zona limpia."));
}

#[test]
fn test_empty_narrative_is_an_error() {
    for answer in [None, Some("   ".to_string())] {
        let mut client = NarrativeClient::new(CannedGenerator(answer));
        let err = client.send_prompt("prompt").expect_err("empty");
        assert!(matches!(err, AppError::EmptyAiResponse));
        assert_eq!(
            client.state(),
            &NarrativeState::Error("empty response".to_string())
        );
    }
}

#[test]
fn test_service_failure_sets_error_state() {
    let mut client = NarrativeClient::new(DownGenerator);
    let err = client.send_prompt("prompt").expect_err("down");
    assert!(matches!(err, AppError::Ai(_)));
    match client.state() {
        NarrativeState::Error(msg) => assert!(msg.contains("503")),
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn test_narrate_falls_back_to_notice() {
    let rec = sample_record("Ciudad de Palma", "Bar", "15/03/2026");

    let mut down = NarrativeClient::new(DownGenerator);
    let text = narrate(&mut down, &rec);
    assert!(text.starts_with("Narrative evaluation unavailable"));

    let mut ok = NarrativeClient::new(CannedGenerator(Some("Todo correcto".to_string())));
    assert_eq!(narrate(&mut ok, &rec), "Todo correcto");
}

#[test]
fn test_prompt_carries_record_without_photos() {
    let mut rec = sample_record("Ciudad de Palma", "Bar", "15/03/2026");
    let photo = tiny_png_base64();
    rec.photos[0].data = photo.clone();

    let prompt = build_prompt(&rec).expect("prompt");
    assert!(prompt.contains("does_not_conform"));
    assert!(prompt.contains("Mancha junto a la barra"));
    assert!(prompt.contains("Ciudad de Palma"));
    assert!(!prompt.contains(&photo));
}

#[test]
fn test_find_inspection() {
    let pool = DbPool::in_memory().expect("db");

    let day = "15/03/2026";

    let err = find_inspection(&pool, Ship::CiudadPalma, Zone::Bar, day).expect_err("empty");
    assert!(matches!(err, AppError::NoInspectionFound { .. }));

    let record = sample_record("Ciudad de Palma", "Bar", day);
    submit(&pool, &record).expect("submit");
    let rec = find_inspection(&pool, Ship::CiudadPalma, Zone::Bar, day).expect("found");
    assert_eq!(rec.user, "inspector@example.com");
}

#[test]
fn test_blocks_skip_missing_and_broken_photos() {
    let mut rec = sample_record("Ciudad de Palma", "Bar", "15/03/2026");
    rec.photos = vec![
        PhotoEntry {
            key: "A - uno".to_string(),
            data: tiny_png_base64(),
        },
        PhotoEntry {
            key: "A - dos".to_string(),
            data: String::new(),
        },
        PhotoEntry {
            key: "A - tres".to_string(),
            data: "not base64 at all!".to_string(),
        },
        PhotoEntry {
            key: "A - cuatro".to_string(),
            data: format!("data:image/png;base64,{}", tiny_png_base64()),
        },
    ];

    let blocks = report_blocks(&rec, "Texto", None);

    assert_eq!(blocks[0], Block::Title(REPORT_TITLE.to_string()));
    assert_eq!(
        blocks[1],
        Block::Field {
            label: "Ship",
            value: "Ciudad de Palma".to_string(),
        }
    );
    assert_eq!(blocks[4], Block::Narrative("Texto".to_string()));

    let captions: Vec<&str> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::PhotoCaption(c) => Some(c.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(captions, ["Photo: A - uno", "Photo: A - cuatro"]);
    let photos = blocks.iter().filter(|b| matches!(b, Block::Photo(_))).count();
    assert_eq!(photos, 2);

    let footer = Block::Footer(REPORT_FOOTER.to_string());
    assert_eq!(blocks.last(), Some(&footer));
}

#[test]
fn test_missing_header_image_is_skipped() {
    let rec = sample_record("Ciudad de Palma", "Bar", "15/03/2026");
    let blocks = report_blocks(&rec, "Texto", Some(Path::new("/definitely/not/here.png")));
    assert_eq!(blocks[0], Block::Title(REPORT_TITLE.to_string()));
}

#[test]
fn test_decode_photo() {
    let img = decode_photo(&tiny_png_base64()).expect("decodes");
    assert_eq!(img.dimensions(), (4, 3));
    assert!(decode_photo("").is_none());
    assert!(decode_photo("aGVsbG8=").is_none());
}

#[test]
fn test_render_produces_pdf() {
    let mut rec = sample_record("Ciudad de Sóller", "Acomodación", "15/03/2026");
    rec.photos[0].data = tiny_png_base64();

    let bytes = render_blocks(&report_blocks(&rec, "Evaluación correcta.", None)).expect("render");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_long_text_breaks_pages() {
    let mut pdf = PdfManager::new();
    for i in 0..120 {
        let line = format!("Línea {i} del informe de limpieza");
        pdf.add_paragraph(&line, 11.0, Align::Left, false);
    }
    assert!(pdf.page_count() > 1);
    assert!(pdf.finish().starts_with(b"%PDF"));
}

#[test]
fn test_win_ansi_encoding() {
    assert_eq!(win_ansi("Sóller"), b"S\xf3ller".to_vec());
    assert_eq!(win_ansi("✓"), b"?".to_vec());
}

#[test]
fn test_report_is_written_and_logged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pool = DbPool::in_memory().expect("db");
    let rec = sample_record("Ciudad de Palma", "Bar", "15/03/2026");
    submit(&pool, &rec).expect("submit");

    let out = default_report_path(dir.path(), Ship::CiudadPalma, Zone::Bar, "15/03/2026");
    assert!(out.ends_with("Report_palma_bar_20260315.pdf"));

    let path = ReportLogic::render(&pool.conn, &rec, "Texto", None, &out).expect("render");
    let content = fs::read(&path).expect("read report");
    assert!(content.starts_with(b"%PDF"));

    let entries = LogLogic::entries(&pool).expect("log");
    assert!(entries.iter().any(|e| e.operation == "report"));
}

#[test]
fn test_output_guard_removes_unfinished_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("partial.pdf");

    {
        let mut guard = OutputGuard::create(&path).expect("create");
        guard.write_all(b"%PDF-1.7 half").expect("write");
        assert!(path.exists());
    }
    assert!(!path.exists());

    let mut guard = OutputGuard::create(&path).expect("create");
    guard.write_all(b"%PDF-1.7 full").expect("write");
    let kept = guard.commit().expect("commit");
    assert_eq!(fs::read(kept).expect("read"), b"%PDF-1.7 full");
}
