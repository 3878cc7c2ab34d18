#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use rshipaudit::models::{InspectionRecord, PhotoEntry};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

pub fn rsa() -> Command {
    cargo_bin_cmd!("rshipaudit")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (and the visit draft kept beside it)
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshipaudit.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{db_path}.session.json")).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rsa()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run a whole Autoservicio visit (6 items, all conforming) through the CLI.
pub fn submit_autoservicio(db_path: &str, ship: &str, date: &str, user: &str) {
    rsa()
        .args([
            "--db",
            db_path,
            "session",
            "start",
            "--ship",
            ship,
            "--zone",
            "autoservicio",
        ])
        .assert()
        .success();

    for n in 1..=6 {
        rsa()
            .args(["--db", db_path, "session", "answer", &n.to_string(), "ok"])
            .assert()
            .success();
    }

    rsa()
        .args([
            "--db", db_path, "session", "finish", "--user", user, "--date", date,
        ])
        .assert()
        .success();
}

/// Small PNG, base64 encoded.
pub fn tiny_png_base64() -> String {
    let img = RgbImage::from_pixel(4, 3, Rgb([200, 30, 30]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("encode png");
    STANDARD.encode(buf)
}

pub fn sample_record(ship: &str, zone: &str, date: &str) -> InspectionRecord {
    let mut conforms = BTreeMap::new();
    let mut does_not_conform = BTreeMap::new();
    let mut pest = BTreeMap::new();
    let mut repair = BTreeMap::new();
    let mut observations = BTreeMap::new();

    for (key, ok) in [("SUELOS - Pasillos", true), ("SUELOS - Salones", false)] {
        conforms.insert(key.to_string(), ok);
        does_not_conform.insert(key.to_string(), !ok);
        pest.insert(key.to_string(), false);
        repair.insert(key.to_string(), !ok);
        observations.insert(key.to_string(), String::new());
    }
    let stain = "Mancha junto a la barra".to_string();
    observations.insert("SUELOS - Salones".to_string(), stain);

    InspectionRecord {
        id: None,
        ship: ship.to_string(),
        zone: zone.to_string(),
        user: "inspector@example.com".to_string(),
        date: date.to_string(),
        time: "10:30:00".to_string(),
        conforms,
        does_not_conform,
        pest,
        repair,
        observations,
        photos: vec![
            PhotoEntry {
                key: "SUELOS - Pasillos".to_string(),
                data: String::new(),
            },
            PhotoEntry {
                key: "SUELOS - Salones".to_string(),
                data: String::new(),
            },
        ],
    }
}
