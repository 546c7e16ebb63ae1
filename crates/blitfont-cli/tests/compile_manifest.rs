//! Command-level tests against a synthesized manifest and sprite sheet.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use blitfont_backend::{str_hash, PatternView, CLUSTER_SEED};
use blitfont_cli::commands::{compile, inspect, preview, validate};
use blitfont_spec::Report;
use png::{BitDepth, ColorType, Encoder};
use pretty_assertions::assert_eq;
use serde_json::Value;

/// Two fonts: `Tiny` has a sheet on disk, `Broken` points at a missing one.
const MANIFEST: &str = r#"{"fonts": [
    {"name": "Tiny", "sprites": "img/tiny.png", "size": 8, "cols": 4,
     "blocks": ["BASIC_LATIN", "LATIN_1_SUPPLEMENT"],
     "charmap": [
        {"cluster": "41", "row": 0, "col": 0},
        {"cluster": "42", "row": 0, "col": 1},
        {"cluster": "20", "row": 0, "col": 2},
        {"cluster": "e9", "row": 0, "col": 3}
     ],
     "trim_rules": [{"kind": "space", "row": 0, "col": 2}],
     "legal": "Synthetic test glyphs."},
    {"name": "Broken", "sprites": "img/missing.png", "size": 8, "cols": 4,
     "blocks": ["BASIC_LATIN"],
     "charmap": [{"cluster": "41", "row": 0, "col": 0}]}
]}"#;

/// Fills `[x0, x1) x [y0, y1)` of cell `col` in row 0 with ink.
fn fill(gray: &mut [u8], col: u32, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in y0..y1 {
        for x in x0..x1 {
            gray[(y * 32 + col * 8 + x) as usize] = 0;
        }
    }
}

/// Writes the manifest and a 32x8 grayscale sheet, returns the manifest path.
fn write_fixture(dir: &Path) -> String {
    let mut gray = vec![255u8; 32 * 8];
    // 'A': 2x3 block at (3, 2)
    fill(&mut gray, 0, 3, 2, 5, 5);
    // 'B': full-height bar in column 0
    fill(&mut gray, 1, 0, 0, 1, 8);
    // 'é': single pixel at (7, 7)
    fill(&mut gray, 3, 7, 7, 8, 8);

    fs::create_dir_all(dir.join("img")).unwrap();
    let file = fs::File::create(dir.join("img/tiny.png")).unwrap();
    let mut encoder = Encoder::new(std::io::BufWriter::new(file), 32, 8);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.write_header().unwrap().write_image_data(&gray).unwrap();

    let path = dir.join("fonts.json");
    fs::write(&path, MANIFEST).unwrap();
    path.to_str().unwrap().to_string()
}

fn read_report(path: &Path) -> Report {
    Report::from_json(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Looks a cluster up the way the generated module does.
fn find<'a>(doc: &Value, data: &'a [u32], cluster: &str) -> PatternView<'a> {
    let hashes: Vec<u32> = serde_json::from_value(doc["hashed_clusters"].clone()).unwrap();
    let offsets: Vec<usize> = serde_json::from_value(doc["pattern_offsets"].clone()).unwrap();
    let i = hashes
        .binary_search(&str_hash(cluster, CLUSTER_SEED))
        .unwrap();
    PatternView::read(data, offsets[i]).unwrap()
}

#[test]
fn test_compile_json_isolates_failing_font() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = write_fixture(tmp.path());
    let out = tmp.path().join("out");

    let code = compile::run(&manifest, out.to_str().unwrap(), None, "json", false).unwrap();
    assert_eq!(code, ExitCode::from(1));

    let tiny = read_report(&out.join("tiny.report.json"));
    assert!(tiny.ok);
    let stats = tiny.stats.unwrap();
    assert_eq!((stats.glyphs, stats.skipped), (4, 0));
    assert_eq!(tiny.outputs.len(), 1);
    assert_eq!(tiny.outputs[0].format, "json");

    let broken = read_report(&out.join("broken.report.json"));
    assert!(!broken.ok);
    assert_eq!(broken.errors[0].code, "GLYPH_009");
    assert!(broken.stats.is_none());
    assert!(!out.join("broken.json").exists());

    let json = fs::read_to_string(out.join("tiny.json")).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["name"], "Tiny");
    assert_eq!(doc["max_height"], 8);
    let data: Vec<u32> = serde_json::from_value(doc["data"].clone()).unwrap();
    assert_eq!(data.len(), stats.data_words);

    let a = find(&doc, &data, "A");
    assert_eq!((a.width(), a.height(), a.y_offset()), (2, 3, 2));
    assert_eq!(a.to_matrix().to_text(), "##\n##\n##\n");

    let b = find(&doc, &data, "B");
    assert_eq!((b.width(), b.height(), b.y_offset()), (1, 8, 0));

    let space = find(&doc, &data, " ");
    assert_eq!((space.width(), space.height(), space.y_offset()), (4, 2, 3));
    assert_eq!(space.to_matrix().ink_count(), 0);

    let e_acute = find(&doc, &data, "é");
    assert_eq!((e_acute.width(), e_acute.height(), e_acute.y_offset()), (1, 1, 7));
}

#[test]
fn test_compile_single_font_rust() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = write_fixture(tmp.path());
    let out = tmp.path().join("out");

    let code = compile::run(&manifest, out.to_str().unwrap(), Some("tiny"), "rust", true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let source = fs::read_to_string(out.join("tiny.rs")).unwrap();
    assert!(source.contains("Synthetic test glyphs."));
    assert!(source.contains("pub const MAX_HEIGHT: u8 = 8;"));
    assert!(source.contains("pub fn get_blit_pattern_offset"));
    assert!(source.contains("const HASHED_CLUSTERS: [u32; 4] = ["));

    assert!(out.join("tiny.report.json").exists());
    assert!(!out.join("broken.report.json").exists());
}

#[test]
fn test_compile_unknown_font_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = write_fixture(tmp.path());
    let out = tmp.path().join("out");

    assert!(compile::run(&manifest, out.to_str().unwrap(), Some("Nope"), "rust", false).is_err());
    assert_eq!(
        compile::run(&manifest, out.to_str().unwrap(), Some("Nope"), "rust", true).unwrap(),
        ExitCode::from(1)
    );
}

#[test]
fn test_validate_does_not_read_sheets() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = write_fixture(tmp.path());

    // The missing sheet of `Broken` only fails at compile time.
    assert_eq!(validate::run(&manifest, true).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_inspect_found_and_missing() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = write_fixture(tmp.path());

    assert_eq!(inspect::run(&manifest, "Tiny", "A", false).unwrap(), ExitCode::SUCCESS);
    assert_eq!(inspect::run(&manifest, "Tiny", "e9", true).unwrap(), ExitCode::SUCCESS);
    assert_eq!(inspect::run(&manifest, "Tiny", "Z", false).unwrap(), ExitCode::from(1));
    assert!(inspect::run(&manifest, "Broken", "A", false).is_err());
}

#[test]
fn test_preview_writes_png() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = write_fixture(tmp.path());
    let out = tmp.path().join("previews/tiny.png");

    let code = preview::run(&manifest, "Tiny", out.to_str().unwrap(), 4).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let decoder = png::Decoder::new(fs::File::open(&out).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    // 4 glyphs in one row of 4: padding + 4 * (8 + padding)
    assert_eq!((info.width, info.height), (2 + 4 * 10, 2 + 10));
    assert_eq!(info.color_type, ColorType::Grayscale);

    let first = fs::read(&out).unwrap();
    preview::run(&manifest, "Tiny", out.to_str().unwrap(), 4).unwrap();
    assert_eq!(fs::read(&out).unwrap(), first);
}
