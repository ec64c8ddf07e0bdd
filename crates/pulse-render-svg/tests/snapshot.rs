// File: crates/pulse-render-svg/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for SVG output.
// Behavior:
// - Renders a deterministic weekly chart to an SVG string.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note; structural checks below still apply.

use pulse_core::Series;
use pulse_render_svg::{render_document, render_to_svg, RenderOptions};

fn weekly_fixture() -> Series {
    Series::from_pairs(&[
        ("Mon", 45.0),
        ("Tue", 70.0),
        ("Wed", 35.0),
        ("Thu", 85.0),
        ("Fri", 60.0),
        ("Sat", 90.0),
        ("Sun", 25.0),
    ])
}

#[test]
fn document_structure() {
    let series = weekly_fixture();
    let doc = render_document(&series, &RenderOptions::default()).expect("render");

    assert!(doc.starts_with("<svg"));
    assert!(doc.trim_end().ends_with("</svg>"));
    assert!(doc.contains("viewBox=\"0 0 340 120\""));
    // five gridlines, one marker per point, one label per point plus three ticks
    assert_eq!(doc.matches("<line").count(), 5);
    assert_eq!(doc.matches("<circle").count(), series.len());
    assert_eq!(doc.matches("<text").count(), series.len() + 3);
    assert_eq!(doc.matches("<path").count(), 1);
}

#[test]
fn labels_are_escaped() {
    let series = Series::from_pairs(&[("a<b", 1.0), ("c&d", 2.0)]);
    let doc = render_document(&series, &RenderOptions::default()).expect("render");
    assert!(doc.contains("a&lt;b"));
    assert!(doc.contains("c&amp;d"));
    assert!(!doc.contains("c&d<"));
}

#[test]
fn too_few_points_propagates() {
    let series = Series::from_pairs(&[("only", 10.0)]);
    assert!(render_document(&series, &RenderOptions::default()).is_err());
}

#[test]
fn golden_weekly_chart() {
    let series = weekly_fixture();
    let doc = render_document(&series, &RenderOptions::default()).expect("render");

    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("weekly_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &doc).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), doc.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(doc, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn render_to_file_creates_parents() {
    let series = weekly_fixture();
    let out = std::path::PathBuf::from("target/test_out/nested/weekly.svg");
    render_to_svg(&series, &RenderOptions::default(), &out).expect("write svg");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");
}
