// File: crates/pulse-examples/src/bin/weekly.rs
// Summary: Minimal example that renders a weekly activity chart to SVG.

use pulse_core::Series;
use pulse_render_svg::{render_to_svg, RenderOptions};

fn main() {
    // One week of active minutes
    let series = Series::from_pairs(&[
        ("Mon", 45.0),
        ("Tue", 70.0),
        ("Wed", 35.0),
        ("Thu", 85.0),
        ("Fri", 60.0),
        ("Sat", 90.0),
        ("Sun", 25.0),
    ]);

    let opts = RenderOptions { height: 200.0, ..Default::default() };
    let out = std::path::PathBuf::from("target/out/example_weekly.svg");
    render_to_svg(&series, &opts, &out).expect("render to svg");
    println!("Wrote {}", out.display());
}
