// File: crates/demo/src/main.rs
// Summary: Demo loads a samples CSV and renders weekly/monthly charts per metric to SVG.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pulse_core::{
    monthly_series, weekly_series, DescriptorTable, MemoryStore, MetricKind, Sample, SampleStore,
};
use pulse_render_svg::{render_to_svg, RenderOptions};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the bundled sample
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/sample_activity.csv".to_string());

    let path = Path::new(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let mut store = MemoryStore::new();
    let loaded = load_samples_csv(path, &mut store)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} samples", loaded);

    if loaded == 0 {
        anyhow::bail!("no samples loaded; check headers/columns (date,metric,value).");
    }

    // Optional second arg picks a theme preset; unknown names fall back to dark.
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "dark".to_string());
    let theme = pulse_core::theme::find(&theme_name);
    println!("Theme: {}", theme.name);

    let descriptors = DescriptorTable::new();
    let opts_weekly = RenderOptions { height: 200.0, theme };
    let opts_monthly = RenderOptions {
        height: 200.0,
        theme: theme.with_stroke("hsl(38 90% 55%)"),
    };

    for kind in MetricKind::ALL {
        let samples: Vec<Sample> = store
            .list()
            .iter()
            .filter(|s| s.metric == kind)
            .cloned()
            .collect();
        if samples.is_empty() {
            println!("No samples for {}; skipping", kind.as_str());
            continue;
        }

        let desc = descriptors.get(kind);
        let total: f64 = samples.iter().map(|s| s.value).sum();
        println!(
            "{}: {} samples, {} {} total",
            desc.title,
            samples.len(),
            total,
            desc.unit
        );

        // 1) Weekly profile (Monday-first)
        let weekly = weekly_series(&samples, kind);
        let out_weekly = out_name_with(kind, "weekly");
        render_to_svg(&weekly, &opts_weekly, &out_weekly)?;
        println!("Wrote {}", out_weekly.display());

        // 2) Monthly totals, only when at least two months are present
        let monthly = monthly_series(&samples, kind);
        if monthly.len() >= 2 {
            let out_monthly = out_name_with(kind, "monthly");
            render_to_svg(&monthly, &opts_monthly, &out_monthly)?;
            println!("Wrote {}", out_monthly.display());
        } else {
            println!("Skipping monthly chart for {} (one month of data)", desc.title);
        }
    }

    Ok(())
}

/// Produce output file name like target/out/pulse_<metric>_<suffix>.svg.
/// The renderer creates the directory when writing.
fn out_name_with(kind: MetricKind, suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("pulse_{}_{}.svg", kind.as_str(), suffix));
    out
}

/// Load a `date,metric,value` CSV into the store. Returns the number of rows kept.
fn load_samples_csv(path: &Path, store: &mut impl SampleStore) -> Result<usize> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |name: &str| -> Option<usize> { headers.iter().position(|h| h == name) };
    let i_date = idx("date");
    let i_metric = idx("metric");
    let i_value = idx("value");
    let (i_date, i_metric, i_value) = match (i_date, i_metric, i_value) {
        (Some(d), Some(m), Some(v)) => (d, m, v),
        _ => anyhow::bail!("expected columns date, metric, value; got {:?}", headers),
    };

    let mut kept = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let date = rec
            .get(i_date)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());
        let metric = rec
            .get(i_metric)
            .and_then(|s| MetricKind::parse(s.trim()));
        let value = rec
            .get(i_value)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0);

        if let (Some(date), Some(metric), Some(value)) = (date, metric, value) {
            store.save(Sample::new(date, metric, value));
            kept += 1;
        }
    }
    Ok(kept)
}
