use anyhow::{Context, Result};
use chart_scan::config::DEMO_CHART_DIR;
use chart_scan::data::synthetic;
use chart_scan::domain::Timeframe;
use image::RgbImage;
use std::path::{Path, PathBuf};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEMO_CHART_DIR));
    build_demo_charts(&out_dir)
}

fn build_demo_charts(out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {:?}", out_dir))?;

    // Standard capture set: rising, flat, reversing
    let captures = [
        (Timeframe::M1, synthetic::ramp(WIDTH, HEIGHT, 300.0, 60.0)),
        (Timeframe::M5, synthetic::flat_line(WIDTH, HEIGHT, HEIGHT / 2)),
        (
            Timeframe::M15,
            synthetic::reversal_tail(WIDTH, HEIGHT, 280.0, 80.0),
        ),
    ];
    for (timeframe, img) in &captures {
        write_chart(out_dir, timeframe.default_file_name(), img)?;
    }

    let scenarios = [
        ("falling.png", synthetic::ramp(WIDTH, HEIGHT, 60.0, 300.0)),
        (
            "choppy.png",
            synthetic::zigzag(WIDTH, HEIGHT, 60.0, 300.0, 32),
        ),
        ("blank.png", synthetic::uniform(WIDTH, HEIGHT, synthetic::BACKGROUND)),
    ];
    for (name, img) in &scenarios {
        write_chart(out_dir, name, img)?;
    }

    println!(
        "✅ {} synthetic charts written to {:?}",
        captures.len() + scenarios.len(),
        out_dir
    );
    Ok(())
}

fn write_chart(out_dir: &Path, name: &str, img: &RgbImage) -> Result<()> {
    let path = out_dir.join(name);
    img.save(&path)
        .with_context(|| format!("Failed to write chart {:?}", path))?;
    println!("Wrote {:?} ({}x{})", path, img.width(), img.height());
    Ok(())
}
