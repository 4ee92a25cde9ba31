//! Diagnostic visualizer: writes grayscale PNGs of the 2D field and a 3D slice.
//! Not part of the library surface.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use simplex_core::{FieldParams, ScaledField};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render simplex noise debug images")]
struct Args {
    /// Image width and height in pixels.
    #[arg(long, default_value = "512")]
    size: u32,

    /// Noise-space units per pixel.
    #[arg(long, default_value = "0.02")]
    scale: f64,

    /// Z coordinate of the 3D slice.
    #[arg(long, default_value = "0.0")]
    z: f64,

    /// Optional FieldParams JSON file.
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long, default_value = "data/debug")]
    out_dir: PathBuf,
}

/// Noise value in [-1, 1] → gray level (clamped).
fn to_gray(v: f64) -> u8 {
    ((v * 0.5 + 0.5).clamp(0.0, 1.0) * 255.0).round() as u8
}

fn render(size: u32, sample: impl Fn(f64, f64) -> f64, scale: f64) -> image::GrayImage {
    image::GrayImage::from_fn(size, size, |c, r| {
        image::Luma([to_gray(sample(f64::from(c) * scale, f64::from(r) * scale))])
    })
}

fn save(img: &image::GrayImage, out_dir: &Path, name: &str) -> Result<()> {
    let path = out_dir.join(name);
    img.save(&path).with_context(|| format!("failed to save {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let params = match &args.params {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            FieldParams::from_json(&json)?
        }
        None => FieldParams::default(),
    };
    let field = ScaledField::new(params)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create {}", args.out_dir.display()))?;

    info!(size = args.size, scale = args.scale, "rendering 2D field");
    let img = render(args.size, |x, y| field.sample2d(x, y), args.scale);
    save(&img, &args.out_dir, "noise2d.png")?;

    info!(z = args.z, "rendering 3D slice");
    let img = render(args.size, |x, y| field.sample3d(x, y, args.z), args.scale);
    save(&img, &args.out_dir, "noise3d_slice.png")?;

    Ok(())
}
