//! Range survey: samples the simplex field at seeded random points and
//! reports extrema and moments as JSON.
//!
//! Useful for checking that the empirical normalization keeps output within
//! [-1, 1] over a given extent.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use simplex_core::{Dimension, FieldParams, ScaledField};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "survey", about = "Survey the output range of the simplex field")]
struct Args {
    /// Dimensionality to sample (2 or 3).
    #[arg(short, long, default_value = "2")]
    dims: usize,

    /// Number of random sample points.
    #[arg(short = 'n', long, default_value = "1000000")]
    samples: usize,

    /// Points are drawn uniformly from [-extent, extent] on every axis.
    #[arg(short, long, default_value = "1000.0")]
    extent: f64,

    /// Seed for the point generator.
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Optional FieldParams JSON file.
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// ── Statistics ────────────────────────────────────────────────────────────────

/// Running extrema and moments. NaN samples are counted and excluded.
#[derive(Debug, Clone, Copy)]
struct Summary {
    count: usize,
    nan_count: usize,
    outside: usize,
    min: f64,
    max: f64,
    sum: f64,
    sum_sq: f64,
}

impl Summary {
    fn new() -> Self {
        Self {
            count: 0,
            nan_count: 0,
            outside: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    /// Add one sample; `bound` is the expected magnitude limit.
    fn push(mut self, v: f64, bound: f64) -> Self {
        if v.is_nan() {
            self.nan_count += 1;
            return self;
        }
        self.count += 1;
        if v.abs() > bound {
            self.outside += 1;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        self.sum += v;
        self.sum_sq += v * v;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            nan_count: self.nan_count + other.nan_count,
            outside: self.outside + other.outside,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
        }
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        self.sum / self.count as f64
    }

    fn std_dev(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        let mean = self.mean();
        (self.sum_sq / self.count as f64 - mean * mean).max(0.0).sqrt()
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Report {
    dims: usize,
    samples: usize,
    seed: u64,
    extent: f64,
    params: FieldParams,
    min: f64,
    max: f64,
    mean: f64,
    std_dev: f64,
    nan_count: usize,
    outside_unit_range: usize,
}

fn dimension(dims: usize) -> Result<Dimension> {
    let d = match dims {
        2 => Dimension::Two,
        3 => Dimension::Three,
        4 => Dimension::Four,
        other => bail!("--dims must be 2 or 3, got {other}"),
    };
    if !d.is_supported() {
        bail!("{dims}D noise is not implemented; use --dims 2 or 3");
    }
    Ok(d)
}

fn load_params(path: Option<&PathBuf>) -> Result<FieldParams> {
    let Some(path) = path else {
        return Ok(FieldParams::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    FieldParams::from_json(&json).with_context(|| format!("parsing {}", path.display()))
}

fn survey(field: &ScaledField, dim: Dimension, samples: usize, extent: f64, seed: u64) -> Summary {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<[f64; 3]> = (0..samples)
        .map(|_| {
            [
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
            ]
        })
        .collect();

    let bound = field.params().amplitude.abs();
    points
        .par_iter()
        .map(|p| match dim {
            Dimension::Two => field.sample2d(p[0], p[1]),
            Dimension::Three => field.sample3d(p[0], p[1], p[2]),
            Dimension::Four => field.sample4d(p[0], p[1], p[2], 0.0),
        })
        .fold(Summary::new, |acc, v| acc.push(v, bound))
        .reduce(Summary::new, Summary::merge)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let dim = dimension(args.dims)?;
    if !(args.extent.is_finite() && args.extent > 0.0) {
        bail!("--extent must be finite and positive, got {}", args.extent);
    }

    let params = load_params(args.params.as_ref())?;
    let field = ScaledField::new(params).context("invalid field parameters")?;
    debug!(?params, "field parameters");

    info!(dims = args.dims, samples = args.samples, extent = args.extent, seed = args.seed, "surveying");
    let summary = survey(&field, dim, args.samples, args.extent, args.seed);

    if summary.outside > 0 {
        warn!(
            outside = summary.outside,
            min = summary.min,
            max = summary.max,
            "samples fell outside the expected range"
        );
    }

    let report = Report {
        dims: args.dims,
        samples: args.samples,
        seed: args.seed,
        extent: args.extent,
        params,
        min: summary.min,
        max: summary.max,
        mean: summary.mean(),
        std_dev: summary.std_dev(),
        nan_count: summary.nan_count,
        outside_unit_range: summary.outside,
    };
    let json = serde_json::to_string_pretty(&report)?;

    match args.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
