// File: crates/meshgrid-examples/src/bin/surface.rs
// Summary: Samples z = sin(x) * cos(y) over a 2D meshgrid and writes the surface as x,y,z CSV rows.
// Usage: example-surface [nx] [ny] [out.csv]   (log level via MESHGRID_LOG, default "info")

use anyhow::{Context, Result};
use log::{debug, info};
use meshgrid_core::{linspace, meshgrid};
use std::path::PathBuf;

struct SurfaceOptions {
    x_range: (f64, f64),
    y_range: (f64, f64),
    nx: usize,
    ny: usize,
    out: PathBuf,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            x_range: (0.0, std::f64::consts::TAU),
            y_range: (-std::f64::consts::PI, std::f64::consts::PI),
            nx: 64,
            ny: 48,
            out: PathBuf::from("target/out/surface.csv"),
        }
    }
}

impl SurfaceOptions {
    fn from_args() -> Result<Self> {
        let mut opts = Self::default();
        let mut args = std::env::args().skip(1);
        if let Some(nx) = args.next() {
            opts.nx = nx.parse().with_context(|| format!("invalid nx '{nx}'"))?;
        }
        if let Some(ny) = args.next() {
            opts.ny = ny.parse().with_context(|| format!("invalid ny '{ny}'"))?;
        }
        if let Some(out) = args.next() {
            opts.out = PathBuf::from(out);
        }
        Ok(opts)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("MESHGRID_LOG", "info")).init();

    let opts = SurfaceOptions::from_args()?;
    info!("sampling {}x{} grid over x={:?} y={:?}", opts.nx, opts.ny, opts.x_range, opts.y_range);

    let xs = linspace(opts.x_range.0, opts.x_range.1, opts.nx)?;
    let ys = linspace(opts.y_range.0, opts.y_range.1, opts.ny)?;
    let (gx, gy) = meshgrid((&xs, &ys));
    debug!("grid shape {:?}, {} points", gx.shape(), gx.len());

    if let Some(parent) = opts.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    let mut wtr = csv::Writer::from_path(&opts.out)
        .with_context(|| format!("failed to open '{}'", opts.out.display()))?;
    wtr.write_record(["x", "y", "z"])?;

    let (mut zmin, mut zmax) = (f64::INFINITY, f64::NEG_INFINITY);
    for (&x, &y) in gx.iter().zip(gy.iter()) {
        let z = x.sin() * y.cos();
        zmin = zmin.min(z);
        zmax = zmax.max(z);
        wtr.write_record(&[x.to_string(), y.to_string(), z.to_string()])?;
    }
    wtr.flush()?;

    info!("z range [{:.4}, {:.4}]", zmin, zmax);
    println!("Wrote {}", opts.out.display());
    Ok(())
}
