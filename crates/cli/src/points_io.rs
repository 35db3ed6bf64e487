//! Point-set input (CSV / JSON) and result output for the CLI.

use anyhow::{bail, Context, Result};
use closest_pair::{ClosestPair, Pt2};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Load points from `.csv` (columns `x`, `y`) or `.json` (`[[x, y], ...]` or `[{"x":..,"y":..}, ...]`).
pub fn load_points(path: &Path) -> Result<Vec<Pt2>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        other => bail!(
            "unsupported input {} (extension {:?}, expected .csv or .json)",
            path.display(),
            other
        ),
    }
}

fn load_csv(path: &Path) -> Result<Vec<Pt2>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x,y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    tracing::debug!(rows = df.height(), "input_csv_shape");
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Pt2::new(x, y)),
            _ => bail!("{} row {row}: missing coordinate", path.display()),
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

fn load_json(path: &Path) -> Result<Vec<Pt2>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<RawPoint> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing point list in {}", path.display()))?;
    Ok(raw
        .into_iter()
        .map(|p| match p {
            RawPoint::Pair([x, y]) => Pt2::new(x, y),
            RawPoint::Named { x, y } => Pt2::new(x, y),
        })
        .collect())
}

#[derive(Debug, Serialize)]
pub struct PairJson {
    pub i: usize,
    pub j: usize,
    pub a: [f64; 2],
    pub b: [f64; 2],
}

/// JSON result printed by `run` / `random` and written by `run --out`.
#[derive(Debug, Serialize)]
pub struct PairReport {
    pub algo: &'static str,
    pub count: usize,
    pub distance: f64,
    pub pair: PairJson,
}

impl PairReport {
    pub fn new(algo: &'static str, count: usize, best: &ClosestPair) -> Self {
        Self {
            algo,
            count,
            distance: best.distance(),
            pair: PairJson {
                i: best.i,
                j: best.j,
                a: [best.a.x, best.a.y],
                b: [best.b.x, best.b.y],
            },
        }
    }
}
