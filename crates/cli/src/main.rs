mod points_io;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use closest_pair::api::{
    draw_point_cloud, points_from_tuples, Algo, CloudCfg, CloudReplay, PointCount, Pt2,
};
use points_io::PairReport;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest pair of points: demo and runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgoArg {
    /// Divide and conquer, O(n log n)
    Dc,
    /// All pairs, O(n²)
    Brute,
}

impl From<AlgoArg> for Algo {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::Dc => Algo::DivideConquer,
            AlgoArg::Brute => Algo::Brute,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Closest pair of the built-in six-point set
    Demo,
    /// Closest pair of points loaded from a .csv (x,y columns) or .json file
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = AlgoArg::Dc)]
        algo: AlgoArg,
        /// Write the JSON result here, plus a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Closest pair of a reproducible uniform random cloud
    Random {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        half_width: f64,
        /// Snap coordinates to multiples of this step
        #[arg(long)]
        lattice: Option<f64>,
        #[arg(long, value_enum, default_value_t = AlgoArg::Dc)]
        algo: AlgoArg,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Run { input, algo, out } => run(input, algo.into(), out),
        Action::Random {
            count,
            seed,
            index,
            half_width,
            lattice,
            algo,
        } => random(
            CloudCfg {
                count: PointCount::Fixed(count),
                half_width,
                lattice,
                duplicate_frac: 0.0,
            },
            CloudReplay { seed, index },
            algo.into(),
        ),
        Action::Report => report(),
    }
}

fn demo() -> Result<()> {
    let points = points_from_tuples(&[
        (2.0, 3.0),
        (12.0, 30.0),
        (40.0, 50.0),
        (5.0, 1.0),
        (12.0, 10.0),
        (3.0, 4.0),
    ]);
    let best = Algo::DivideConquer.solve(&points)?;
    tracing::info!(count = points.len(), i = best.i, j = best.j, "demo");
    println!("Distance: {}", best.distance());
    Ok(())
}

fn solve(points: &[Pt2], algo: Algo) -> Result<PairReport> {
    let best = algo
        .solve(points)
        .with_context(|| format!("closest pair over {} points", points.len()))?;
    tracing::info!(
        algo = algo.name(),
        count = points.len(),
        distance = best.distance(),
        "solved"
    );
    Ok(PairReport::new(algo.name(), points.len(), &best))
}

fn run(input: PathBuf, algo: Algo, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(input = %input.display(), algo = algo.name(), "run");
    let points = points_io::load_points(&input)?;
    let report = solve(&points, algo)?;
    let body = serde_json::to_string_pretty(&report)?;
    println!("{body}");

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&out, &body).with_context(|| format!("writing {}", out.display()))?;
        let params = serde_json::json!({
            "algo": algo.name(),
            "input": input.to_string_lossy(),
            "count": points.len(),
        });
        provenance::write_sidecar(&out, &params)?;
    }
    Ok(())
}

fn random(cfg: CloudCfg, tok: CloudReplay, algo: Algo) -> Result<()> {
    tracing::info!(seed = tok.seed, index = tok.index, ?cfg, "random");
    let points = draw_point_cloud(cfg, tok);
    let report = solve(&points, algo)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": closest_pair::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
