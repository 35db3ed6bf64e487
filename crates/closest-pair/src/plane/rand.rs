//! Random planar point clouds (uniform box + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property tests, benches, and `cli random`.
//!
//! Model
//! - Draw `n` points uniformly in the box `[-half_width, half_width]²`.
//! - Optionally snap coordinates to a lattice (forces shared x/y values, the
//!   partition edge case) and re-emit earlier points as duplicates.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Pt2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Half side length of the sampling box centered at the origin.
    pub half_width: f64,
    /// Snap coordinates to multiples of this step. `None` keeps raw floats.
    pub lattice: Option<f64>,
    /// Probability in [0, 1] that a point after the first repeats an earlier one.
    pub duplicate_frac: f64,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(100),
            half_width: 1.0,
            lattice: None,
            duplicate_frac: 0.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud. Same `(cfg, tok)` always yields the same points.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Pt2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let w = if cfg.half_width.is_finite() {
        cfg.half_width.abs().max(1e-9)
    } else {
        1.0
    };
    let dup = cfg.duplicate_frac.clamp(0.0, 1.0);
    let step = cfg.lattice.filter(|s| s.is_finite() && *s > 0.0);
    let snap = |v: f64| match step {
        Some(s) => (v / s).round() * s,
        None => v,
    };
    let mut pts: Vec<Pt2> = Vec::with_capacity(n);
    for _ in 0..n {
        if !pts.is_empty() && dup > 0.0 && rng.gen::<f64>() < dup {
            let k = rng.gen_range(0..pts.len());
            pts.push(pts[k]);
            continue;
        }
        let x = snap(rng.gen_range(-w..=w));
        let y = snap(rng.gen_range(-w..=w));
        pts.push(Pt2::new(x, y));
    }
    pts
}
