//! Random points in the half-open unit square [0,1)².
//!
//! Model
//! - Each coordinate is an independent `U[0,1)` draw (`Rng::gen::<f64>()`).
//! - Samples keep generation order; no dedup, no sorting.
//! - Reproducible draws use a `SampleToken` `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point with both coordinates in [0,1).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// True if both coordinates lie in [0,1).
    #[inline]
    pub fn in_unit_square(&self) -> bool {
        (0.0..1.0).contains(&self.x) && (0.0..1.0).contains(&self.y)
    }
}

/// Replay token to make point samples reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleToken {
    pub seed: u64,
    pub index: u64,
}

impl SampleToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Same seed, next index.
    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
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

/// Draw one point from the thread-local RNG.
pub fn generate_random_point() -> Point {
    generate_random_point_with(&mut rand::thread_rng())
}

/// Draw one point from `rng`; x is drawn before y.
pub fn generate_random_point_with<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let x = rng.gen::<f64>();
    let y = rng.gen::<f64>();
    Point { x, y }
}

/// `n` points from the thread-local RNG, in generation order.
pub fn build_point_sample(n: usize) -> Vec<Point> {
    build_point_sample_with(n, &mut rand::thread_rng())
}

pub fn build_point_sample_with<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    (0..n).map(|_| generate_random_point_with(rng)).collect()
}

/// `n` points fully determined by `tok`. Equal tokens give equal samples.
pub fn build_point_sample_replay(n: usize, tok: SampleToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    build_point_sample_with(n, &mut rng)
}
