use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::circle::{count_within, Point, DEFAULT_RADIUS};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Sampling source
// ---------------------------------------------------------------------------

/// Supplies uniformly distributed points in [0,1) × [0,1).
pub trait PointSource {
    fn next_point(&mut self) -> Point;
}

/// [`PointSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> PointSource for RngSource<R> {
    fn next_point(&mut self) -> Point {
        Point::new(self.rng.random::<f64>(), self.rng.random::<f64>())
    }
}

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

/// Estimate pi from `npoints` samples of the unit square: the fraction that
/// lands inside the unit quarter circle, times four.
///
/// Zero points is a division by zero.
pub fn estimate_pi<S: PointSource + ?Sized>(npoints: usize, source: &mut S) -> Result<f64> {
    if npoints == 0 {
        return Err(Error::DivisionByZero("pi estimate needs at least one point"));
    }
    let points: Vec<Point> = (0..npoints).map(|_| source.next_point()).collect();
    let inside = count_within(&points, DEFAULT_RADIUS)?;
    let estimate = 4.0 * inside as f64 / npoints as f64;
    debug!("{inside}/{npoints} points inside, pi ≈ {estimate}");
    Ok(estimate)
}

/// Bind a point count and a source into a zero-argument operation, ready to
/// hand to the timing harness.
pub fn pi_estimator<S: PointSource>(
    npoints: usize,
    mut source: S,
) -> impl FnMut() -> Result<f64> {
    move || estimate_pi(npoints, &mut source)
}

/// Estimate as printed by `calc-pi`: `pi = 3.1416 (with 10000)`.
pub fn estimate_line(estimate: f64, npoints: usize) -> String {
    format!("pi = {estimate} (with {npoints})")
}
