use rayon::prelude::*;

use crate::error::{Error, Result};

pub const DEFAULT_RADIUS: f64 = 1.0;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

/// For each point, whether it lies inside the circle of `radius` centred on
/// the origin. The boundary counts as inside.
///
/// Points are evaluated in parallel; the output is index-aligned with the
/// input.
pub fn within(points: &[Point], radius: f64) -> Result<Vec<bool>> {
    check_radius(radius)?;
    Ok(points.par_iter().map(|p| p.norm() <= radius).collect())
}

/// Number of points for which [`within`] is true.
pub fn count_within(points: &[Point], radius: f64) -> Result<usize> {
    Ok(within(points, radius)?.into_iter().filter(|&inside| inside).count())
}

fn check_radius(radius: f64) -> Result<()> {
    // NaN fails this comparison too
    if radius > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "radius must be positive, got {radius}"
        )))
    }
}
