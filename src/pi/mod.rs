//! Monte Carlo estimation of pi.
//!
//! ```text
//!   PointSource ──► [0,1)² samples ──► circle::within ──► 4·inside / n
//! ```

pub mod circle;
pub mod estimator;

pub use circle::{count_within, within, Point, DEFAULT_RADIUS};
pub use estimator::{estimate_line, estimate_pi, pi_estimator, PointSource, RngSource};
