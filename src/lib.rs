//! Two small numeric utilities sharing one crate:
//!
//! * [`squares`] – parse numbers from text and compute a weighted sum of
//!   squares or an arithmetic mean.
//! * [`pi`] + [`bench`] – estimate pi by Monte Carlo sampling and time the
//!   estimator with a best-of-N harness.
//!
//! The two chains never depend on each other.

pub mod bench;
pub mod error;
pub mod pi;
pub mod squares;

pub use error::{Error, Result};
