//! Sum-of-squares utility: parsing, statistics and result output.
//!
//! Architecture:
//! ```text
//!  .txt / .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  parser   │  tokens → Vec<f64>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  stats    │  Σ wᵢ·xᵢ²  or  mean
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  sink     │  optional persisted result
//!   └──────────┘
//! ```

pub mod parser;
pub mod sink;
pub mod stats;

pub use parser::{load_numbers, parse_lines};
pub use sink::{FileSink, MemorySink, ResultSink};
pub use stats::{checked_sqrt, mean, weighted_sum_of_squares};
