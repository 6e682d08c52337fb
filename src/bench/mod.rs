//! Best-of-N timing of zero-argument operations.

pub mod format;
pub mod harness;

pub use format::{format_duration, format_time, loops_line};
pub use harness::{repeat, try_repeat, TimingSample};
