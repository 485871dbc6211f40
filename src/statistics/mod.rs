//! Statistical building blocks for the stability index.
//!
//! This module provides the core statistical infrastructure:
//! - Quantile breakpoint construction from the expected sample
//! - Bucketed frequency counting against fixed breakpoints
//! - Symmetric log-ratio divergence accumulation
//!
//! Each piece is an independent pure function taking explicit parameters,
//! so the per-variable pipeline composes them without shared state.

mod divergence;
mod histogram;
mod quantile;

pub use divergence::accumulate_psi;
pub use histogram::bucket_counts;
pub use quantile::{breakpoints_sorted, quantile_breakpoints, quantile_sorted};
